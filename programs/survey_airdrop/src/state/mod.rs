pub mod airdrop_state;
pub mod eligibility_state;

pub use airdrop_state::*;
pub use eligibility_state::*;
