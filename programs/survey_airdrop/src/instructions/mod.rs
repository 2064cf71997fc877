pub mod initialize;
pub mod add_address;
pub mod remove_address;
pub mod claim;
pub mod claim_for;
pub mod set_paused;
pub mod withdraw_remaining;
pub mod eligible_addresses;

pub use initialize::*;
pub use add_address::*;
pub use remove_address::*;
pub use claim::*;
pub use claim_for::*;
pub use set_paused::*;
pub use withdraw_remaining::*;
pub use eligible_addresses::*;
