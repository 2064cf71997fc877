use anchor_lang::prelude::*;

/// Event emitted when a new airdrop ledger is created
#[event]
pub struct AirdropInitialized {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner of the airdrop
    pub owner: Pubkey,
    /// Mint of the reward token
    pub reward_token: Pubkey,
    /// Reward vault address (associated token account of the airdrop)
    pub token_vault: Pubkey,
    /// Fixed reward paid per claim
    pub reward_amount: u64,
    /// Tokens deposited at creation
    pub initial_deposit: u64,
}

/// Event emitted when an address is granted eligibility
#[event]
pub struct AddressAdded {
    pub airdrop: Pubkey,
    pub address: Pubkey,
}

/// Event emitted when an address loses eligibility through the owner
#[event]
pub struct AddressRemoved {
    pub airdrop: Pubkey,
    pub address: Pubkey,
}

/// Event emitted when a reward is paid
#[event]
pub struct RewardClaimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Signer who submitted the claim
    pub caller: Pubkey,
    /// Address that received the reward
    pub recipient: Pubkey,
    /// Amount paid in this transaction
    pub amount: u64,
    /// Total amount paid out by the airdrop so far
    pub total_claimed: u64,
}

#[event]
pub struct AirdropPaused {
    pub airdrop: Pubkey,
}

#[event]
pub struct AirdropUnpaused {
    pub airdrop: Pubkey,
}

/// Event emitted when the owner sweeps a token balance out of the airdrop
#[event]
pub struct RemainingWithdrawn {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who received the tokens
    pub owner: Pubkey,
    /// Mint of the withdrawn token (not necessarily the reward token)
    pub token_mint: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}
