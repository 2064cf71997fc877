use anchor_lang::prelude::*;

/**
 * Eligibility record for a single address
 *
 * Derivation: ["eligible", airdrop_key, address]
 *
 * Lifecycle:
 * 1. Created by the owner on add_address (or remove_address) with init_if_needed
 * 2. Set to false when the reward is claimed
 * 3. May be set to true again by the owner, granting another claim
 *
 * A missing account reads as "not eligible". There is no permanent record of
 * past claims; only the current flag matters.
 */
#[account]
#[derive(Default, Debug)]
pub struct Eligibility {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Whether the address may claim one reward right now
    pub eligible: bool,
}

impl Eligibility {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Eligibility>();

    pub fn is_eligible(eligibility: Option<&Eligibility>) -> bool {
        eligibility.is_some_and(|e| e.eligible)
    }
}
