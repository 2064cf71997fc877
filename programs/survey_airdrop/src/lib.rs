use anchor_lang::prelude::*;

declare_id!("2ibhWRsemRUk4Lkr4ZqRQGgEjy2kfNXadwFvrdM3M4rf");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Survey Airdrop Program
 *
 * Pays a fixed reward, once, to each address the owner marks as eligible.
 *
 * Key Features:
 * - Owner-managed eligibility set (add, remove, re-add after a claim)
 * - Exactly-once claims: the grant is consumed before the payout transfer
 * - Third-party claim submission (claim_for) paying the recipient only
 * - Owner pause switch gating every claim
 * - Recovery of the airdrop's whole balance of any token
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: owner, reward token, reward amount, pause flag, totals
 * - Eligibility PDAs: one flag per (airdrop, address)
 * - Token vaults: associated token accounts owned by the airdrop PDA
 *
 * Read-only state (owner, reward_token, reward_amount, paused) is available
 * from the SurveyAirdrop account; eligibility through eligible_addresses.
 *
 * Workflow:
 * 1. Owner initializes the airdrop and funds the reward vault
 * 2. Owner adds eligible addresses
 * 3. Eligible addresses (or anyone on their behalf) claim
 * 4. Owner withdraws what is left
 */
#[program]
pub mod survey_airdrop {
    use super::*;

    /**
     * Creates a new survey airdrop
     *
     * @param reward_amount - Amount paid per claim, must be positive
     * @param initial_deposit - Tokens moved from the owner into the vault
     *
     * Access Control: the signer becomes the owner
     */
    pub fn initialize(ctx: Context<Initialize>, reward_amount: u64, initial_deposit: u64) -> Result<()> {
        handle_initialize(ctx, reward_amount, initial_deposit)
    }

    /**
     * Marks an address as eligible for one reward
     *
     * Access Control: Owner only
     */
    pub fn add_address(ctx: Context<UpdateEligibility>, addr: Pubkey) -> Result<()> {
        handle_add_address(ctx, addr)
    }

    /**
     * Clears an address's eligibility
     *
     * Access Control: Owner only
     */
    pub fn remove_address(ctx: Context<UpdateEligibility>, addr: Pubkey) -> Result<()> {
        handle_remove_address(ctx, addr)
    }

    /**
     * Claims the reward for the signer
     *
     * Access Control: Any eligible signer
     */
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        handle_claim(ctx)
    }

    /**
     * Claims the reward on behalf of `recipient`
     *
     * Access Control: Any signer; the recipient must be eligible
     * Note: The reward goes to the recipient, never to the signer
     */
    pub fn claim_for(ctx: Context<ClaimFor>, recipient: Pubkey) -> Result<()> {
        handle_claim_for(ctx, recipient)
    }

    /**
     * Pauses claiming
     *
     * Access Control: Owner only
     */
    pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Resumes claiming
     *
     * Access Control: Owner only
     */
    pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Withdraws the airdrop's whole balance of the supplied token mint
     *
     * Access Control: Owner only
     */
    pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
        handle_withdraw_remaining(ctx)
    }

    /// Returns whether `addr` currently holds an eligibility grant
    pub fn eligible_addresses(ctx: Context<EligibleAddresses>, addr: Pubkey) -> Result<bool> {
        handle_eligible_addresses(ctx, addr)
    }
}
