use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_from_airdrop;
use crate::event::*;

/**
 * Account context for claiming a reward for oneself
 *
 * The signer is the beneficiary. Its eligibility record is optional: an
 * address that was never added has no record and the claim fails with
 * NotEligible instead of an account resolution error.
 *
 * Access Control: Any signer with an active eligibility grant
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop paying the reward
    /// - Updated with the running claim totals
    #[account(mut)]
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// Eligibility record of the claimant
    /// - Derived from: ["eligible", airdrop_key, claimant_key]
    #[account(
        mut,
        seeds = [ELIGIBILITY_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump = eligibility.bump
    )]
    pub eligibility: Option<Account<'info, Eligibility>>,

    /// Reward vault, the airdrop's associated token account
    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = airdrop,
        associated_token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account receiving the reward
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Must match the airdrop's reward token
    #[account(
        mint::token_program = token_program,
        constraint = reward_mint.key() == airdrop.reward_token @ SurveyAirdropError::TokenMintMismatch
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    pub claimant: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays the claimant's reward
 *
 * Validation Process:
 * 1. Airdrop must not be paused
 * 2. Claimant must be eligible
 * 3. Vault must hold at least one reward
 *
 * The grant is consumed before the transfer; a failed transfer aborts the
 * transaction and restores it.
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let vault_balance = ctx.accounts.token_vault.amount;
    let airdrop = &mut ctx.accounts.airdrop;

    // ===== CHECKS + EFFECTS =====
    let amount = airdrop.claim(ctx.accounts.eligibility.as_deref_mut(), vault_balance)?;
    let total_claimed = airdrop.total_claimed;
    let airdrop_key = airdrop.key();

    // ===== INTERACTIONS =====
    transfer_from_airdrop(
        &ctx.accounts.airdrop,
        &ctx.accounts.token_vault,
        &ctx.accounts.claimant_token_account,
        &ctx.accounts.reward_mint,
        &ctx.accounts.token_program,
        amount,
    )?;

    emit_cpi!(RewardClaimed {
        airdrop: airdrop_key,
        caller: ctx.accounts.claimant.key(),
        recipient: ctx.accounts.claimant.key(),
        amount,
        total_claimed,
    });

    Ok(())
}
