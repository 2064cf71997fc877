use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::utils::transfer_from_airdrop;
use crate::event::*;

/**
 * Account context for withdrawing the airdrop's balance of a token
 *
 * Works for any mint, not only the reward token, so tokens sent to the
 * airdrop by mistake can be recovered. The airdrop's associated token account
 * for that mint is created on demand; if nothing was ever sent the balance is
 * zero, the call fails with NoBalance and the creation is rolled back.
 *
 * Access Control: Owner only (checked in the handler)
 *
 * Business Logic:
 * - Moves the entire vault balance to the owner
 * - The airdrop stays open; claims resume once the vault is refunded
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawRemaining<'info> {
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// The airdrop's associated token account for `token_mint`
    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = token_mint,
        associated_token::authority = airdrop,
        associated_token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the balance
    #[account(
        mut,
        token::mint = token_mint,
        token::token_program = token_program,
        constraint = owner_token_account.owner == airdrop.owner @ SurveyAirdropError::Unauthorized
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the token being recovered
    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must be the airdrop owner
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Withdraws the airdrop's entire balance of `token_mint` to the owner
 *
 * Validation Rules:
 * - Only the owner can call this function
 * - The vault balance must be non-zero
 *
 * Post-condition: the vault balance is zero.
 */
pub fn handle_withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====
    let amount = airdrop.withdrawable(&ctx.accounts.caller.key(), ctx.accounts.token_vault.amount)?;

    // ===== INTERACTIONS PHASE =====
    transfer_from_airdrop(
        airdrop,
        &ctx.accounts.token_vault,
        &ctx.accounts.owner_token_account,
        &ctx.accounts.token_mint,
        &ctx.accounts.token_program,
        amount,
    )?;

    ctx.accounts.token_vault.reload()?;
    require!(
        ctx.accounts.token_vault.amount == 0,
        SurveyAirdropError::TransferFailed
    );

    emit_cpi!(RemainingWithdrawn {
        airdrop: airdrop.key(),
        owner: airdrop.owner,
        token_mint: ctx.accounts.token_mint.key(),
        amount,
    });

    Ok(())
}
