use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::transfer_from_airdrop;

/**
 * Account context for claiming a reward on behalf of another address
 *
 * Lets a third party submit (and pay fees for) the claim of an eligible
 * recipient. The reward always goes to the recipient's associated token
 * account, created at the caller's expense when the recipient never held the
 * reward token; the caller receives nothing.
 *
 * Access Control: Any signer
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct ClaimFor<'info> {
    #[account(mut)]
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// Eligibility record of the recipient
    /// - Derived from: ["eligible", airdrop_key, recipient]
    #[account(
        mut,
        seeds = [ELIGIBILITY_SEED.as_bytes(), airdrop.key().as_ref(), recipient.as_ref()],
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

    /// Recipient's associated token account receiving the reward
    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = reward_mint,
        associated_token::authority = recipient_wallet,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The recipient itself, needed as ATA authority
    /// CHECK: Only its key is used, pinned to the `recipient` argument
    #[account(address = recipient)]
    pub recipient_wallet: UncheckedAccount<'info>,

    #[account(
        mint::token_program = token_program,
        constraint = reward_mint.key() == airdrop.reward_token @ SurveyAirdropError::TokenMintMismatch
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// Submitter of the claim, not authorization-gated
    /// - Pays for the recipient's token account if it does not exist
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Pays `recipient`'s reward
 *
 * Same checks as claim, keyed on the recipient. A second call for the same
 * recipient fails with NotEligible.
 */
pub fn handle_claim_for(ctx: Context<ClaimFor>, recipient: Pubkey) -> Result<()> {
    let vault_balance = ctx.accounts.token_vault.amount;
    let airdrop = &mut ctx.accounts.airdrop;

    let amount = airdrop.claim(ctx.accounts.eligibility.as_deref_mut(), vault_balance)?;
    let total_claimed = airdrop.total_claimed;
    let airdrop_key = airdrop.key();

    transfer_from_airdrop(
        &ctx.accounts.airdrop,
        &ctx.accounts.token_vault,
        &ctx.accounts.recipient_token_account,
        &ctx.accounts.reward_mint,
        &ctx.accounts.token_program,
        amount,
    )?;

    emit_cpi!(RewardClaimed {
        airdrop: airdrop_key,
        caller: ctx.accounts.caller.key(),
        recipient,
        amount,
        total_claimed,
    });

    Ok(())
}
