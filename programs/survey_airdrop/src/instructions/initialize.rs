use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{is_supported_reward_mint, transfer_token};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a survey airdrop
 *
 * - Creates the airdrop PDA holding owner, reward token and reward amount
 * - Creates the reward vault (the airdrop's associated token account)
 * - Optionally moves an initial deposit from the owner into the vault
 * - Rejects Token 2022 reward mints with a transfer fee or transfer hook
 *
 * Access Control: the signer becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The airdrop ledger account (PDA)
    /// - Derived from: ["survey_airdrop", owner, reward_mint]
    #[account(
        init,
        payer = owner,
        space = SurveyAirdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            owner.key().as_ref(),
            reward_mint.key().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// Reward vault, the associated token account of the airdrop PDA
    /// - Anything sent to the airdrop for this mint lands here
    #[account(
        init,
        payer = owner,
        associated_token::mint = reward_mint,
        associated_token::authority = airdrop,
        associated_token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the reward token
    /// - Supports both SPL Token and Token 2022 programs
    #[account(mint::token_program = token_program)]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the initial deposit
    /// - Only required when initial_deposit > 0
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// The owner of the airdrop
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Creates the airdrop ledger
 *
 * @param reward_amount - Fixed amount paid per claim, must be positive
 * @param initial_deposit - Tokens moved from the owner into the vault, may be zero
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    reward_amount: u64,
    initial_deposit: u64,
) -> Result<()> {
    require!(reward_amount > 0, SurveyAirdropError::InvalidAmount);
    require!(
        is_supported_reward_mint(&ctx.accounts.reward_mint.to_account_info())?,
        SurveyAirdropError::UnsupportedMint
    );
    let funding_account =
        deposit_source(initial_deposit, ctx.accounts.owner_token_account.as_ref())?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.set_inner(SurveyAirdrop {
        bump: ctx.bumps.airdrop,
        owner: ctx.accounts.owner.key(),
        reward_token: ctx.accounts.reward_mint.key(),
        reward_amount,
        paused: false,
        total_claimed: 0,
        claim_count: 0,
    });

    if let Some(owner_token_account) = funding_account {
        transfer_token(
            ctx.accounts.owner.to_account_info(),
            owner_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.reward_mint.decimals,
        )?;
    }

    emit_cpi!(AirdropInitialized {
        airdrop: ctx.accounts.airdrop.key(),
        owner: ctx.accounts.owner.key(),
        reward_token: ctx.accounts.reward_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        reward_amount,
        initial_deposit,
    });

    Ok(())
}

/// Account to fund the deposit from, if there is a deposit at all.
pub fn deposit_source<T>(initial_deposit: u64, owner_token_account: Option<T>) -> Result<Option<T>> {
    match (initial_deposit, owner_token_account) {
        (0, _) => Ok(None),
        (_, Some(account)) => Ok(Some(account)),
        (_, None) => err!(SurveyAirdropError::MissingTokenAccount),
    }
}
