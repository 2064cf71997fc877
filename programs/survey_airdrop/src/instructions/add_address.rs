use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for eligibility updates
 *
 * Shared by add_address and remove_address. The eligibility record is created
 * on first use, paid for by the caller; the handler rejects non-owners before
 * anything is written, and the failed transaction discards the allocation.
 *
 * Access Control: Owner only (checked in the handler)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct UpdateEligibility<'info> {
    /// The airdrop whose eligibility set is updated
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// Eligibility record for `addr`
    /// - Derived from: ["eligible", airdrop_key, addr]
    #[account(
        init_if_needed,
        payer = caller,
        space = Eligibility::LEN,
        seeds = [ELIGIBILITY_SEED.as_bytes(), airdrop.key().as_ref(), addr.as_ref()],
        bump
    )]
    pub eligibility: Account<'info, Eligibility>,

    /// Must be the airdrop owner
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Grants `addr` one reward claim
 *
 * Idempotent: adding an already eligible address leaves it eligible.
 * Adding an address that already claimed grants it a new claim.
 */
pub fn handle_add_address(ctx: Context<UpdateEligibility>, addr: Pubkey) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let eligibility = &mut ctx.accounts.eligibility;

    airdrop.set_eligibility(&ctx.accounts.caller.key(), eligibility, true)?;
    eligibility.bump = ctx.bumps.eligibility;

    emit_cpi!(AddressAdded {
        airdrop: airdrop.key(),
        address: addr,
    });

    Ok(())
}
