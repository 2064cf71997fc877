use anchor_lang::prelude::*;
use crate::event::*;
use crate::instructions::UpdateEligibility;

/// Revokes any pending grant for `addr`. Idempotent, including for
/// addresses that were never added.
pub fn handle_remove_address(ctx: Context<UpdateEligibility>, addr: Pubkey) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let eligibility = &mut ctx.accounts.eligibility;

    airdrop.set_eligibility(&ctx.accounts.caller.key(), eligibility, false)?;
    eligibility.bump = ctx.bumps.eligibility;

    emit_cpi!(AddressRemoved {
        airdrop: airdrop.key(),
        address: addr,
    });

    Ok(())
}
