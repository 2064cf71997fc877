use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for pause and unpause
 *
 * Access Control: Owner only (checked in the handler)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(mut)]
    pub airdrop: Account<'info, SurveyAirdrop>,

    /// Must be the airdrop owner
    pub caller: Signer<'info>,
}

/// Stops all claims. Pausing a paused airdrop is a no-op.
pub fn handle_pause(ctx: Context<SetPaused>) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    if !airdrop.set_paused(&ctx.accounts.caller.key(), true)? {
        msg!("Airdrop already paused");
        return Ok(());
    }

    emit_cpi!(AirdropPaused {
        airdrop: airdrop.key(),
    });

    Ok(())
}

/// Resumes claims. Unpausing an active airdrop is a no-op.
pub fn handle_unpause(ctx: Context<SetPaused>) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    if !airdrop.set_paused(&ctx.accounts.caller.key(), false)? {
        msg!("Airdrop not paused");
        return Ok(());
    }

    emit_cpi!(AirdropUnpaused {
        airdrop: airdrop.key(),
    });

    Ok(())
}
