use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;

/// Read-only eligibility lookup. The record is optional; a missing record
/// means the address was never added.
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct EligibleAddresses<'info> {
    pub airdrop: Account<'info, SurveyAirdrop>,

    #[account(
        seeds = [ELIGIBILITY_SEED.as_bytes(), airdrop.key().as_ref(), addr.as_ref()],
        bump = eligibility.bump
    )]
    pub eligibility: Option<Account<'info, Eligibility>>,
}

pub fn handle_eligible_addresses(ctx: Context<EligibleAddresses>, _addr: Pubkey) -> Result<bool> {
    Ok(Eligibility::is_eligible(ctx.accounts.eligibility.as_deref()))
}
