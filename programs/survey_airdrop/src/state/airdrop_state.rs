use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::Eligibility;

/**
 * Main airdrop ledger account
 *
 * Holds the immutable reward configuration, the pause flag and the payout
 * counters. Tokens are not stored here: the ledger's balance of any mint lives
 * in the associated token account owned by this PDA.
 *
 * Derivation: ["survey_airdrop", owner, reward_token]
 *
 * Lifecycle:
 * 1. Created during initialize
 * 2. Paused / unpaused by the owner
 * 3. Counters updated on every successful claim
 * 4. Never closed; retired by draining the vault and pausing
 *
 * The methods below are the ledger's state transitions. Each one validates
 * every precondition before touching state, so a returned error leaves the
 * ledger and the eligibility record untouched.
 */
#[account]
#[derive(Default, Debug)]
pub struct SurveyAirdrop {
    /// Bump seed for PDA derivation
    /// - Saved so payouts can sign without recomputing it
    pub bump: u8,

    /// Owner of the airdrop
    /// - Manages eligibility, pause state and withdrawals
    pub owner: Pubkey,

    /// Mint of the token paid out on claims
    pub reward_token: Pubkey,

    /// Amount paid per claim, in the token's smallest unit
    pub reward_amount: u64,

    /// Claims are rejected while set
    pub paused: bool,

    /// Total amount paid out by claims
    pub total_claimed: u64,

    /// Number of successful claims
    pub claim_count: u64,
}

impl SurveyAirdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<SurveyAirdrop>();

    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, SurveyAirdropError::Unauthorized);
        Ok(())
    }

    /// Owner-only eligibility update. Re-asserting the current value is allowed.
    pub fn set_eligibility(
        &self,
        caller: &Pubkey,
        eligibility: &mut Eligibility,
        eligible: bool,
    ) -> Result<()> {
        self.only_owner(caller)?;
        eligibility.eligible = eligible;
        Ok(())
    }

    /// Owner-only pause toggle. Returns whether the flag actually changed.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<bool> {
        self.only_owner(caller)?;
        let changed = self.paused != paused;
        self.paused = paused;
        Ok(changed)
    }

    /// Consumes the beneficiary's eligibility and returns the amount to pay.
    ///
    /// Checks run in order: pause flag, eligibility, vault balance. The
    /// eligibility flip happens here, before the caller issues the transfer.
    /// `eligibility` is `None` when the beneficiary was never added.
    pub fn claim(
        &mut self,
        eligibility: Option<&mut Eligibility>,
        vault_balance: u64,
    ) -> Result<u64> {
        require!(!self.paused, SurveyAirdropError::Paused);

        let eligibility = match eligibility {
            Some(eligibility) if eligibility.eligible => eligibility,
            _ => return err!(SurveyAirdropError::NotEligible),
        };

        require!(
            vault_balance >= self.reward_amount,
            SurveyAirdropError::TransferFailed
        );

        let total_claimed = self
            .total_claimed
            .checked_add(self.reward_amount)
            .ok_or(SurveyAirdropError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(SurveyAirdropError::ArithmeticOverflow)?;

        // CEI: consume the grant before any token movement
        eligibility.eligible = false;
        self.total_claimed = total_claimed;
        self.claim_count = claim_count;

        Ok(self.reward_amount)
    }

    /// Owner-only; the full vault balance, which must be non-zero.
    pub fn withdrawable(&self, caller: &Pubkey, vault_balance: u64) -> Result<u64> {
        self.only_owner(caller)?;
        require!(vault_balance > 0, SurveyAirdropError::NoBalance);
        Ok(vault_balance)
    }
}
