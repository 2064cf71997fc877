use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the survey airdrop program. Exported into the IDL so
 * clients derive the same addresses.
 */

#[constant]
/// Seed for the airdrop ledger PDA
/// - Used in: ["survey_airdrop", owner, reward_mint]
/// - One ledger per (owner, reward token) pair
pub const AIRDROP_SEED: &str = "survey_airdrop";

#[constant]
/// Seed for eligibility PDAs
/// - Used in: ["eligible", airdrop_key, address]
/// - An address without this account has never been granted a reward
pub const ELIGIBILITY_SEED: &str = "eligible";
