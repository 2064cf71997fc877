//! Property-based tests for the airdrop ledger.
//!
//! Arbitrary action sequences run against the in-memory ledger and a plain
//! model of the expected state; every step must agree with the model and
//! conserve tokens.

use std::collections::HashSet;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use proptest::prelude::*;
use proptest::sample::Index;

use super::ledger_harness::Ledger;
use crate::error::SurveyAirdropError;

#[derive(Clone, Debug)]
enum Action {
    Add { caller: Index, target: Index },
    Remove { caller: Index, target: Index },
    Claim { target: Index },
    ClaimFor { caller: Index, target: Index },
    Pause { caller: Index },
    Unpause { caller: Index },
    Withdraw { caller: Index },
    /// Tokens sent straight to the vault by anyone
    Fund { amount: u64 },
}

fn arb_pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

/// Distinct participants; the first one owns the airdrop.
fn arb_actors() -> impl Strategy<Value = Vec<Pubkey>> {
    prop::collection::hash_set(arb_pubkey(), 2..6).prop_map(|set| set.into_iter().collect())
}

fn arb_reward() -> impl Strategy<Value = u64> {
    1u64..=1_000
}

fn arb_funding() -> impl Strategy<Value = u64> {
    0u64..=10_000
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (any::<Index>(), any::<Index>()).prop_map(|(caller, target)| Action::Add { caller, target }),
        1 => (any::<Index>(), any::<Index>()).prop_map(|(caller, target)| Action::Remove { caller, target }),
        3 => any::<Index>().prop_map(|target| Action::Claim { target }),
        3 => (any::<Index>(), any::<Index>()).prop_map(|(caller, target)| Action::ClaimFor { caller, target }),
        1 => any::<Index>().prop_map(|caller| Action::Pause { caller }),
        1 => any::<Index>().prop_map(|caller| Action::Unpause { caller }),
        1 => any::<Index>().prop_map(|caller| Action::Withdraw { caller }),
        1 => (0u64..=2_000).prop_map(|amount| Action::Fund { amount }),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 1..=20)
}

fn error_code<T>(result: &Result<T>) -> Option<u32> {
    match result {
        Ok(_) => None,
        Err(Error::AnchorError(err)) => Some(err.error_code_number),
        Err(Error::ProgramError(_)) => Some(u32::MAX),
    }
}

fn expected_code(expected: Option<SurveyAirdropError>) -> Option<u32> {
    expected.map(u32::from)
}

/// What the ledger should look like, tracked without touching the program.
struct Model {
    owner: Pubkey,
    reward: u64,
    eligible: HashSet<Pubkey>,
    paused: bool,
    vault: u64,
    supply: u64,
}

impl Model {
    fn owner_only(&self, caller: &Pubkey) -> Option<SurveyAirdropError> {
        (*caller != self.owner).then_some(SurveyAirdropError::Unauthorized)
    }

    fn claim_error(&self, recipient: &Pubkey) -> Option<SurveyAirdropError> {
        if self.paused {
            Some(SurveyAirdropError::Paused)
        } else if !self.eligible.contains(recipient) {
            Some(SurveyAirdropError::NotEligible)
        } else if self.vault < self.reward {
            Some(SurveyAirdropError::TransferFailed)
        } else {
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any action sequence agrees with the model, conserves tokens
    /// and keeps the claim totals consistent.
    #[test]
    fn prop_ledger_matches_model(
        actors in arb_actors(),
        reward in arb_reward(),
        funding in arb_funding(),
        actions in arb_actions(),
    ) {
        let owner = actors[0];
        let mut ledger = Ledger::with_funding(owner, reward, funding);
        let mint = ledger.mint();
        let mut model = Model {
            owner,
            reward,
            eligible: HashSet::new(),
            paused: false,
            vault: funding,
            supply: funding,
        };

        for action in actions {
            match action {
                Action::Add { caller, target } => {
                    let (caller, target) = (*caller.get(&actors), *target.get(&actors));
                    let expected = model.owner_only(&caller);
                    let result = ledger.add_address(caller, target);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.eligible.insert(target);
                    }
                }
                Action::Remove { caller, target } => {
                    let (caller, target) = (*caller.get(&actors), *target.get(&actors));
                    let expected = model.owner_only(&caller);
                    let result = ledger.remove_address(caller, target);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.eligible.remove(&target);
                    }
                }
                Action::Claim { target } => {
                    let target = *target.get(&actors);
                    let before = ledger.balance_of(&target);
                    let expected = model.claim_error(&target);
                    let result = ledger.claim(target);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.eligible.remove(&target);
                        model.vault -= reward;
                        prop_assert_eq!(ledger.balance_of(&target), before + reward);
                    } else {
                        prop_assert_eq!(ledger.balance_of(&target), before);
                    }
                }
                Action::ClaimFor { caller, target } => {
                    let (caller, target) = (*caller.get(&actors), *target.get(&actors));
                    let caller_before = ledger.balance_of(&caller);
                    let caller_eligible = ledger.eligible_addresses(&caller);
                    let expected = model.claim_error(&target);
                    let result = ledger.claim_for(caller, target);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.eligible.remove(&target);
                        model.vault -= reward;
                    }
                    if caller != target {
                        prop_assert_eq!(ledger.balance_of(&caller), caller_before);
                        prop_assert_eq!(ledger.eligible_addresses(&caller), caller_eligible);
                    }
                }
                Action::Pause { caller } => {
                    let caller = *caller.get(&actors);
                    let expected = model.owner_only(&caller);
                    let result = ledger.pause(caller);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.paused = true;
                    }
                }
                Action::Unpause { caller } => {
                    let caller = *caller.get(&actors);
                    let expected = model.owner_only(&caller);
                    let result = ledger.unpause(caller);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        model.paused = false;
                    }
                }
                Action::Withdraw { caller } => {
                    let caller = *caller.get(&actors);
                    let owner_before = ledger.balance_of(&owner);
                    let expected = model.owner_only(&caller).or(
                        (model.vault == 0).then_some(SurveyAirdropError::NoBalance)
                    );
                    let result = ledger.withdraw_remaining(caller, mint);
                    prop_assert_eq!(error_code(&result), expected_code(expected));
                    if result.is_ok() {
                        prop_assert_eq!(ledger.balance_of(&owner), owner_before + model.vault);
                        model.vault = 0;
                    }
                }
                Action::Fund { amount } => {
                    let key = ledger.key;
                    ledger.bank.mint_to(&mint, &key, amount);
                    model.vault += amount;
                    model.supply += amount;
                }
            }

            for actor in &actors {
                prop_assert_eq!(ledger.eligible_addresses(actor), model.eligible.contains(actor));
            }
            prop_assert_eq!(ledger.airdrop.paused, model.paused);
            prop_assert_eq!(ledger.vault_balance(), model.vault);

            let held: u64 = actors.iter().map(|actor| ledger.balance_of(actor)).sum();
            prop_assert_eq!(held + ledger.vault_balance(), model.supply);
            prop_assert_eq!(ledger.airdrop.total_claimed, ledger.airdrop.claim_count * reward);
        }
    }

    /// Property: claim_for pays the recipient only, consumes only the
    /// recipient's grant and works for a recipient with no token account.
    #[test]
    fn prop_claim_for_pays_only_recipient(
        (claimer, recipient, owner) in (arb_pubkey(), arb_pubkey(), arb_pubkey()),
        reward in arb_reward(),
        extra in 0u64..=1_000,
    ) {
        prop_assume!(claimer != recipient && recipient != owner && claimer != owner);

        let mut ledger = Ledger::with_funding(owner, reward, reward * 2 + extra);
        let mint = ledger.mint();
        ledger.add_address(owner, recipient).unwrap();
        ledger.add_address(owner, claimer).unwrap();
        prop_assert!(!ledger.bank.has_account(&mint, &recipient));

        ledger.claim_for(claimer, recipient).unwrap();
        prop_assert_eq!(ledger.balance_of(&recipient), reward);
        prop_assert_eq!(ledger.balance_of(&claimer), 0);
        prop_assert_eq!(ledger.balance_of(&owner), 0);
        prop_assert!(!ledger.eligible_addresses(&recipient));
        prop_assert!(ledger.eligible_addresses(&claimer));

        // The grant is gone no matter who submits next
        for caller in [claimer, owner, recipient] {
            let result = ledger.claim_for(caller, recipient);
            prop_assert_eq!(
                error_code(&result),
                expected_code(Some(SurveyAirdropError::NotEligible))
            );
        }

        // The claimer's own grant is untouched
        ledger.claim(claimer).unwrap();
        prop_assert_eq!(ledger.balance_of(&claimer), reward);
        prop_assert_eq!(ledger.vault_balance(), extra);
        prop_assert_eq!(ledger.airdrop.claim_count, 2);
    }

    /// Property: an eligible caller cannot claim for an ineligible recipient.
    #[test]
    fn prop_claim_for_ignores_caller_grant(
        (claimer, recipient, owner) in (arb_pubkey(), arb_pubkey(), arb_pubkey()),
        reward in arb_reward(),
    ) {
        prop_assume!(claimer != recipient && recipient != owner && claimer != owner);

        let mut ledger = Ledger::with_funding(owner, reward, reward);
        ledger.add_address(owner, claimer).unwrap();

        let result = ledger.claim_for(claimer, recipient);
        prop_assert_eq!(
            error_code(&result),
            expected_code(Some(SurveyAirdropError::NotEligible))
        );
        prop_assert!(ledger.eligible_addresses(&claimer));
        prop_assert_eq!(ledger.balance_of(&recipient), 0);
        prop_assert_eq!(ledger.vault_balance(), reward);
    }

    /// Property: with n eligible addresses, exactly min(n, funding / reward)
    /// claims are paid and each pays the configured reward.
    #[test]
    fn prop_claims_pay_configured_reward(
        participants in prop::collection::hash_set(arb_pubkey(), 1..12),
        reward in arb_reward(),
        funding in arb_funding(),
    ) {
        let owner = Pubkey::new_unique();
        prop_assume!(!participants.contains(&owner));

        let mut ledger = Ledger::with_funding(owner, reward, funding);
        for participant in &participants {
            ledger.add_address(owner, *participant).unwrap();
        }

        let mut paid = 0u64;
        for participant in &participants {
            if ledger.claim(*participant).is_ok() {
                paid += 1;
                prop_assert_eq!(ledger.balance_of(participant), reward);
            } else {
                prop_assert!(ledger.eligible_addresses(participant));
            }
        }

        let expected = (participants.len() as u64).min(funding / reward);
        prop_assert_eq!(paid, expected);
        prop_assert_eq!(ledger.vault_balance(), funding - paid * reward);
        prop_assert_eq!(ledger.airdrop.total_claimed, paid * reward);
    }
}
