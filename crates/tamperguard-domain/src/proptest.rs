//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Emulator classification against the threshold
//! - Lazy fact access for disabled checks
//! - Agreement between the fail-fast, collect-all and boolean evaluations

use crate::emulator::{EMULATOR_THRESHOLD, EmulatorSignal, score};
use crate::engine::{evaluate, evaluate_all, evaluate_as_bool};
use crate::facts::FactsSnapshot;
use crate::policy::Policy;
use crate::test_support::{
    CODE_CRC, PACKAGE_ID, RefusingFacts, TRUSTED_SIGNER, UNTRUSTED_SIGNER, genuine_facts,
    identity_matching,
};
use proptest::prelude::*;
use tamperguard_types::stores;

// ============================================================================
// Strategies
// ============================================================================

fn arb_signals() -> impl Strategy<Value = Vec<EmulatorSignal>> {
    prop::sample::subsequence(EmulatorSignal::ALL.to_vec(), 0..=EmulatorSignal::ALL.len())
}

fn arb_package_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(PACKAGE_ID.to_string()),
        Just(PACKAGE_ID.to_ascii_uppercase()),
        Just(String::new()),
        "[a-z]{1,8}(\\.[a-z]{1,8}){1,3}",
    ]
}

fn arb_installer() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(stores::GOOGLE_PLAY_STORE.to_string()),
        Just(stores::AMAZON_APP_STORE.to_string()),
        Just(String::new()),
        Just("com.example.sideloader".to_string()),
    ]
}

fn arb_signers() -> impl Strategy<Value = Option<Vec<String>>> {
    prop_oneof![
        Just(Some(vec![TRUSTED_SIGNER.to_string()])),
        Just(Some(vec![UNTRUSTED_SIGNER.to_string()])),
        Just(Some(vec![
            UNTRUSTED_SIGNER.to_string(),
            TRUSTED_SIGNER.to_string()
        ])),
        Just(Some(Vec::new())),
        Just(None),
    ]
}

prop_compose! {
    fn arb_facts()(
        signals in arb_signals(),
        package_id in arb_package_id(),
        installer in arb_installer(),
        signers in arb_signers(),
        crc_delta in prop_oneof![Just(0u32), 1u32..1000],
        has_code in any::<bool>(),
        debug_build in any::<bool>(),
        debug_manifest in any::<bool>(),
    ) -> FactsSnapshot {
        let mut facts = genuine_facts();
        facts.device = identity_matching(&signals);
        facts.package_id = package_id;
        facts.installer = installer;
        facts.signers = signers;
        if has_code {
            facts.bundle_entries.insert("classes.dex".to_string(), CODE_CRC.wrapping_add(crc_delta));
        } else {
            facts.bundle_entries.remove("classes.dex");
        }
        facts.debug_build = debug_build;
        facts.debug_manifest = debug_manifest;
        facts
    }
}

prop_compose! {
    fn arb_policy()(
        allow_debug in any::<bool>(),
        allow_emulator in any::<bool>(),
        check_package in any::<bool>(),
        check_installer in any::<bool>(),
        check_signature in any::<bool>(),
        check_checksum in any::<bool>(),
    ) -> Policy {
        let mut builder = Policy::builder()
            .allow_debug(allow_debug)
            .allow_emulator(allow_emulator);
        if check_package {
            builder = builder.accept_package_ids([PACKAGE_ID]);
        }
        if check_installer {
            builder = builder.accept_installers([stores::GOOGLE_PLAY_STORE]);
        }
        if check_signature {
            builder = builder.accept_signatures([TRUSTED_SIGNER]);
        }
        if check_checksum {
            builder = builder.accept_bundle_checksums([u64::from(CODE_CRC)]);
        }
        builder.build()
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn emulator_iff_more_than_threshold_signals(signals in arb_signals()) {
        let result = score(&identity_matching(&signals));
        prop_assert_eq!(result.score(), signals.len());
        prop_assert_eq!(result.is_emulator(), signals.len() > EMULATOR_THRESHOLD);
    }

    #[test]
    fn fully_permissive_policy_touches_no_facts(code_entry in "[a-z]{1,8}\\.dex") {
        let policy = Policy::builder().code_entry(code_entry).build();
        prop_assert!(evaluate(&policy, &RefusingFacts).is_valid());
        prop_assert!(evaluate_all(&policy, &RefusingFacts).is_empty());
    }

    #[test]
    fn evaluation_is_idempotent(policy in arb_policy(), facts in arb_facts()) {
        prop_assert_eq!(evaluate(&policy, &facts), evaluate(&policy, &facts));
        prop_assert_eq!(evaluate_all(&policy, &facts), evaluate_all(&policy, &facts));
    }

    #[test]
    fn bool_form_agrees_with_fail_fast(policy in arb_policy(), facts in arb_facts()) {
        prop_assert_eq!(evaluate_as_bool(&policy, &facts), evaluate(&policy, &facts).is_valid());
    }

    #[test]
    fn fail_fast_returns_first_collected_violation(policy in arb_policy(), facts in arb_facts()) {
        let first = evaluate(&policy, &facts);
        let all = evaluate_all(&policy, &facts);
        prop_assert_eq!(first.violation(), all.first());
    }

    #[test]
    fn violations_only_come_from_enabled_checks(policy in arb_policy(), facts in arb_facts()) {
        let enabled = policy.enabled_checks();
        let all = evaluate_all(&policy, &facts);
        for violation in &all {
            prop_assert!(enabled.contains(&violation.check));
            prop_assert_eq!(violation.kind.check(), Some(violation.check));
        }
        let checks: Vec<_> = all.iter().map(|v| v.check).collect();
        let mut sorted = checks.clone();
        sorted.sort();
        prop_assert_eq!(checks, sorted);
    }
}
