use crate::facts::FactsProvider;
use crate::model::DebugSignals;
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.allow_debug {
        return None;
    }

    // Both sources are always read so the message names every one that tripped.
    let package_id = facts.current_package_id();
    let signals = DebugSignals {
        build: facts.is_debug_build(),
        manifest: facts.is_debug_manifest(&package_id),
    };
    if !signals.any() {
        return None;
    }

    let sources = signals.tripped_sources();
    Some(
        Violation::new(
            CheckId::DebugMode,
            FailureKind::DebugModeDetected,
            format!("running in debug mode (detected by {})", sources.join(" and ")),
        )
        .with_data(json!({
            "build_flag": signals.build,
            "manifest_flag": signals.manifest,
            "package_id": package_id,
        })),
    )
}
