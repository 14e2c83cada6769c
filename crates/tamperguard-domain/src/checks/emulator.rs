use crate::emulator::{self as heuristic, EMULATOR_THRESHOLD, EmulatorSignal};
use crate::facts::FactsProvider;
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.allow_emulator {
        return None;
    }

    let identity = facts.device_identity();
    let result = heuristic::score(&identity);
    if !result.is_emulator() {
        return None;
    }

    let matched: Vec<&str> = result.matched.iter().map(|s| s.as_str()).collect();
    Some(
        Violation::new(
            CheckId::Emulator,
            FailureKind::EmulatorDetected,
            format!(
                "device looks like an emulator: {} of {} signals matched; \
product={:?} manufacturer={:?} brand={:?} device={:?} model={:?} hardware={:?} fingerprint={:?}",
                result.score(),
                EmulatorSignal::ALL.len(),
                identity.product,
                identity.manufacturer,
                identity.brand,
                identity.device,
                identity.model,
                identity.hardware,
                identity.fingerprint,
            ),
        )
        .with_data(json!({
            "score": result.score(),
            "threshold": EMULATOR_THRESHOLD,
            "matched": matched,
            "identity": identity,
        })),
    )
}
