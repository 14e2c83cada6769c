use crate::checks;
use crate::facts::FactsProvider;
use crate::outcome::{ValidationOutcome, Violation};
use crate::policy::Policy;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tamperguard_types::{CheckId, EvaluationMode, FailureKind};

/// Fail-fast evaluation: the first violated check in dispatch order, or `Valid`.
pub fn evaluate<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> ValidationOutcome {
    evaluate_with_mode(policy, facts, EvaluationMode::FailFast)
        .into_iter()
        .next()
        .into()
}

/// Collect-all evaluation: every violated check, in dispatch order.
pub fn evaluate_all<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Vec<Violation> {
    evaluate_with_mode(policy, facts, EvaluationMode::CollectAll)
}

/// `true` iff fail-fast [`evaluate`] returns `Valid`.
pub fn evaluate_as_bool<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> bool {
    evaluate(policy, facts).is_valid()
}

/// Walk the checks in dispatch order. In fail-fast mode the result holds at most one violation.
pub fn evaluate_with_mode<P: FactsProvider + ?Sized>(
    policy: &Policy,
    facts: &P,
    mode: EvaluationMode,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for check in CheckId::ALL {
        if !policy.is_enabled(check) {
            tracing::debug!(check = %check, "check disabled by policy");
            continue;
        }

        match run_guarded(check, policy, facts) {
            None => tracing::debug!(check = %check, "check passed"),
            Some(violation) => {
                tracing::warn!(
                    check = %check,
                    code = %violation.kind,
                    "check failed: {}",
                    violation.message
                );
                violations.push(violation);
                if mode == EvaluationMode::FailFast {
                    break;
                }
            }
        }
    }

    violations
}

/// A provider that panics fails its check with `UnknownError` instead of unwinding out of
/// the engine.
fn run_guarded<P: FactsProvider + ?Sized>(
    check: CheckId,
    policy: &Policy,
    facts: &P,
) -> Option<Violation> {
    match panic::catch_unwind(AssertUnwindSafe(|| checks::run_check(check, policy, facts))) {
        Ok(result) => result,
        Err(payload) => Some(Violation::new(
            check,
            FailureKind::UnknownError,
            format!("check aborted: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
