use super::utils::list;
use crate::facts::FactsProvider;
use crate::fingerprint::fingerprints_match;
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

/// Passes when any current signer matches any accepted fingerprint.
pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.accepted_signatures.is_empty() {
        return None;
    }

    let package_id = facts.current_package_id();
    let signers = match facts.signer_fingerprints(&package_id) {
        Ok(signers) => signers,
        Err(err) => {
            return Some(
                Violation::new(
                    CheckId::Signature,
                    FailureKind::SignatureProviderError,
                    format!("could not read signers of {package_id:?}: {err}"),
                )
                .with_data(json!({ "package_id": package_id, "error": err.to_string() })),
            );
        }
    };

    if signers.is_empty() {
        return Some(
            Violation::new(
                CheckId::Signature,
                FailureKind::SignaturesEmpty,
                format!("no signers found for {package_id:?}"),
            )
            .with_data(json!({ "package_id": package_id })),
        );
    }

    let trusted = signers.iter().any(|current| {
        policy
            .accepted_signatures
            .iter()
            .any(|accepted| fingerprints_match(current, accepted))
    });
    if trusted {
        return None;
    }

    Some(
        Violation::new(
            CheckId::Signature,
            FailureKind::SignatureNotAccepted,
            format!(
                "no accepted signer: current {}; accepted {}",
                list(&signers),
                list(&policy.accepted_signatures)
            ),
        )
        .with_data(json!({
            "package_id": package_id,
            "signers": signers,
            "accepted": policy.accepted_signatures,
        })),
    )
}
