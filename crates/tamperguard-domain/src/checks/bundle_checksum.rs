use super::utils::list;
use crate::facts::{FactsProvider, code_checksum};
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.accepted_bundle_checksums.is_empty() {
        return None;
    }

    let checksum = match code_checksum(facts, &policy.code_entry) {
        Ok(checksum) => checksum,
        Err(err) => {
            return Some(
                Violation::new(
                    CheckId::BundleChecksum,
                    FailureKind::ChecksumProviderError,
                    format!("could not compute bundle checksum: {err}"),
                )
                .with_data(json!({
                    "code_entry": policy.code_entry,
                    "error": err.to_string(),
                })),
            );
        }
    };

    if policy.accepted_bundle_checksums.contains(&checksum) {
        return None;
    }

    Some(
        Violation::new(
            CheckId::BundleChecksum,
            FailureKind::ChecksumNotAccepted,
            format!(
                "bundle checksum {checksum} of {:?} is not accepted; accepted: {}",
                policy.code_entry,
                list(&policy.accepted_bundle_checksums)
            ),
        )
        .with_data(json!({
            "checksum": checksum,
            "code_entry": policy.code_entry,
            "accepted": policy.accepted_bundle_checksums,
        })),
    )
}

