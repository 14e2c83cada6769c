use super::utils::{contains_ignore_case, list};
use crate::facts::FactsProvider;
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.accepted_package_ids.is_empty() {
        return None;
    }

    let package_id = facts.current_package_id();
    if package_id.is_empty() {
        return Some(
            Violation::new(
                CheckId::PackageId,
                FailureKind::PackageIdEmpty,
                format!("current package id is empty: {package_id:?}"),
            )
            .with_data(json!({ "package_id": package_id })),
        );
    }

    if contains_ignore_case(&policy.accepted_package_ids, &package_id) {
        return None;
    }

    Some(
        Violation::new(
            CheckId::PackageId,
            FailureKind::PackageIdNotAccepted,
            format!(
                "package id {package_id:?} is not accepted; accepted: {}",
                list(&policy.accepted_package_ids)
            ),
        )
        .with_data(json!({
            "package_id": package_id,
            "accepted": policy.accepted_package_ids,
        })),
    )
}
