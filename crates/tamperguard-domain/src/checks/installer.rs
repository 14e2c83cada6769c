use super::utils::{contains_ignore_case, list};
use crate::facts::FactsProvider;
use crate::outcome::Violation;
use crate::policy::Policy;
use serde_json::json;
use tamperguard_types::{CheckId, FailureKind};

pub fn run<P: FactsProvider + ?Sized>(policy: &Policy, facts: &P) -> Option<Violation> {
    if policy.accepted_installers.is_empty() {
        return None;
    }

    let package_id = facts.current_package_id();
    let installer = facts.installer_id(&package_id);
    if installer.is_empty() {
        return Some(
            Violation::new(
                CheckId::Installer,
                FailureKind::InstallerEmpty,
                format!(
                    "no installer recorded for {package_id:?}: installed by hand, not by a store"
                ),
            )
            .with_data(json!({ "package_id": package_id, "installer": installer })),
        );
    }

    if contains_ignore_case(&policy.accepted_installers, &installer) {
        return None;
    }

    Some(
        Violation::new(
            CheckId::Installer,
            FailureKind::InstallerNotAccepted,
            format!(
                "installer {installer:?} is not accepted; accepted: {}",
                list(&policy.accepted_installers)
            ),
        )
        .with_data(json!({
            "package_id": package_id,
            "installer": installer,
            "accepted": policy.accepted_installers,
        })),
    )
}
