use tamperguard_domain::Policy;
use tamperguard_types::stores;

pub const DEFAULT_PROFILE: &str = "permissive";

pub const PROFILES: &[&str] = &["permissive", "release"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything app-specific (package ids, signers, checksums)
/// belongs in repo config.
pub fn preset(profile: &str) -> anyhow::Result<Policy> {
    match profile {
        "permissive" => Ok(Policy::default()),
        "release" => Ok(release_profile()),
        other => anyhow::bail!(
            "unknown profile: {other} (expected one of: {})",
            PROFILES.join(", ")
        ),
    }
}

fn release_profile() -> Policy {
    Policy::builder()
        .allow_debug(false)
        .allow_emulator(false)
        .accept_installers([
            stores::GOOGLE_PLAY_STORE,
            stores::AMAZON_APP_STORE,
            stores::SAMSUNG_APP_STORE,
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tamperguard_types::CheckId;

    #[test]
    fn permissive_enables_nothing() {
        let policy = preset("permissive").expect("preset");
        assert!(policy.enabled_checks().is_empty());
    }

    #[test]
    fn release_enables_environment_and_store_checks() {
        let policy = preset("release").expect("preset");
        assert_eq!(
            policy.enabled_checks(),
            vec![CheckId::DebugMode, CheckId::Emulator, CheckId::Installer]
        );
        assert_eq!(policy.accepted_installers.len(), 3);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = preset("paranoid").expect_err("unknown");
        assert!(err.to_string().contains("permissive, release"));
    }
}
