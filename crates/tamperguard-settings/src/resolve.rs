use crate::{model::TamperguardConfigV1, presets};
use anyhow::Context;
use std::collections::BTreeSet;
use tamperguard_domain::Policy;
use tamperguard_domain::fingerprint::{is_valid_fingerprint, normalize_fingerprint};
use tamperguard_types::stores;

/// Command-line overrides; they win over both the profile and the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub allow_debug: Option<bool>,
    pub allow_emulator: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub policy: Policy,
}

pub fn resolve_config(
    cfg: TamperguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut policy = presets::preset(&profile)?;

    if let Some(allow) = overrides.allow_debug.or(cfg.allow_debug) {
        policy.allow_debug = allow;
    }
    if let Some(allow) = overrides.allow_emulator.or(cfg.allow_emulator) {
        policy.allow_emulator = allow;
    }

    if let Some(installers) = cfg.accepted_installers {
        policy.accepted_installers = installers
            .iter()
            .map(|i| non_blank("accepted_installers", i))
            .map(|i| i.map(|i| stores::resolve_alias(i).to_string()))
            .collect::<anyhow::Result<BTreeSet<_>>>()?;
    }

    if let Some(package_ids) = cfg.accepted_package_ids {
        policy.accepted_package_ids = package_ids
            .iter()
            .map(|p| non_blank("accepted_package_ids", p).map(str::to_string))
            .collect::<anyhow::Result<BTreeSet<_>>>()?;
    }

    if let Some(signatures) = cfg.accepted_signatures {
        policy.accepted_signatures = signatures
            .iter()
            .map(|s| parse_fingerprint(s))
            .collect::<anyhow::Result<BTreeSet<_>>>()
            .context("invalid accepted_signatures")?;
    }

    if let Some(checksums) = cfg.accepted_bundle_checksums {
        policy.accepted_bundle_checksums = checksums.into_iter().collect();
    }

    if let Some(entry) = cfg.code_entry.as_deref() {
        policy.code_entry = non_blank("code_entry", entry)?.to_string();
    }

    Ok(ResolvedConfig { profile, policy })
}

fn non_blank<'a>(key: &str, value: &'a str) -> anyhow::Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{key} must not contain blank values");
    }
    Ok(trimmed)
}

fn parse_fingerprint(value: &str) -> anyhow::Result<String> {
    if !is_valid_fingerprint(value) {
        anyhow::bail!(
            "not an MD5 or SHA-256 fingerprint: {value:?} (expected 16 or 32 colon-separated hex pairs)"
        );
    }
    Ok(normalize_fingerprint(value))
}
