//! Config parsing and profile resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{SCHEMA_CONFIG_V1, TamperguardConfigV1};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `tamperguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TamperguardConfigV1> {
    let cfg: TamperguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy used by the engine (profile + config keys + overrides).
pub fn resolve_config(
    cfg: TamperguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
