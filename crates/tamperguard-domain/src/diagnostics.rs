//! Raw fact accessors, independent of any policy.
//!
//! Used to discover the values to put into a policy: the fingerprint of the release signer, the
//! checksum of a release build, the installer a store records.

use crate::emulator::{self, EmulatorScore};
use crate::facts::{FactsProvider, ProviderError, code_checksum};
use crate::model::{DebugSignals, DeviceIdentity};
use serde::Serialize;

/// A fact value, or the reason it could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Probe<T> {
    Value(T),
    Error(String),
}

impl<T> Probe<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Probe::Value(v) => Some(v),
            Probe::Error(_) => None,
        }
    }
}

impl<T> From<Result<T, ProviderError>> for Probe<T> {
    fn from(result: Result<T, ProviderError>) -> Self {
        match result {
            Ok(v) => Probe::Value(v),
            Err(err) => Probe::Error(err.to_string()),
        }
    }
}

/// Every fact the checks consume, collected in one pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostics {
    pub package_id: String,
    pub installer: String,
    pub device: DeviceIdentity,
    pub emulator: EmulatorScore,
    pub debug: DebugSignals,
    pub signers: Probe<Vec<String>>,
    pub code_entry: String,
    pub bundle_checksum: Probe<u64>,
}

pub fn device_identity<P: FactsProvider + ?Sized>(facts: &P) -> DeviceIdentity {
    facts.device_identity()
}

pub fn emulator_score<P: FactsProvider + ?Sized>(facts: &P) -> EmulatorScore {
    emulator::score(&facts.device_identity())
}

pub fn is_emulator<P: FactsProvider + ?Sized>(facts: &P) -> bool {
    emulator_score(facts).is_emulator()
}

/// Installer of the running package.
pub fn installer<P: FactsProvider + ?Sized>(facts: &P) -> String {
    facts.installer_id(&facts.current_package_id())
}

/// Signer fingerprints of the running package.
pub fn signer_fingerprints<P: FactsProvider + ?Sized>(
    facts: &P,
) -> Result<Vec<String>, ProviderError> {
    facts.signer_fingerprints(&facts.current_package_id())
}

/// Checksum of `code_entry` and its numbered parts in the running bundle.
pub fn bundle_checksum<P: FactsProvider + ?Sized>(
    facts: &P,
    code_entry: &str,
) -> Result<u64, ProviderError> {
    code_checksum(facts, code_entry)
}

pub fn debug_signals<P: FactsProvider + ?Sized>(facts: &P) -> DebugSignals {
    DebugSignals {
        build: facts.is_debug_build(),
        manifest: facts.is_debug_manifest(&facts.current_package_id()),
    }
}

pub fn is_debuggable<P: FactsProvider + ?Sized>(facts: &P) -> bool {
    debug_signals(facts).any()
}

/// Query every fact. Provider failures are captured per fact instead of aborting.
pub fn collect<P: FactsProvider + ?Sized>(facts: &P, code_entry: &str) -> Diagnostics {
    let package_id = facts.current_package_id();
    let device = facts.device_identity();
    let emulator = emulator::score(&device);

    let diagnostics = Diagnostics {
        installer: facts.installer_id(&package_id),
        debug: DebugSignals {
            build: facts.is_debug_build(),
            manifest: facts.is_debug_manifest(&package_id),
        },
        signers: facts.signer_fingerprints(&package_id).into(),
        code_entry: code_entry.to_string(),
        bundle_checksum: code_checksum(facts, code_entry).into(),
        package_id,
        device,
        emulator,
    };
    tracing::debug!(
        package_id = %diagnostics.package_id,
        emulator_score = diagnostics.emulator.score(),
        "collected diagnostics"
    );
    diagnostics
}
