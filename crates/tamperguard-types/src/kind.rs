use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six integrity checks, in dispatch order.
///
/// Ordering is meaningful: cheap, local checks run first; checks that read the installed
/// bundle or the platform signer registry run last.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum CheckId {
    #[serde(rename = "app.debug_mode")]
    DebugMode,
    #[serde(rename = "device.emulator")]
    Emulator,
    #[serde(rename = "app.package_id")]
    PackageId,
    #[serde(rename = "app.installer")]
    Installer,
    #[serde(rename = "app.signature")]
    Signature,
    #[serde(rename = "app.bundle_checksum")]
    BundleChecksum,
}

impl CheckId {
    pub const ALL: [CheckId; 6] = [
        CheckId::DebugMode,
        CheckId::Emulator,
        CheckId::PackageId,
        CheckId::Installer,
        CheckId::Signature,
        CheckId::BundleChecksum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckId::DebugMode => ids::CHECK_APP_DEBUG_MODE,
            CheckId::Emulator => ids::CHECK_DEVICE_EMULATOR,
            CheckId::PackageId => ids::CHECK_APP_PACKAGE_ID,
            CheckId::Installer => ids::CHECK_APP_INSTALLER,
            CheckId::Signature => ids::CHECK_APP_SIGNATURE,
            CheckId::BundleChecksum => ids::CHECK_APP_BUNDLE_CHECKSUM,
        }
    }

    pub fn parse(s: &str) -> Option<CheckId> {
        CheckId::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed taxonomy of reasons a check can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    DebugModeDetected,
    EmulatorDetected,
    PackageIdEmpty,
    PackageIdNotAccepted,
    InstallerEmpty,
    InstallerNotAccepted,
    SignaturesEmpty,
    SignatureNotAccepted,
    SignatureProviderError,
    ChecksumNotAccepted,
    ChecksumProviderError,
    /// A check aborted unexpectedly (the provider panicked). Not owned by any one check.
    UnknownError,
}

impl FailureKind {
    pub const ALL: [FailureKind; 12] = [
        FailureKind::DebugModeDetected,
        FailureKind::EmulatorDetected,
        FailureKind::PackageIdEmpty,
        FailureKind::PackageIdNotAccepted,
        FailureKind::InstallerEmpty,
        FailureKind::InstallerNotAccepted,
        FailureKind::SignaturesEmpty,
        FailureKind::SignatureNotAccepted,
        FailureKind::SignatureProviderError,
        FailureKind::ChecksumNotAccepted,
        FailureKind::ChecksumProviderError,
        FailureKind::UnknownError,
    ];

    /// Stable snake_case code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::DebugModeDetected => ids::CODE_DEBUG_MODE_DETECTED,
            FailureKind::EmulatorDetected => ids::CODE_EMULATOR_DETECTED,
            FailureKind::PackageIdEmpty => ids::CODE_PACKAGE_ID_EMPTY,
            FailureKind::PackageIdNotAccepted => ids::CODE_PACKAGE_ID_NOT_ACCEPTED,
            FailureKind::InstallerEmpty => ids::CODE_INSTALLER_EMPTY,
            FailureKind::InstallerNotAccepted => ids::CODE_INSTALLER_NOT_ACCEPTED,
            FailureKind::SignaturesEmpty => ids::CODE_SIGNATURES_EMPTY,
            FailureKind::SignatureNotAccepted => ids::CODE_SIGNATURE_NOT_ACCEPTED,
            FailureKind::SignatureProviderError => ids::CODE_SIGNATURE_PROVIDER_ERROR,
            FailureKind::ChecksumNotAccepted => ids::CODE_CHECKSUM_NOT_ACCEPTED,
            FailureKind::ChecksumProviderError => ids::CODE_CHECKSUM_PROVIDER_ERROR,
            FailureKind::UnknownError => ids::CODE_UNKNOWN_ERROR,
        }
    }

    /// The check that emits this kind. `UnknownError` belongs to no check.
    pub fn check(self) -> Option<CheckId> {
        match self {
            FailureKind::DebugModeDetected => Some(CheckId::DebugMode),
            FailureKind::EmulatorDetected => Some(CheckId::Emulator),
            FailureKind::PackageIdEmpty | FailureKind::PackageIdNotAccepted => {
                Some(CheckId::PackageId)
            }
            FailureKind::InstallerEmpty | FailureKind::InstallerNotAccepted => {
                Some(CheckId::Installer)
            }
            FailureKind::SignaturesEmpty
            | FailureKind::SignatureNotAccepted
            | FailureKind::SignatureProviderError => Some(CheckId::Signature),
            FailureKind::ChecksumNotAccepted | FailureKind::ChecksumProviderError => {
                Some(CheckId::BundleChecksum)
            }
            FailureKind::UnknownError => None,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
