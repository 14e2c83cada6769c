//! Stable identifiers for checks and failure codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks, in dispatch order.
pub const CHECK_APP_DEBUG_MODE: &str = "app.debug_mode";
pub const CHECK_DEVICE_EMULATOR: &str = "device.emulator";
pub const CHECK_APP_PACKAGE_ID: &str = "app.package_id";
pub const CHECK_APP_INSTALLER: &str = "app.installer";
pub const CHECK_APP_SIGNATURE: &str = "app.signature";
pub const CHECK_APP_BUNDLE_CHECKSUM: &str = "app.bundle_checksum";

// Codes: app.debug_mode
pub const CODE_DEBUG_MODE_DETECTED: &str = "debug_mode_detected";

// Codes: device.emulator
pub const CODE_EMULATOR_DETECTED: &str = "emulator_detected";

// Codes: app.package_id
pub const CODE_PACKAGE_ID_EMPTY: &str = "package_id_empty";
pub const CODE_PACKAGE_ID_NOT_ACCEPTED: &str = "package_id_not_accepted";

// Codes: app.installer
pub const CODE_INSTALLER_EMPTY: &str = "installer_empty";
pub const CODE_INSTALLER_NOT_ACCEPTED: &str = "installer_not_accepted";

// Codes: app.signature
pub const CODE_SIGNATURES_EMPTY: &str = "signatures_empty";
pub const CODE_SIGNATURE_NOT_ACCEPTED: &str = "signature_not_accepted";
pub const CODE_SIGNATURE_PROVIDER_ERROR: &str = "signature_provider_error";

// Codes: app.bundle_checksum
pub const CODE_CHECKSUM_NOT_ACCEPTED: &str = "checksum_not_accepted";
pub const CODE_CHECKSUM_PROVIDER_ERROR: &str = "checksum_provider_error";

// Catch-all
pub const CODE_UNKNOWN_ERROR: &str = "unknown_error";
