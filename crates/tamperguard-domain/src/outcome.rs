use serde_json::Value as JsonValue;
use tamperguard_types::{CheckId, FailureKind, ViolationRecord, explain};
use thiserror::Error;

/// A violated policy: which check, why, and the facts involved.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{check} failed ({kind}): {message}")]
pub struct Violation {
    pub check: CheckId,
    pub kind: FailureKind,
    /// Human-readable diagnostic built from the facts and accepted values.
    pub message: String,
    /// Check-specific structured payload.
    pub data: JsonValue,
}

impl Violation {
    pub fn new(check: CheckId, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            check,
            kind,
            message: message.into(),
            data: JsonValue::Null,
        }
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }

    /// Report form, with remediation text from the explain registry.
    pub fn to_record(&self) -> ViolationRecord {
        ViolationRecord {
            check_id: self.check,
            code: self.kind,
            message: self.message.clone(),
            help: explain::lookup_explanation(self.kind.code()).map(|e| e.remediation.to_string()),
            data: self.data.clone(),
        }
    }
}

/// Result of a fail-fast evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Violation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(v) => Some(v),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.violation().map(|v| v.kind)
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(v) => Err(v),
        }
    }
}

impl From<Option<Violation>> for ValidationOutcome {
    fn from(value: Option<Violation>) -> Self {
        match value {
            None => ValidationOutcome::Valid,
            Some(v) => ValidationOutcome::Invalid(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_names_check_and_code() {
        let v = Violation::new(
            CheckId::Installer,
            FailureKind::InstallerEmpty,
            "side-loaded",
        );
        assert_eq!(
            v.to_string(),
            "app.installer failed (installer_empty): side-loaded"
        );
    }

    #[test]
    fn record_carries_remediation() {
        let record = Violation::new(
            CheckId::Signature,
            FailureKind::SignatureNotAccepted,
            "re-signed",
        )
        .to_record();
        assert_eq!(record.code, FailureKind::SignatureNotAccepted);
        assert!(record.help.is_some());
        assert!(record.data.is_null());
    }

    #[test]
    fn into_result_maps_variants() {
        assert!(ValidationOutcome::Valid.into_result().is_ok());
        let v = Violation::new(CheckId::DebugMode, FailureKind::DebugModeDetected, "debug");
        let err = ValidationOutcome::Invalid(v.clone())
            .into_result()
            .expect_err("invalid");
        assert_eq!(err, v);
    }
}
