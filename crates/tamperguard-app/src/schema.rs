use schemars::schema_for;

/// Documents with a published JSON schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    Config,
    Report,
}

pub fn generate_schema(kind: SchemaKind) -> schemars::Schema {
    match kind {
        SchemaKind::Config => schema_for!(tamperguard_settings::TamperguardConfigV1),
        SchemaKind::Report => schema_for!(tamperguard_types::TamperguardReport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_schema_names_required_fields() {
        let schema = serde_json::to_value(generate_schema(SchemaKind::Report)).expect("json");
        let required = schema["required"].as_array().expect("required list");
        for field in ["schema", "tool", "verdict", "violations", "data"] {
            assert!(
                required.iter().any(|r| r == field),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn config_schema_lists_policy_keys() {
        let schema = serde_json::to_value(generate_schema(SchemaKind::Config)).expect("json");
        let properties = schema["properties"].as_object().expect("properties");
        for key in [
            "profile",
            "allow_debug",
            "allow_emulator",
            "accepted_installers",
            "accepted_package_ids",
            "accepted_signatures",
            "accepted_bundle_checksums",
            "code_entry",
        ] {
            assert!(properties.contains_key(key), "missing {key}");
        }
        assert_eq!(schema["additionalProperties"], serde_json::json!(false));
    }
}
