//! Keys shared by every storage driver's backend document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DebugTraceFlags, RedactedFields};

/// Configuration common to all storage drivers.
///
/// Keys are camelCase in the backend document. Only `storageDriverName` is part of
/// the concise representation; everything else is verbose.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, RedactedFields)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonStorageDriverConfig {
    #[config(verbose)]
    pub version: i32,
    pub storage_driver_name: String,
    #[config(verbose)]
    pub backend_name: String,
    #[config(verbose)]
    pub debug: bool,
    #[config(trace_flags, verbose)]
    pub debug_trace_flags: DebugTraceFlags,
    #[config(verbose)]
    pub disable_delete: bool,
    #[config(verbose)]
    pub storage_prefix: Option<String>,
    #[config(verbose)]
    pub serial_numbers: Vec<String>,
    #[config(verbose)]
    pub limit_volume_size: String,
    /// Names of the secrets holding backend credentials.
    #[sensitive]
    #[config(verbose)]
    pub credentials: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::CommonStorageDriverConfig;
    use crate::{to_debug_string, to_display_string, RedactedFields};

    fn common() -> CommonStorageDriverConfig {
        let mut config = CommonStorageDriverConfig {
            version: 1,
            storage_driver_name: "solidfire-san".to_string(),
            storage_prefix: Some("test_".to_string()),
            ..Default::default()
        };
        config.debug_trace_flags.method = true;
        config
            .credentials
            .insert("name".to_string(), "chap-secret".to_string());
        config
    }

    #[test]
    fn trace_flags_come_from_the_marked_field() {
        let config = common();
        let flags = config.trace_flags().unwrap();
        assert!(flags.method);
        assert!(!flags.sensitive);
    }

    #[test]
    fn display_lists_driver_name_only() {
        assert_eq!(
            to_display_string(&common()),
            "CommonStorageDriverConfig{StorageDriverName:solidfire-san}"
        );
    }

    #[test]
    fn debug_hides_credentials_until_revealed() {
        let mut config = common();
        let debug = to_debug_string(&config);
        assert!(debug.contains("Credentials:<REDACTED>"));
        assert!(debug.contains("DebugTraceFlags:map[method:true]"));
        assert!(debug.contains("StoragePrefix:test_"));
        assert!(!debug.contains("chap-secret"));

        config.debug_trace_flags.sensitive = true;
        assert!(to_debug_string(&config).contains("Credentials:map[name:chap-secret]"));
    }

    #[test]
    fn loads_camel_case_keys() {
        let config: CommonStorageDriverConfig = serde_json::from_str(
            r#"{"version": 1, "storageDriverName": "solidfire-san", "backendName": "sf",
                "debugTraceFlags": {"api": true}, "serialNumbers": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(config.backend_name, "sf");
        assert!(config.debug_trace_flags.api);
        assert_eq!(config.serial_numbers, ["a", "b"]);
        assert!(config.storage_prefix.is_none());
    }
}
