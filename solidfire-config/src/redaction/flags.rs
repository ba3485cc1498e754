//! Typed debug trace flags and the reveal predicate.
//!
//! Backend documents carry the flags as a loose `{"name": bool}` object. They are
//! folded into named fields on load, so a flag that was never written reads as
//! `false` and redaction stays in effect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Debug trace switches of a storage driver.
///
/// Every switch defaults to `false`. Unknown names are kept in
/// [`DebugTraceFlags::other`] so nothing written by an operator is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct DebugTraceFlags {
    /// Trace method entry and exit.
    pub method: bool,
    /// Trace control-plane API requests and responses.
    pub api: bool,
    /// Trace backend discovery.
    pub discovery: bool,
    /// Reveal sensitive values (tenant, endpoint credentials, account ID) in the
    /// textual representations. The API client handle stays hidden regardless.
    pub sensitive: bool,
    /// Flags this crate does not interpret.
    pub other: BTreeMap<String, bool>,
}

impl DebugTraceFlags {
    /// Returns `true` only when the `sensitive` flag is set to `true`.
    #[must_use]
    pub fn reveal_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Looks up a flag by its backend document name. Missing flags read as `false`.
    #[must_use]
    pub fn get(&self, name: &str) -> bool {
        match name {
            "method" => self.method,
            "api" => self.api,
            "discovery" => self.discovery,
            "sensitive" => self.sensitive,
            other => self.other.get(other).copied().unwrap_or(false),
        }
    }

    /// Sets a flag by its backend document name.
    pub fn set(&mut self, name: &str, value: bool) {
        match name {
            "method" => self.method = value,
            "api" => self.api = value,
            "discovery" => self.discovery = value,
            "sensitive" => self.sensitive = value,
            other => {
                self.other.insert(other.to_string(), value);
            }
        }
    }
}

/// Decides whether sensitive configuration values may be printed.
///
/// This is the only place the decision is taken. It returns `true` only when
/// flags exist and their `sensitive` switch is explicitly `true`; missing flags,
/// a missing switch and `false` all keep redaction in effect.
#[must_use]
pub fn should_reveal_sensitive(flags: Option<&DebugTraceFlags>) -> bool {
    flags.is_some_and(DebugTraceFlags::reveal_sensitive)
}

impl<K> FromIterator<(K, bool)> for DebugTraceFlags
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut flags = Self::default();
        for (name, value) in iter {
            flags.set(name.as_ref(), value);
        }
        flags
    }
}

impl From<BTreeMap<String, bool>> for DebugTraceFlags {
    fn from(map: BTreeMap<String, bool>) -> Self {
        map.into_iter().collect()
    }
}

impl From<DebugTraceFlags> for BTreeMap<String, bool> {
    fn from(flags: DebugTraceFlags) -> Self {
        let mut map = flags.other;
        for (name, value) in [
            ("method", flags.method),
            ("api", flags.api),
            ("discovery", flags.discovery),
            ("sensitive", flags.sensitive),
        ] {
            if value {
                map.insert(name.to_string(), true);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{should_reveal_sensitive, DebugTraceFlags};

    #[test]
    fn missing_flags_do_not_reveal() {
        assert!(!should_reveal_sensitive(None));
        assert!(!should_reveal_sensitive(Some(&DebugTraceFlags::default())));
    }

    #[test]
    fn absent_and_false_are_identical() {
        let absent: DebugTraceFlags = [("method", true)].into_iter().collect();
        let explicit_false: DebugTraceFlags =
            [("method", true), ("sensitive", false)].into_iter().collect();
        assert_eq!(absent, explicit_false);
        assert!(!should_reveal_sensitive(Some(&absent)));
    }

    #[test]
    fn explicit_true_reveals() {
        let flags: DebugTraceFlags = [("sensitive", true)].into_iter().collect();
        assert!(flags.reveal_sensitive());
        assert!(should_reveal_sensitive(Some(&flags)));
    }

    #[test]
    fn unknown_flags_are_kept() {
        let flags: DebugTraceFlags = [("storage", true)].into_iter().collect();
        assert!(flags.get("storage"));
        assert!(!flags.get("missing"));
        assert!(!flags.reveal_sensitive());
    }

    #[test]
    fn deserializes_from_loose_object() {
        let flags: DebugTraceFlags =
            serde_json::from_str(r#"{"method": true, "sensitive": false, "custom": true}"#)
                .unwrap();
        assert!(flags.method);
        assert!(!flags.sensitive);
        assert_eq!(flags.other.get("custom"), Some(&true));
    }

    #[test]
    fn serializes_set_flags_only() {
        let mut flags = DebugTraceFlags::default();
        flags.set("api", true);
        flags.set("custom", false);
        let map: BTreeMap<String, bool> = flags.into();
        assert_eq!(map.get("api"), Some(&true));
        assert_eq!(map.get("custom"), Some(&false));
        assert!(!map.contains_key("method"));
        assert!(!map.contains_key("sensitive"));
    }
}
