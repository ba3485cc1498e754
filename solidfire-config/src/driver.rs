//! The SolidFire SAN driver aggregate.

use std::sync::Arc;

use crate::{api::Client, RedactedFields, SolidfireStorageDriverConfig};

/// IOPS floor applied to volumes whose type carries no QoS.
pub const DEFAULT_MIN_IOPS: i64 = 1000;
/// IOPS ceiling applied to volumes whose type carries no QoS.
pub const DEFAULT_MAX_IOPS: i64 = 20000;

/// A SolidFire SAN storage driver instance.
///
/// Its textual representations show the backend configuration with the same
/// redaction rules as [`SolidfireStorageDriverConfig`]. The API client handle is
/// always printed as `Client:<REDACTED>`; the account ID as `AccountID:<REDACTED>`
/// unless the `sensitive` trace flag is set.
#[derive(Clone, RedactedFields)]
#[config(name = "SANStorageDriver")]
pub struct SanStorageDriver {
    #[config(flatten)]
    config: SolidfireStorageDriverConfig,
    #[sensitive(always)]
    client: Arc<Client>,
    #[sensitive]
    #[config(label = "AccountID")]
    account_id: i64,
    #[config(label = "DriverAccessGroups", verbose)]
    access_groups: Vec<i64>,
    #[config(label = "DriverLegacyNamePrefix", verbose)]
    legacy_name_prefix: String,
    #[config(label = "DriverInitiatorIFace", verbose)]
    initiator_iface: String,
    #[config(label = "DefaultMaxIOPS", verbose)]
    default_max_iops: i64,
    #[config(label = "DefaultMinIOPS", verbose)]
    default_min_iops: i64,
    #[config(verbose)]
    initialized: bool,
}

impl SanStorageDriver {
    /// Assembles a driver from a loaded configuration and a connected client.
    ///
    /// The driver's working access groups, legacy name prefix and initiator
    /// interface start as copies of the configured ones and may be changed
    /// afterwards. They are listed as `DriverAccessGroups`,
    /// `DriverLegacyNamePrefix` and `DriverInitiatorIFace`. The IOPS defaults start
    /// at [`DEFAULT_MIN_IOPS`] and [`DEFAULT_MAX_IOPS`].
    pub fn new(config: SolidfireStorageDriverConfig, client: Arc<Client>, account_id: i64) -> Self {
        Self {
            access_groups: config.access_groups.clone(),
            legacy_name_prefix: config.legacy_name_prefix.clone(),
            initiator_iface: config.initiator_iface.clone(),
            config,
            client,
            account_id,
            default_max_iops: DEFAULT_MAX_IOPS,
            default_min_iops: DEFAULT_MIN_IOPS,
            initialized: false,
        }
    }

    pub fn config(&self) -> &SolidfireStorageDriverConfig {
        &self.config
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub fn access_groups(&self) -> &[i64] {
        &self.access_groups
    }

    /// Replaces the volume access groups the driver works with.
    pub fn set_access_groups(&mut self, access_groups: Vec<i64>) {
        self.access_groups = access_groups;
    }

    pub fn legacy_name_prefix(&self) -> &str {
        &self.legacy_name_prefix
    }

    pub fn set_legacy_name_prefix(&mut self, prefix: impl Into<String>) {
        self.legacy_name_prefix = prefix.into();
    }

    pub fn initiator_iface(&self) -> &str {
        &self.initiator_iface
    }

    pub fn set_initiator_iface(&mut self, iface: impl Into<String>) {
        self.initiator_iface = iface.into();
    }

    pub fn default_max_iops(&self) -> i64 {
        self.default_max_iops
    }

    pub fn default_min_iops(&self) -> i64 {
        self.default_min_iops
    }

    /// Overrides the IOPS bounds used for volumes without a QoS type.
    pub fn set_default_iops(&mut self, min_iops: i64, max_iops: i64) {
        self.default_min_iops = min_iops;
        self.default_max_iops = max_iops;
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the driver ready for use.
    pub fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }
}
