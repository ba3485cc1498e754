//! Driver configuration models and their JSON backend document.
//!
//! - **`common`**: keys shared by every storage driver (`version`, `debugTraceFlags`, ...)
//! - **`solidfire`**: SolidFire SAN keys (`TenantName`, `EndPoint`, `SVIP`, ...)
//! - **`volume`**: QoS volume types offered by the backend

mod common;
mod solidfire;
mod volume;

pub use common::CommonStorageDriverConfig;
pub use solidfire::SolidfireStorageDriverConfig;
pub use volume::{QoS, VolType};

/// Backend document version understood by this crate.
pub const CONFIG_VERSION: i32 = 1;

/// `storageDriverName` of the SolidFire SAN driver.
pub const SOLIDFIRE_SAN_DRIVER_NAME: &str = "solidfire-san";

/// Block size used when the document does not set `DefaultBlockSize`.
pub const DEFAULT_BLOCK_SIZE: i64 = 512;

/// iSCSI interface used when the document does not set `InitiatorIFace`.
pub const DEFAULT_INITIATOR_IFACE: &str = "default";

/// Prefix of volumes created by older driver releases.
pub const DEFAULT_LEGACY_NAME_PREFIX: &str = "netappdvp-";
