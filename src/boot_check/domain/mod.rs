pub mod device_profile;
pub mod device_snapshot;
pub mod patch_date;
pub mod report_metadata;
pub mod verdict;

pub use device_profile::{DeviceProfile, DeviceProfiles};
pub use device_snapshot::{DeviceProperties, DeviceSnapshot, SnapshotOverrides};
pub use patch_date::{DateOrdering, PatchDate};
pub use report_metadata::ReportMetadata;
pub use verdict::{BootModeState, Verdict, VulnerabilityStatus, NORMAL_BOOT_MODE};
