use crate::boot_check::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name reported in every report
pub const TOOL_NAME: &str = "bootmode-checker";

/// MetadataGenerator service for stamping reports
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current UTC timestamp and a fresh report id
    pub fn generate(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Uses the compile-time version from Cargo.toml
    pub fn generate_default() -> ReportMetadata {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let metadata = MetadataGenerator::generate("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.report_id().starts_with("urn:uuid:"));
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_report_ids_are_unique() {
        let first = MetadataGenerator::generate_default();
        let second = MetadataGenerator::generate_default();
        assert_ne!(first.report_id(), second.report_id());
        assert_eq!(first.tool_name(), TOOL_NAME);
    }
}
