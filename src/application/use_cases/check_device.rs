use crate::application::dto::{CheckRequest, CheckResponse};
use crate::boot_check::domain::DeviceSnapshot;
use crate::boot_check::services::{MetadataGenerator, PatchLevelEvaluator};
use crate::ports::outbound::{DevicePropertySource, ProgressReporter};
use crate::shared::Result;

/// CheckDeviceUseCase - reads device properties and classifies them
///
/// # Type Parameters
/// * `S` - DevicePropertySource implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckDeviceUseCase<S, PR> {
    property_source: S,
    evaluator: PatchLevelEvaluator,
    progress_reporter: PR,
}

impl<S, PR> CheckDeviceUseCase<S, PR>
where
    S: DevicePropertySource,
    PR: ProgressReporter,
{
    /// Creates a new CheckDeviceUseCase with injected dependencies
    pub fn new(property_source: S, evaluator: PatchLevelEvaluator, progress_reporter: PR) -> Self {
        Self {
            property_source,
            evaluator,
            progress_reporter,
        }
    }

    /// Executes the check
    ///
    /// The verdict is computed exactly once here and carried in the response.
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        let source = self.property_source.describe();

        // Step 1: Read raw properties
        self.progress_reporter
            .start_wait(&format!("📱 Reading device properties via {}", source));
        let read_result = self.property_source.read_properties().await;
        self.progress_reporter.finish_wait();

        let properties = match read_result {
            Ok(properties) => properties,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Could not read properties via {}", source));
                return Err(e);
            }
        };
        self.progress_reporter
            .report(&format!("✅ Read {} propert(ies)", properties.len()));

        // Step 2: Decide absent values at the boundary
        let snapshot = DeviceSnapshot::from_properties(&properties, &request.overrides);
        if snapshot.device_id().is_empty() {
            self.progress_reporter
                .report("⚠️  Device codename unknown; vulnerability check not applicable");
        }

        // Step 3: Classify
        let profile = self.evaluator.profile_for(snapshot.device_id()).cloned();
        let verdict = self.evaluator.evaluate(&snapshot);

        self.progress_reporter.report_completion(&format!(
            "🔎 Check complete: {} / boot mode {}",
            verdict.vulnerability(),
            verdict.boot_mode()
        ));

        Ok(CheckResponse::new(
            source,
            snapshot,
            profile,
            verdict,
            MetadataGenerator::generate_default(),
        ))
    }
}
