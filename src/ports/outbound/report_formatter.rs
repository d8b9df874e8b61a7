use crate::application::dto::CheckResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a check result
///
/// This port abstracts the presentation of a verdict (colored text, JSON,
/// Markdown). Formatters receive the verdict already computed and must not
/// re-classify anything.
pub trait ReportFormatter {
    /// Formats the check result
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &CheckResponse) -> Result<String>;
}
