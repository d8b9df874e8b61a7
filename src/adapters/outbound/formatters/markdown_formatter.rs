use crate::application::dto::{CheckResponse, ADVISORY_URL, CVE_ID};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for device properties
const TABLE_HEADER: &str = "| Property | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|-------|\n";

/// MarkdownFormatter adapter for report files and CI summaries
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Wraps a value in a code span whose fence is longer than any backtick run inside it
    fn code_span(text: &str) -> String {
        let longest_run = text
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        if longest_run == 0 {
            return format!("`{}`", text);
        }
        let fence = "`".repeat(longest_run + 1);
        format!("{} {} {}", fence, text, fence)
    }

    fn cell(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => Self::code_span(&Self::escape_markdown_table_cell(v)),
            _ => "_unavailable_".to_string(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &CheckResponse) {
        output.push_str(&format!("# {} Boot Mode Check\n\n", CVE_ID));
        output.push_str(&format!(
            "Generated by {} {} at {} (source: {})\n\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp(),
            Self::escape_markdown_table_cell(&response.source)
        ));
    }

    fn render_device(&self, output: &mut String, response: &CheckResponse) {
        let snapshot = &response.snapshot;
        output.push_str("## Device\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        let threshold = response.profile.as_ref().map(|p| p.patched_on().to_string());
        let rows = [
            ("Codename", Self::cell(Some(snapshot.device_id()))),
            (
                "Model",
                Self::cell(response.profile.as_ref().and_then(|p| p.name())),
            ),
            ("Bootloader", Self::cell(snapshot.bootloader())),
            ("Boot mode", Self::cell(Some(snapshot.boot_mode()))),
            ("Security patch level", Self::cell(snapshot.patch_level())),
            ("Patched on", Self::cell(threshold.as_deref())),
        ];
        for (label, value) in rows {
            output.push_str(&format!("| {} | {} |\n", label, value));
        }
        output.push('\n');
    }

    fn render_verdict(&self, output: &mut String, response: &CheckResponse) {
        let verdict = &response.verdict;
        output.push_str("## Verdict\n\n");
        output.push_str(&format!(
            "- **Vulnerability:** {}\n",
            verdict.vulnerability().label()
        ));
        output.push_str(&format!("- **Boot mode:** {}\n", verdict.boot_mode().label()));

        if verdict.is_tampered() {
            output.push_str(
                "\n> ⚠️ **Warning:** the boot mode property is not `normal`; the device may be under attack.\n",
            );
        }
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String) {
        output.push_str(&format!("More info: <{}>\n", ADVISORY_URL));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);
        self.render_device(&mut output, response);
        self.render_verdict(&mut output, response);
        self.render_footer(&mut output);
        Ok(output)
    }
}
