use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    core::InsightsError,
    report::model::{NOT_AVAILABLE, Report, UNKNOWN_COMPANY},
};

impl Report {
    /// Serializes the report as pretty-printed JSON.
    ///
    /// The output depends only on the report's contents, so serializing the same
    /// report twice yields identical bytes.
    ///
    /// # Errors
    ///
    /// Returns `InsightsError::Json` if serialization fails (non-finite numbers).
    pub fn to_json(&self) -> Result<String, InsightsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for an export: `<ticker or company>_report_<YYYYmmdd_HHMMSS>.json`.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        let stem = if self.company.ticker != NOT_AVAILABLE {
            self.company.ticker.clone()
        } else if self.company.name != UNKNOWN_COMPANY {
            self.company.name.replace(' ', "_")
        } else {
            "company".to_string()
        };
        let stem: String = stem
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        format!(
            "{stem}_report_{}.json",
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Writes [`Report::to_json`] into `dir` under [`Report::export_file_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, InsightsError> {
        let path = dir.as_ref().join(self.export_file_name());
        std::fs::write(&path, self.to_json()?)?;
        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}
