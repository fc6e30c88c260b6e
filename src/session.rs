use crate::{
    core::{InsightsClient, InsightsError},
    report::{Report, ReportBuilder, ReportRequest},
};

/// Per-user state held by a front end between interactions.
///
/// Report generation itself is stateless; the session only remembers the last
/// successful report so it can be re-rendered or exported.
#[derive(Debug, Default, Clone)]
pub struct Session {
    last_report: Option<Report>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a report has been generated since the last [`Session::reset`].
    pub const fn has_report(&self) -> bool {
        self.last_report.is_some()
    }

    pub const fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Generates a report and remembers it.
    ///
    /// On a validation error the previous report is kept.
    ///
    /// # Errors
    ///
    /// Returns [`InsightsError::MissingSearchInput`] if the request has no identifying field.
    pub async fn generate(
        &mut self,
        client: &InsightsClient,
        request: ReportRequest,
    ) -> Result<&Report, InsightsError> {
        let report = ReportBuilder::from_request(client, request).fetch().await?;
        Ok(&*self.last_report.insert(report))
    }

    /// Forgets the last report ("new search").
    pub fn reset(&mut self) {
        self.last_report = None;
    }
}
