use serde::Serialize;

/// Component name used by synthetic failure entries.
pub const ERROR_COMPONENT: &str = "Error";

/// Component name used by synthetic empty-result entries.
pub const INFO_COMPONENT: &str = "Info";

/// Canonical normalized record describing one component's latest release.
///
/// `component` is the display name (catalog label, not the wire id),
/// `version` may be empty when the backend did not report one, and `body`
/// is a single pre-formatted text block. On the export wire the body field
/// is named `summary`, matching the backend contract.
///
/// Two synthetic components exist: "Error" represents any pipeline-level
/// failure and "Info" a successful request that produced no data. Both are
/// rendered like normal summaries but are never eligible for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub component: String,
    pub version: String,
    #[serde(rename = "summary")]
    pub body: String,
}

impl ReleaseSummary {
    pub fn new(
        component: impl Into<String>,
        version: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            version: version.into(),
            body: body.into(),
        }
    }

    /// Synthetic entry representing a pipeline-level failure.
    pub fn error(body: impl Into<String>) -> Self {
        Self::new(ERROR_COMPONENT, "", body)
    }

    /// Synthetic entry representing a successful but empty result.
    pub fn info(body: impl Into<String>) -> Self {
        Self::new(INFO_COMPONENT, "", body)
    }

    pub fn is_error(&self) -> bool {
        self.component == ERROR_COMPONENT
    }

    pub fn is_info(&self) -> bool {
        self.component == INFO_COMPONENT
    }

    /// True for the synthetic Error/Info entries.
    pub fn is_synthetic(&self) -> bool {
        self.is_error() || self.is_info()
    }

    /// Title shown on the summary card and in exported documents.
    ///
    /// Synthetic entries are titled by their component name alone; normal
    /// entries read `Latest <component> Release`, suffixed with the version
    /// in parentheses when one is known.
    pub fn display_title(&self) -> String {
        if self.is_synthetic() {
            return self.component.clone();
        }
        if self.version.is_empty() {
            format!("Latest {} Release", self.component)
        } else {
            format!("Latest {} Release ({})", self.component, self.version)
        }
    }
}
