/// A single selectable release-note source.
///
/// The `id` is the stable identifier used in request payloads, the `label`
/// is the human-readable name shown to the user, and the `wire_key` is the
/// key the summarization backend uses in its response object. For most
/// components the wire key equals the id; a few differ only by punctuation
/// (underscore vs hyphen), which is kept as an explicit mapping here so it
/// stays auditable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub id: String,
    pub label: String,
    pub wire_key: String,
}

impl ComponentDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        wire_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            wire_key: wire_key.into(),
        }
    }
}

/// Fixed, ordered registry of the components available for selection.
///
/// Declaration order is significant: request payloads and normalized
/// summaries both preserve catalog order regardless of the order in which
/// components were selected or returned by the backend.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    entries: Vec<ComponentDescriptor>,
}

impl ComponentCatalog {
    /// The standard Dynatrace component catalog.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ComponentDescriptor::new("oneagent", "OneAgent", "oneagent"),
                ComponentDescriptor::new("active_gate", "ActiveGate", "active-gate"),
                ComponentDescriptor::new("dynatrace_api", "Dynatrace API", "dynatrace-api"),
                ComponentDescriptor::new(
                    "dynatrace_operator",
                    "Dynatrace Operator",
                    "dynatrace-operator",
                ),
                ComponentDescriptor::new(
                    "dynatrace_managed",
                    "Dynatrace Managed",
                    "dynatrace-managed",
                ),
            ],
        }
    }

    /// Creates a catalog from explicit descriptors (used by tests and
    /// non-standard deployments).
    pub fn from_entries(entries: Vec<ComponentDescriptor>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ComponentDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the catalog position of a component id, if known.
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Maps a display label back to its component id.
    ///
    /// Labels of catalog entries map through the registry; unknown labels
    /// fall back to a derived identifier (lowercase, whitespace replaced
    /// with underscores) so the mapping stays total.
    pub fn id_for_label(&self, label: &str) -> String {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.id.clone())
            .unwrap_or_else(|| derive_id(label))
    }

    /// Comma-separated list of the valid component ids, for error messages.
    pub fn available_ids(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Derives a component id from an arbitrary label: lowercase, with
/// whitespace runs replaced by single underscores.
pub fn derive_id(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
