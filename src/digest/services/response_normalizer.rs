use crate::digest::domain::{ComponentCatalog, ReleaseSummary};
use serde::Deserialize;
use serde_json::Value;

/// Maximum number of characters of a non-JSON body echoed into the Error
/// record.
const RAW_EXCERPT_LIMIT: usize = 200;

/// Body of the synthetic Info record when a successful request produced no
/// component data.
const NO_DATA_MESSAGE: &str = "No release note data is available for the selected components.";

/// Per-component entry as returned by the backend, covering both known
/// response shapes. The flat shape carries `summary` + `latestVersion`;
/// the structured shape carries `latestVersion` plus named sections.
#[derive(Debug, Default, Deserialize)]
struct RawComponentEntry {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default, rename = "latestVersion")]
    latest_version: Option<String>,
    #[serde(default)]
    breaking_changes: Option<String>,
    #[serde(default)]
    announcements: Option<String>,
    #[serde(default)]
    new_features: Option<String>,
    #[serde(default)]
    technology_support: Option<String>,
    #[serde(default)]
    resolved_issues: Option<String>,
}

impl RawComponentEntry {
    /// Shape detection: the presence of any named section key marks the
    /// structured shape; everything else is treated as the flat shape.
    fn is_structured(&self) -> bool {
        self.breaking_changes.is_some()
            || self.announcements.is_some()
            || self.new_features.is_some()
            || self.technology_support.is_some()
            || self.resolved_issues.is_some()
    }

    fn version(&self) -> &str {
        self.latest_version.as_deref().unwrap_or("")
    }
}

/// Reconciles the two backend response shapes into the canonical
/// `ReleaseSummary` sequence.
///
/// The normalizer never fails: malformed input, backend-reported errors,
/// and empty results all collapse into a single synthetic Error/Info
/// record, so the caller always receives a presentable sequence.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Section headings in document order.
    const SECTION_HEADINGS: [&'static str; 5] = [
        "Breaking Changes",
        "Announcements",
        "New Features",
        "Technology Support",
        "Resolved Issues",
    ];

    pub fn normalize(raw: &str, catalog: &ComponentCatalog) -> Vec<ReleaseSummary> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => return vec![Self::unexpected_response(raw)],
        };

        let mut summaries = Vec::new();
        if let Some(object) = value.as_object() {
            for entry in catalog.entries() {
                let Some(raw_entry) = object.get(entry.wire_key.as_str()) else {
                    continue;
                };
                let Ok(component) = serde_json::from_value::<RawComponentEntry>(raw_entry.clone())
                else {
                    // A non-object or otherwise unusable entry is treated as absent.
                    continue;
                };
                if let Some(summary) = Self::normalize_entry(&entry.label, &component) {
                    summaries.push(summary);
                }
            }
        }

        if summaries.is_empty() {
            if let Some(message) = value.get("error").and_then(Value::as_str) {
                return vec![ReleaseSummary::error(message)];
            }
            return vec![ReleaseSummary::info(NO_DATA_MESSAGE)];
        }

        summaries
    }

    /// Builds the canonical record for one component, or `None` when the
    /// entry carries no usable data (empty is not distinguished from
    /// missing).
    fn normalize_entry(label: &str, entry: &RawComponentEntry) -> Option<ReleaseSummary> {
        if entry.is_structured() {
            // Structured entries without a reported version are excluded.
            if entry.version().trim().is_empty() {
                return None;
            }
            let body = Self::concatenate_sections(entry);
            if body.is_empty() {
                return None;
            }
            return Some(ReleaseSummary::new(label, entry.version(), body));
        }

        let summary = entry.summary.as_deref()?;
        if summary.trim().is_empty() {
            return None;
        }
        Some(ReleaseSummary::new(label, entry.version(), summary))
    }

    /// Concatenates the non-empty structured sections in document order,
    /// each prefixed with its heading and separated by blank lines.
    fn concatenate_sections(entry: &RawComponentEntry) -> String {
        let contents = [
            &entry.breaking_changes,
            &entry.announcements,
            &entry.new_features,
            &entry.technology_support,
            &entry.resolved_issues,
        ];

        Self::SECTION_HEADINGS
            .iter()
            .zip(contents)
            .filter_map(|(heading, content)| {
                let text = content.as_deref()?.trim();
                if text.is_empty() {
                    return None;
                }
                Some(format!("{}:\n{}", heading, text))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn unexpected_response(raw: &str) -> ReleaseSummary {
        let excerpt: String = raw.chars().take(RAW_EXCERPT_LIMIT).collect();
        ReleaseSummary::error(format!("Unexpected response: {}", excerpt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::standard()
    }

    #[test]
    fn test_flat_shape_round_trip() {
        let raw = r#"{"oneagent": {"summary": "X", "latestVersion": "1.2"}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(
            summaries,
            vec![ReleaseSummary::new("OneAgent", "1.2", "X")]
        );
    }

    #[test]
    fn test_flat_shape_empty_summary_is_excluded() {
        let raw = r#"{"oneagent": {"summary": "", "latestVersion": "1.2"}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_info());
    }

    #[test]
    fn test_structured_shape_section_ordering() {
        let raw = r#"{"oneagent": {"latestVersion": "1.2", "new_features": "A", "resolved_issues": "B"}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 1);
        let body = &summaries[0].body;
        let features_at = body.find("New Features").unwrap();
        let issues_at = body.find("Resolved Issues").unwrap();
        assert!(features_at < issues_at);
        assert!(body.contains("A"));
        assert!(body.contains("B"));
        assert!(!body.contains("Announcements"));
        assert!(!body.contains("Breaking Changes"));
        assert!(!body.contains("Technology Support"));
    }

    #[test]
    fn test_structured_sections_separated_by_blank_lines() {
        let raw = r#"{"oneagent": {"latestVersion": "1.2", "breaking_changes": "dropped X", "announcements": "hello"}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(
            summaries[0].body,
            "Breaking Changes:\ndropped X\n\nAnnouncements:\nhello"
        );
    }

    #[test]
    fn test_structured_without_version_is_excluded() {
        let raw = r#"{"oneagent": {"new_features": "A", "resolved_issues": "B"}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_info());
    }

    #[test]
    fn test_structured_with_only_empty_sections_is_excluded() {
        let raw = r#"{"oneagent": {"latestVersion": "1.2", "new_features": "", "announcements": "  "}}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert!(summaries[0].is_info());
    }

    #[test]
    fn test_punctuation_variant_wire_keys_resolve() {
        let raw = r#"{
            "active-gate": {"summary": "AG news", "latestVersion": "3.0"},
            "dynatrace-managed": {"summary": "DM news", "latestVersion": "2.1"}
        }"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].component, "ActiveGate");
        assert_eq!(summaries[1].component, "Dynatrace Managed");
    }

    #[test]
    fn test_catalog_order_preserved_over_response_order() {
        // Response lists operator before oneagent; output must follow the catalog.
        let raw = r#"{
            "dynatrace-operator": {"summary": "op", "latestVersion": "0.9"},
            "oneagent": {"summary": "agent", "latestVersion": "1.2"}
        }"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        let components: Vec<&str> = summaries.iter().map(|s| s.component.as_str()).collect();
        assert_eq!(components, vec!["OneAgent", "Dynatrace Operator"]);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let raw = r#"{
            "oneagent": {"summary": "agent", "latestVersion": "1.2"},
            "something_else": {"summary": "noise", "latestVersion": "9.9"}
        }"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].component, "OneAgent");
    }

    #[test]
    fn test_empty_object_yields_info_record() {
        let summaries = ResponseNormalizer::normalize("{}", &catalog());

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_info());
        assert_eq!(summaries[0].version, "");
        assert!(summaries[0].body.contains("No release note data"));
    }

    #[test]
    fn test_backend_error_yields_error_record() {
        let raw = r#"{"error": "boom"}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries, vec![ReleaseSummary::error("boom")]);
    }

    #[test]
    fn test_malformed_body_yields_truncated_excerpt() {
        let raw = "<html>".to_string() + &"x".repeat(500);
        let summaries = ResponseNormalizer::normalize(&raw, &catalog());

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_error());
        let body = &summaries[0].body;
        assert!(body.starts_with("Unexpected response: "));
        let excerpt = body.trim_start_matches("Unexpected response: ");
        assert_eq!(excerpt.chars().count(), 200);
    }

    #[test]
    fn test_malformed_body_truncation_is_char_safe() {
        let raw = "é".repeat(300);
        let summaries = ResponseNormalizer::normalize(&raw, &catalog());

        let excerpt = summaries[0].body.trim_start_matches("Unexpected response: ");
        assert_eq!(excerpt.chars().count(), 200);
    }

    #[test]
    fn test_non_object_json_yields_info_record() {
        let summaries = ResponseNormalizer::normalize("[1, 2, 3]", &catalog());

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_info());
    }

    #[test]
    fn test_non_object_component_entry_is_skipped() {
        let raw = r#"{"oneagent": "just a string"}"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert!(summaries[0].is_info());
    }

    #[test]
    fn test_mixed_shapes_in_one_response() {
        let raw = r#"{
            "oneagent": {"summary": "flat text", "latestVersion": "1.2"},
            "active-gate": {"latestVersion": "3.0", "announcements": "structured text"}
        }"#;
        let summaries = ResponseNormalizer::normalize(raw, &catalog());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].body, "flat text");
        assert_eq!(summaries[1].body, "Announcements:\nstructured text");
        assert_eq!(summaries[1].version, "3.0");
    }
}
