use crate::digest::domain::{ComponentCatalog, RequestPayload, SelectedItem, SelectionState};

/// Translates the current selection into the wire payload for the
/// summarization service.
///
/// Pure and total: for each catalog entry in declaration order, a selected
/// component contributes one singleton `{id: label}` object. The output
/// order is catalog order, never selection order, and an all-false
/// selection yields an empty (valid) payload.
pub struct RequestBuilder;

impl RequestBuilder {
    pub fn build(catalog: &ComponentCatalog, selection: &SelectionState) -> RequestPayload {
        let items = catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(index, _)| selection.is_checked(*index))
            .map(|(_, entry)| SelectedItem::new(entry.id.clone(), entry.label.clone()))
            .collect();

        RequestPayload::new(items)
    }
}
