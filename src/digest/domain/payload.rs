use serde::ser::{Serialize, SerializeMap, Serializer};

/// One selected component on the wire: a singleton object mapping the
/// component id to its display label, e.g. `{"active_gate": "ActiveGate"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub id: String,
    pub label: String,
}

impl SelectedItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Serialize for SelectedItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.id, &self.label)?;
        map.end()
    }
}

/// Ordered sequence of selected components, in catalog declaration order.
///
/// An empty payload is a valid state (nothing selected), not an error; the
/// caller is responsible for not sending a request in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RequestPayload {
    items: Vec<SelectedItem>,
}

impl RequestPayload {
    pub fn new(items: Vec<SelectedItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
