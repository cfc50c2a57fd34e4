/// Mutable per-session record of which catalog entries are checked.
///
/// Initialized to all-false, mutated only by toggling a single entry at a
/// time, and read (never mutated) while a request payload is built. The
/// selection has no existence outside the session that owns it.
#[derive(Debug, Clone)]
pub struct SelectionState {
    checked: Vec<bool>,
}

impl SelectionState {
    /// Creates an all-false selection sized to the catalog.
    pub fn new(len: usize) -> Self {
        Self {
            checked: vec![false; len],
        }
    }

    /// Flips a single entry. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.checked.get_mut(index) {
            *slot = !*slot;
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn any_checked(&self) -> bool {
        self.checked.iter().any(|&checked| checked)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|&&checked| checked).count()
    }
}
