use std::collections::HashSet;

/// The set of sidebar group ids currently rendered open.
///
/// Branches are independent — opening one never closes a sibling. Created
/// empty per mounted sidebar and discarded on unmount; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip membership of `id`. Total over all strings — unknown ids simply
    /// insert and later remove with no error.
    pub fn toggle(&mut self, id: &str) {
        if !self.open.remove(id) {
            self.open.insert(id.to_string());
        }
    }

    /// Union `ids` into the open set. Strictly additive: auto-expanding the
    /// active branch must never collapse one the user opened by hand.
    pub fn reveal<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open.extend(ids.into_iter().map(Into::into));
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
