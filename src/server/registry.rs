//! Fixed list of accelerator IDs reported by the stub

use std::sync::Arc;

/// Ordered, read-only set of accelerator IDs
///
/// Built once from the caller's list and never changed. Order and duplicates
/// are kept exactly as supplied.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    ids: Arc<[String]>,
}

impl DeviceRegistry {
    /// Copy `ids` into a new registry
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// The IDs in construction order
    pub fn list(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
