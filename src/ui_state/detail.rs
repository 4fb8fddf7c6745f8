use serde::{Deserialize, Serialize};

/// The one record a page may show in its detail dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSlot {
    current: Option<String>,
}

impl DetailSlot {
    /// Show `id`, replacing whatever was open.
    pub fn open(&mut self, id: &str) {
        self.current = Some(id.to_string());
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
