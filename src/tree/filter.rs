//! Entry filtering for tree walking

use super::config::WalkerConfig;

/// Hidden-entry filter. Also drops version control metadata such as `.git`.
pub struct EntryFilter {
    hidden_prefix: char,
}

impl EntryFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            hidden_prefix: config.hidden_prefix,
        }
    }

    /// Check if an entry with this name should be included.
    pub fn is_included(&self, name: &str) -> bool {
        !name.starts_with(self.hidden_prefix)
    }
}
