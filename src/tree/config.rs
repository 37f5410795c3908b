//! Configuration types for tree walkers

/// Prefix marking an entry as hidden.
pub const HIDDEN_PREFIX: char = '.';

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Entries whose name starts with this character are skipped, at every depth.
    pub hidden_prefix: char,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            hidden_prefix: HIDDEN_PREFIX,
        }
    }
}
