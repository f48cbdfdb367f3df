//! Feature-flag lookup.

use std::collections::HashMap;

/// Map-backed feature-flag registry.
///
/// Flags are plain booleans resolved by name; a flag that was never set is
/// disabled. The registry is a value type so derivation functions can take
/// it by reference and stay pure.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    values: HashMap<String, bool>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flag value, overwriting any previous value.
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.values.insert(name.into(), enabled);
    }

    /// Returns the flag value, or false when the flag was never set.
    pub fn enabled(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Flags {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Flag names understood by the dashboard core.
pub mod flag_names {
    /// Demo instances always pin waiting reimbursements on top.
    pub const DEMO: &str = "demo";
    /// Pins the reimbursements group first while money is awaited.
    pub const REIMBURSEMENTS_TOP_POSITION: &str = "balance.reimbursements-top-position";
    /// Renders the grouped panels view instead of flat tables.
    pub const BALANCE_PANELS: &str = "balance-panels";
    /// Forces the no-account empty state, for styling work.
    pub const NO_ACCOUNT: &str = "no-account";
    /// Suffixes group labels with their origin (virtual/auto).
    pub const DEBUG_GROUPS: &str = "debug-groups";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_is_disabled() {
        let flags = Flags::new();
        assert!(!flags.enabled("demo"));
    }

    #[test]
    fn test_set_and_read_back() {
        let mut flags = Flags::new();
        flags.set("demo", true);
        assert!(flags.enabled("demo"));
        flags.set("demo", false);
        assert!(!flags.enabled("demo"));
    }

    #[test]
    fn test_from_iterator() {
        let flags: Flags = [("demo", true), ("no-account", false)].into_iter().collect();
        assert!(flags.enabled("demo"));
        assert!(!flags.enabled("no-account"));
    }
}
