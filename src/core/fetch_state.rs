//! Plots fetch state
//!
//! Shared by the WASM dashboard and the CLI.

/// Outcome of the one-shot plots fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Pending,
    Loaded(usize),
    Failed(String),
}

impl FetchState {
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        assert!(FetchState::default().is_pending());
        assert!(!FetchState::Loaded(0).is_pending());
        assert!(!FetchState::Failed("timeout".to_string()).is_pending());
    }
}
