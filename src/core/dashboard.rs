//! Dashboard data state
//!
//! Holds the plots from the single fetch. Shared between the browser app and
//! the CLI.

use tracing::{error, info};

use super::error::FetchError;
use super::fetch_state::FetchState;
use super::layout::{plan_dashboard, SectionLayout};
use super::plot::PlotDescriptor;

#[derive(Debug, Default)]
pub struct DashboardState {
    plots: Vec<PlotDescriptor>,
    status: FetchState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the outcome of the plots fetch
    ///
    /// Failures are logged and leave the dashboard empty.
    pub fn commit(&mut self, result: Result<Vec<PlotDescriptor>, FetchError>) {
        match result {
            Ok(plots) => {
                info!(count = plots.len(), "Plots loaded");
                self.status = FetchState::Loaded(plots.len());
                self.plots = plots;
            }
            Err(e) => {
                error!(error = %e, "Error fetching plots");
                self.status = FetchState::Failed(e.to_string());
            }
        }
    }

    pub fn plots(&self) -> &[PlotDescriptor] {
        &self.plots
    }

    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    pub fn status(&self) -> &FetchState {
        &self.status
    }

    pub fn sections(&self) -> Vec<SectionLayout> {
        plan_dashboard(&self.plots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plot::parse_plots;

    #[test]
    fn test_initially_empty() {
        let state = DashboardState::new();
        assert_eq!(state.plot_count(), 0);
        assert!(state.status().is_pending());
        assert!(state.sections().is_empty());
    }

    #[test]
    fn test_commit_success_keeps_order() {
        let mut state = DashboardState::new();
        state.commit(parse_plots(
            r#"[{"type": "bar", "title": "first"}, {"type": "pie", "title": "second"}]"#,
        ));
        assert_eq!(state.plot_count(), 2);
        assert_eq!(state.plots()[0].title, "first");
        assert_eq!(state.plots()[1].title, "second");
        assert_eq!(*state.status(), FetchState::Loaded(2));
        assert_eq!(state.sections()[1].anchor, Some("models"));
    }

    #[test]
    fn test_malformed_entry_does_not_blank_dashboard() {
        let mut state = DashboardState::new();
        state.commit(parse_plots(
            r#"[
                {"type": "pie", "title": null, "data": [{"name": "A", "value": null}]},
                {"type": "bar", "title": "ok", "data": [{"name": "B", "value": "3"}]}
            ]"#,
        ));
        assert_eq!(state.plot_count(), 2);
        assert_eq!(*state.status(), FetchState::Loaded(2));
        assert_eq!(state.sections()[1].anchor, Some("models"));
        assert_eq!(state.plots()[1].data[0].value, 3.0);
    }

    #[test]
    fn test_network_failure_leaves_zero_plots() {
        let mut state = DashboardState::new();
        state.commit(Err(FetchError::Network("connection refused".to_string())));
        assert_eq!(state.plot_count(), 0);
        assert!(matches!(state.status(), FetchState::Failed(_)));
    }

    #[test]
    fn test_decode_failure_leaves_zero_plots() {
        let mut state = DashboardState::new();
        state.commit(parse_plots("not json"));
        assert_eq!(state.plot_count(), 0);
        assert!(state.sections().is_empty());
    }
}
