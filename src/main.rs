//! Standalone CLI for checking the plots endpoint and the dashboard layout
//!
//! Run with: cargo run --features cli --bin ev-cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use ev_dashboard::config::{plots_url_from_env, PLOTS_URL_ENV};
    use ev_dashboard::core::{DashboardState, SECTIONS};
    use ev_dashboard::fetch_native::fetch_plots;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ev_dashboard=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let url = plots_url_from_env();
    info!(url = %url, env_set = std::env::var(PLOTS_URL_ENV).is_ok(), "Plots URL resolved");

    let mut state = DashboardState::new();
    state.commit(fetch_plots(&url).await);

    let plots = state.plots();
    for section in state.sections() {
        let plot = &plots[section.index];
        let blocks: Vec<String> = section.blocks.iter().map(ToString::to_string).collect();
        let charts = section.blocks.iter().filter(|b| b.is_chart()).count();

        info!(
            index = section.index,
            anchor = section.anchor.unwrap_or("-"),
            align = section.alignment.class_name(),
            kind = plot.kind.tag(),
            title = %plot.title,
            charts,
            points = plot.data.len(),
            lines = plot.description_lines().len(),
            blocks = %blocks.join(" | "),
            "section"
        );

        if section.anchor.is_none() {
            warn!(index = section.index, "Section has no navigation anchor");
        }
    }

    for section in SECTIONS.iter().skip(state.plot_count()) {
        warn!(anchor = section.anchor, label = section.label, "Menu entry has no section");
    }

    info!(plots = state.plot_count(), status = ?state.status(), "done");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
