//! EV dashboard egui app
//!
//! One view: header with the jump-to-section selector, the write-up, then one
//! section per plot descriptor inside a vertical scroll area.

mod charts;
mod header;
mod section;

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use tracing::info;

use crate::config::plots_url_from_window;
use crate::core::{DashboardState, Navigator};
use crate::fetch_wasm::spawn_fetch;
use crate::theme::{colors, dashboard_visuals};

/// EV dashboard app (WASM)
pub struct DashboardApp {
    /// Plots from the one-shot fetch; the fetch future holds a weak handle
    pub(crate) state: Rc<RefCell<DashboardState>>,
    /// Jump-to-section selector state
    pub(crate) nav: Navigator,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());

        let state = Rc::new(RefCell::new(DashboardState::new()));

        let plots_url = plots_url_from_window();
        info!(url = %plots_url, "Plots URL resolved");
        spawn_fetch(plots_url, Rc::downgrade(&state), cc.egui_ctx.clone());

        Self {
            state,
            nav: Navigator::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_PRIMARY)
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_write_up(ui);
                        ui.add_space(24.0);
                        self.render_plots(ui);
                    });
            });

        // A target no section claimed (e.g. fewer plots than menu entries)
        self.nav.end_frame();
    }
}

impl DashboardApp {
    fn render_plots(&mut self, ui: &mut egui::Ui) {
        let state = self.state.clone();
        let state = state.borrow();
        let plots = state.plots();

        for section in state.sections() {
            self.render_section(ui, &section, &plots[section.index]);
            ui.add_space(24.0);
        }
    }
}
