//! Plot sections: card placement, block dispatch, descriptions

use eframe::egui;
use tracing::info;
use crate::core::{Alignment, Block, PlotDescriptor, SectionLayout, Side};
use crate::theme::colors;
use super::charts::{bar_chart, pie_chart};
use super::DashboardApp;

/// Share of the row width a section card takes
const SECTION_WIDTH: f32 = 0.85;

impl DashboardApp {
    pub(crate) fn render_section(
        &mut self,
        ui: &mut egui::Ui,
        section: &SectionLayout,
        plot: &PlotDescriptor,
    ) {
        let width = ui.available_width() * SECTION_WIDTH;
        let align = match section.alignment {
            Alignment::Left => egui::Align::Min,
            Alignment::Right => egui::Align::Max,
        };

        let card = ui
            .with_layout(egui::Layout::top_down(align), |ui| {
                egui::Frame::new()
                    .fill(colors::BG_CARD)
                    .stroke(egui::Stroke::new(1.0, colors::BORDER))
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            render_blocks(ui, section, plot);
                        });
                    })
                    .response
            })
            .inner;

        if self.nav.take_if_target(section.anchor) {
            info!(anchor = ?section.anchor, index = section.index, "Scrolling to section");
            ui.scroll_to_rect(card.rect, Some(egui::Align::TOP));
        }
    }
}

fn render_blocks(ui: &mut egui::Ui, section: &SectionLayout, plot: &PlotDescriptor) {
    if section.side_by_side && !section.blocks.is_empty() {
        ui.columns(section.blocks.len(), |columns| {
            for (column, block) in columns.iter_mut().zip(&section.blocks) {
                render_block(column, block, section.index, plot);
            }
        });
    } else {
        for block in &section.blocks {
            render_block(ui, block, section.index, plot);
        }
    }
}

fn render_block(ui: &mut egui::Ui, block: &Block, index: usize, plot: &PlotDescriptor) {
    match block {
        Block::PieChart { heading } => {
            if let Some(heading) = heading {
                sub_heading(ui, heading);
            }
            pie_chart(ui, ("pie", index), &plot.data);
        }
        Block::BarChart { heading } => {
            if let Some(heading) = heading {
                sub_heading(ui, heading);
            }
            bar_chart(ui, ("bar", index), &plot.data);
        }
        Block::DescriptionPanel(side) => {
            let align = match side {
                Side::Left => egui::Align::Min,
                Side::Right => egui::Align::Max,
            };
            ui.with_layout(egui::Layout::top_down(align), |ui| {
                description_popup(ui, plot);
            });
        }
        Block::Description => {
            ui.add_space(8.0);
            description_popup(ui, plot);
        }
    }
}

fn sub_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .color(colors::TEXT_PRIMARY)
            .size(17.0)
            .strong(),
    );
}

/// One paragraph per description line
fn description_popup(ui: &mut egui::Ui, plot: &PlotDescriptor) {
    egui::Frame::new()
        .fill(colors::BG_POPUP)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            for line in plot.description_lines() {
                ui.label(egui::RichText::new(line).color(colors::TEXT_SECONDARY));
            }
        });
}
