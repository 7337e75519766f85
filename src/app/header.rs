//! Header bar with the title and jump-to-section selector, plus the write-up

use eframe::egui;
use crate::core::SECTIONS;
use crate::theme::colors;
use super::DashboardApp;

const WRITE_UP: &str = "Electric vehicles (EVs) are automobiles powered by electric motors, \
which run on electricity stored in batteries. EVs are an environmentally friendly alternative \
to traditional gasoline-powered cars, reducing harmful emissions and contributing to cleaner \
air. They are becoming increasingly popular as technology improves, offering higher driving \
ranges, faster charging times, and lower maintenance costs. EVs also offer benefits like tax \
incentives and reduced operational costs for owners.";

impl DashboardApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("EV Data Dashboard")
                    .color(colors::TEXT_ON_HEADER)
                    .size(26.0)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut picked = None;

                egui::ComboBox::from_id_salt("jump_to_section")
                    .selected_text(
                        egui::RichText::new(self.nav.displayed_value()).color(colors::NAV_TEXT),
                    )
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for section in &SECTIONS {
                            let label = egui::RichText::new(section.label).color(colors::NAV_TEXT);
                            if ui.selectable_label(false, label).clicked() {
                                picked = Some(section.anchor);
                            }
                        }
                    });

                if let Some(anchor) = picked {
                    self.nav.select(anchor);
                }
            });
        });
    }

    pub(crate) fn render_write_up(&self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(colors::BG_CARD)
            .stroke(egui::Stroke::new(1.0, colors::BORDER))
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new("About Electric Vehicles")
                        .color(colors::TEXT_PRIMARY)
                        .size(20.0)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label(egui::RichText::new(WRITE_UP).color(colors::TEXT_SECONDARY));
            });
    }
}
