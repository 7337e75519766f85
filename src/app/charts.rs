//! Pie and bar charts on top of egui_plot

use std::hash::Hash;

use eframe::egui;
use crate::core::{category_label, pie_slices, slice_at, DataPoint, BAR_FILL};
use crate::theme::{colors, rgb};

/// Fixed chart height; width follows the parent
pub const CHART_HEIGHT: f32 = 250.0;

const PIE_RADIUS: f64 = 80.0;
const PIE_STEPS_PER_TURN: usize = 128;

pub fn pie_chart(ui: &mut egui::Ui, id: impl Hash, data: &[DataPoint]) {
    use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};

    let slices = pie_slices(data);
    let hover_slices = slices.clone();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_background(false)
        .include_x(-PIE_RADIUS * 1.5)
        .include_x(PIE_RADIUS * 1.5)
        .include_y(-PIE_RADIUS * 1.4)
        .include_y(PIE_RADIUS * 1.4)
        .label_formatter(move |_name, value| {
            slice_at(&hover_slices, PIE_RADIUS, value.x, value.y)
                .map(|s| format!("{} : {}", s.name, s.value))
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for slice in &slices {
                if slice.sweep <= 0.0 {
                    continue;
                }

                let color = rgb(slice.color);
                let outline: PlotPoints = slice.wedge_points(PIE_RADIUS, PIE_STEPS_PER_TURN).into();
                plot_ui.polygon(
                    Polygon::new(outline)
                        .fill_color(color)
                        .stroke(egui::Stroke::new(1.0, colors::BG_CARD))
                        .name(&slice.name),
                );

                let [x, y] = slice.label_anchor(PIE_RADIUS);
                plot_ui.text(Text::new(PlotPoint::new(x, y), slice.value.to_string()).color(color));
            }
        });
}

pub fn bar_chart(ui: &mut egui::Ui, id: impl Hash, data: &[DataPoint]) {
    use egui_plot::{Bar, BarChart, Plot};

    let categories = data.to_vec();

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, point)| Bar::new(i as f64, point.value).name(&point.name).width(0.8))
        .collect();

    let chart = BarChart::new(bars)
        .color(rgb(BAR_FILL))
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("{}\nvalue : {}", bar.name, bar.value)
        }));

    Plot::new(id)
        .height(CHART_HEIGHT)
        .show_grid(true)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            category_label(&categories, mark.value)
                .unwrap_or_default()
                .to_string()
        })
        .label_formatter(|_name, _value| String::new())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
