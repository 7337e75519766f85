//! Pie geometry
//!
//! Slices start at angle 0 (three o'clock) and run counter-clockwise in plot
//! coordinates (y up). Angles are radians.

use std::f64::consts::TAU;

use super::palette::{slice_color, Rgb};
use super::plot::DataPoint;

/// One slice of a pie, in data order
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub name: String,
    /// Raw value as received, shown in tooltips and labels
    pub value: f64,
    pub start: f64,
    pub sweep: f64,
    pub color: Rgb,
}

impl PieSlice {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        self.sweep > 0.0 && angle >= self.start && angle < self.end()
    }

    /// Closed outline of the wedge: centre, arc points, back to centre
    ///
    /// `steps_per_turn` controls arc smoothness; every wedge gets at least two
    /// arc points.
    pub fn wedge_points(&self, radius: f64, steps_per_turn: usize) -> Vec<[f64; 2]> {
        let steps = ((self.sweep / TAU) * steps_per_turn as f64).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for step in 0..=steps {
            let angle = self.start + self.sweep * step as f64 / steps as f64;
            points.push(polar(radius, angle));
        }
        points
    }

    /// Where the value label sits, just outside the rim
    pub fn label_anchor(&self, radius: f64) -> [f64; 2] {
        polar(radius * 1.2, self.mid_angle())
    }
}

fn polar(radius: f64, angle: f64) -> [f64; 2] {
    [radius * angle.cos(), radius * angle.sin()]
}

/// Weight a value contributes to the pie; negative and non-finite count as 0
fn weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Build one slice per data point, coloured by index
pub fn pie_slices(data: &[DataPoint]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|p| weight(p.value)).sum();

    let mut start = 0.0;
    data.iter()
        .enumerate()
        .map(|(index, point)| {
            let sweep = if total > 0.0 {
                weight(point.value) / total * TAU
            } else {
                0.0
            };
            let slice = PieSlice {
                index,
                name: point.name.clone(),
                value: point.value,
                start,
                sweep,
                color: slice_color(index),
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Slice under the point `(x, y)`, if it lies inside `radius`
pub fn slice_at(slices: &[PieSlice], radius: f64, x: f64, y: f64) -> Option<&PieSlice> {
    if x * x + y * y > radius * radius {
        return None;
    }
    let angle = y.atan2(x).rem_euclid(TAU);
    slices.iter().find(|s| s.contains_angle(angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(format!("p{i}"), v))
            .collect()
    }

    #[test]
    fn test_one_slice_per_point() {
        let slices = pie_slices(&points(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(slices.len(), 4);
        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert!((slices[3].sweep - TAU * 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_colors_cycle_from_zero() {
        let slices = pie_slices(&points(&[1.0; 12]));
        assert_eq!(slices[0].color, slice_color(0));
        assert_eq!(slices[9].color, slice_color(9));
        assert_eq!(slices[10].color, slice_color(0));
        assert_eq!(slices[11].color, slice_color(1));
    }

    #[test]
    fn test_slices_are_contiguous() {
        let slices = pie_slices(&points(&[5.0, 3.0, 2.0]));
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[1].start - slices[0].end()).abs() < 1e-12);
        assert!((slices[2].start - slices[1].end()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total() {
        let slices = pie_slices(&points(&[0.0, 0.0]));
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.sweep == 0.0));
        assert!(slice_at(&slices, 1.0, 0.5, 0.0).is_none());
    }

    #[test]
    fn test_negative_and_nan_ignored() {
        let slices = pie_slices(&points(&[-3.0, f64::NAN, 2.0]));
        assert_eq!(slices[0].sweep, 0.0);
        assert_eq!(slices[1].sweep, 0.0);
        assert!((slices[2].sweep - TAU).abs() < 1e-9);
        // raw value is kept for display
        assert_eq!(slices[0].value, -3.0);
    }

    #[test]
    fn test_slice_at() {
        // Four equal quarters: 0 covers the upper-right quadrant
        let slices = pie_slices(&points(&[1.0, 1.0, 1.0, 1.0]));
        assert_eq!(slice_at(&slices, 1.0, 0.5, 0.5).map(|s| s.index), Some(0));
        assert_eq!(slice_at(&slices, 1.0, -0.5, 0.5).map(|s| s.index), Some(1));
        assert_eq!(slice_at(&slices, 1.0, -0.5, -0.5).map(|s| s.index), Some(2));
        assert_eq!(slice_at(&slices, 1.0, 0.5, -0.5).map(|s| s.index), Some(3));
        assert!(slice_at(&slices, 1.0, 2.0, 0.0).is_none());
    }

    #[test]
    fn test_wedge_points() {
        let slices = pie_slices(&points(&[1.0, 3.0]));
        let wedge = slices[0].wedge_points(1.0, 64);
        assert_eq!(wedge[0], [0.0, 0.0]);
        // quarter turn at 64 steps per turn -> 16 steps -> 17 arc points
        assert_eq!(wedge.len(), 18);
        let last = wedge[wedge.len() - 1];
        assert!(last[0].abs() < 1e-9 && (last[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_outside_rim() {
        let slices = pie_slices(&points(&[1.0]));
        let [x, y] = slices[0].label_anchor(80.0);
        assert!((x * x + y * y).sqrt() > 80.0);
    }
}
