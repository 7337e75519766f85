//! Category axis labels for bar charts
//!
//! Bars sit at integer arguments `0..n`; grid marks anywhere else get no label.

use super::plot::DataPoint;

const MARK_EPSILON: f64 = 1e-6;

/// Category name for a grid mark at `mark`, if it lands on a bar
pub fn category_label(data: &[DataPoint], mark: f64) -> Option<&str> {
    let rounded = mark.round();
    if (mark - rounded).abs() > MARK_EPSILON || rounded < 0.0 {
        return None;
    }
    data.get(rounded as usize).map(|p| p.name.as_str())
}
