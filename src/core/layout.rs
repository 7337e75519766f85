//! Rendering dispatch: turn each descriptor into an ordered block plan
//!
//! The app walks `SectionLayout::blocks` in order, so block order here is the
//! on-screen order (left to right for combo rows, then top to bottom).

use std::fmt;

use tracing::trace;

use super::plot::{PlotDescriptor, PlotKind, Position};
use super::sections::{anchor_for, Alignment};

/// Side of a combo row the description panel occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One visual element of a section
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Pie chart, with a sub-heading when part of a combo
    PieChart { heading: Option<String> },
    /// Bar chart, with a sub-heading when part of a combo
    BarChart { heading: Option<String> },
    /// Combo description panel beside the charts
    DescriptionPanel(Side),
    /// Description below a non-combo chart
    Description,
}

impl Block {
    pub fn is_chart(&self) -> bool {
        matches!(self, Block::PieChart { .. } | Block::BarChart { .. })
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::PieChart { heading: None } => write!(f, "pie"),
            Block::PieChart { heading: Some(h) } => write!(f, "pie \"{h}\""),
            Block::BarChart { heading: None } => write!(f, "bar"),
            Block::BarChart { heading: Some(h) } => write!(f, "bar \"{h}\""),
            Block::DescriptionPanel(Side::Left) => write!(f, "panel(left)"),
            Block::DescriptionPanel(Side::Right) => write!(f, "panel(right)"),
            Block::Description => write!(f, "description"),
        }
    }
}

/// Layout of the plot at a given position in the response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLayout {
    pub index: usize,
    /// Scroll target; `None` past the end of the section table
    pub anchor: Option<&'static str>,
    pub alignment: Alignment,
    /// Blocks in a combo are laid out side by side
    pub side_by_side: bool,
    pub blocks: Vec<Block>,
}

impl SectionLayout {
    pub fn plan(index: usize, plot: &PlotDescriptor) -> Self {
        let mut blocks = Vec::new();

        match &plot.kind {
            PlotKind::Pie => blocks.push(Block::PieChart { heading: None }),
            PlotKind::Bar => blocks.push(Block::BarChart { heading: None }),
            PlotKind::Combo => {
                if plot.position == Some(Position::Left) {
                    blocks.push(Block::DescriptionPanel(Side::Left));
                }
                blocks.push(Block::PieChart {
                    heading: Some(format!("{} (Pie)", plot.title)),
                });
                blocks.push(Block::BarChart {
                    heading: Some(format!("{} (Bar)", plot.title)),
                });
                if plot.position == Some(Position::Right) {
                    blocks.push(Block::DescriptionPanel(Side::Right));
                }
            }
            PlotKind::Other(tag) => {
                trace!(index, tag = %tag, "Unknown plot type, no chart body");
            }
        }

        if plot.kind != PlotKind::Combo && plot.has_description() {
            blocks.push(Block::Description);
        }

        Self {
            index,
            anchor: anchor_for(index),
            alignment: Alignment::for_index(index),
            side_by_side: plot.kind == PlotKind::Combo,
            blocks,
        }
    }
}

/// Plan every plot in response order
pub fn plan_dashboard(plots: &[PlotDescriptor]) -> Vec<SectionLayout> {
    plots
        .iter()
        .enumerate()
        .map(|(index, plot)| SectionLayout::plan(index, plot))
        .collect()
}
