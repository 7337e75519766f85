//! Platform-agnostic core module - shared between WASM dashboard and CLI

pub mod axis;
pub mod dashboard;
pub mod error;
pub mod fetch_state;
pub mod layout;
pub mod nav;
pub mod palette;
pub mod pie;
pub mod plot;
pub mod sections;

pub use axis::category_label;
pub use dashboard::DashboardState;
pub use error::FetchError;
pub use fetch_state::FetchState;
pub use layout::{plan_dashboard, Block, SectionLayout, Side};
pub use nav::{Navigator, NAV_PLACEHOLDER};
pub use palette::{slice_color, Rgb, BAR_FILL, SLICE_PALETTE};
pub use pie::{pie_slices, slice_at, PieSlice};
pub use plot::{parse_plots, DataPoint, PlotDescriptor, PlotKind, Position};
pub use sections::{anchor_for, Alignment, Section, SECTIONS};
