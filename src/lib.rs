//! gpui_grid crate for resizable grid layouts in GPUI

pub mod addressing;
pub mod data_types;
pub mod grid;
pub mod grid_view;
pub mod resize_controller;
pub mod theme;
pub mod tracks;

pub use data_types::{Axis, CellId, GridAddress, GridConfig, GridError, TrackSize, TrackSpec};
pub use grid::{Cell, Grid, ResizeSession};
pub use grid_view::{CellHandle, GridView};
pub use resize_controller::{BandHit, ResizeController};
pub use theme::GridTheme;
pub use tracks::TrackList;
