//! Core simulation for an interactive Game of Life.
//!
//! The [`Life`] grid is toroidal: both axes wrap, so there are no edge cells
//! and every coordinate is valid. A UI driver stamps [`Pattern`]s from the
//! [`catalog`] onto the grid at mouse coordinates and steps the simulation on
//! its own clock; this crate never touches a window, framebuffer, or input
//! device.

mod icon;
mod life;
mod pattern;

pub use icon::{rasterize_icon, ICON_CELLS, ICON_PIXELS};
pub use life::Life;
pub use pattern::{catalog, Pattern};
