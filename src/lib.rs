//! Radar ("spider-web") score chart geometry and circular item placement.
//!
//! The geometry in [`geometry`] is pure: the same inputs always produce the
//! same rings, spokes, score polygon and placements. [`view`] wraps it in
//! widgets that re-derive their circle when the drawing area changes, and
//! [`renderer`] turns the result into draw calls on a [`renderer::Painter`].

pub mod attributes;
pub mod color;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod view;

pub use error::{GeometryError, Result};
