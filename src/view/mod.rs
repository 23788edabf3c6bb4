//! Stateful widget facades over the pure geometry.
//!
//! Each view keeps the last circle frame and recomputes its derived state on
//! two events: the drawing area changing size, and its inputs changing.
//! Setters validate first, so a rejected value leaves the last good state
//! visible.

pub mod circular_layout;
pub mod score_web;

pub use circular_layout::CircularLayout;
pub use score_web::ScoreWebView;

use crate::error::Result;
use crate::geometry::{Rect, Size};

/// Layout capability: turn measured child sizes into placement rectangles.
pub trait ChildLayout {
    fn place(&self, children: &[Size]) -> Result<Vec<Rect>>;
}
