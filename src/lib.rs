#![warn(clippy::all, rust_2018_idioms)]

pub mod element;
pub mod error;
pub mod geometry;
pub mod render;
pub mod util;

pub use element::free_draw::{Bubble, FreeDraw, FreeDrawStyle};
pub use element::{Corner, Element, RECT_MIN_SIZE};
pub use error::RenderError;
pub use geometry::bounds::BoundsRect;
pub use render::{Material, PainterSurface, Recorder, Surface, render_free_draw};
