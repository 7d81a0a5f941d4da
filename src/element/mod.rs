use egui::Rect;

pub mod common;
pub mod free_draw;

pub use common::{Corner, RECT_MIN_SIZE};
pub use free_draw::{Bubble, FreeDraw, FreeDrawStyle};

/// Element-type tag for free-hand strokes.
pub const FREE_DRAW: &str = "freeDraw";

/// Common trait that all document elements implement. The free-hand stroke
/// is the only implementor in this crate; the rest of the element system
/// consumes it through this seam.
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Z-order of the element within its document
    fn layer(&self) -> i32;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;
}
