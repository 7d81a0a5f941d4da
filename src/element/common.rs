/// Minimum bounding-box side length; shrink edits stop once a stroke
/// reaches this size.
pub const RECT_MIN_SIZE: f32 = 10.0;

/// The resize handle being dragged. The opposite corner of the bounding
/// box stays anchored during the resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        }
    }
}
