use egui::{Color32, Pos2, Rect, Vec2};
use log::debug;

use super::Element;
use super::common::{Corner, RECT_MIN_SIZE};
use crate::geometry;
use crate::geometry::bounds::BoundsRect;
use crate::util::time;

/// Rendering style of a free-hand stroke, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreeDrawStyle {
    /// Plain solid line
    Basic,
    /// Solid line with a glow whose radius follows the segment width
    Shadow,
    /// Striped pattern built from the stroke's palette
    MultiColor,
    /// Dot cloud around each point
    Spray,
    /// Textured pattern over a flat base color
    Crayon,
    /// Translucent circle trail
    Bubble,
}

/// Radius/opacity pair for one circle of a bubble-style stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub radius: f32,
    pub opacity: f32,
}

/// Pointer speed (units per millisecond) at or above which segments take
/// the minimum width.
const MAX_SPEED: f32 = 10.0;

/// Pointer speed at or below which segments take the maximum width.
const MIN_SPEED: f32 = 0.5;

/// One free-hand drawing gesture: the captured point trail, per-segment
/// smoothed widths, style data and the current bounding rect.
///
/// The trail grows one point per pointer sample while the gesture is in
/// progress. After capture the stroke is only mutated by the whole-stroke
/// transforms [`FreeDraw::translate`] and [`FreeDraw::resize`], which
/// rewrite every position and rebuild the bounding rect.
#[derive(Debug, Clone)]
pub struct FreeDraw {
    layer: i32,
    positions: Vec<Pos2>,
    colors: Vec<Color32>,
    max_width: f32,
    min_width: f32,
    line_widths: Vec<f32>,
    // Timestamp of the previous sample; drives the speed computation.
    last_move_time: f64,
    // EMA memory: the previous segment's smoothed width.
    last_line_width: f32,
    rect: BoundsRect,
    bubbles: Option<Vec<Bubble>>,
    style: FreeDrawStyle,
}

impl FreeDraw {
    /// Create an empty stroke. `width` is the maximum line width; the
    /// minimum is half of it. The bubble trail is only allocated for
    /// [`FreeDrawStyle::Bubble`].
    pub fn new(colors: Vec<Color32>, width: f32, layer: i32, style: FreeDrawStyle) -> Self {
        Self {
            layer,
            positions: Vec::new(),
            colors,
            max_width: width,
            min_width: width / 2.0,
            // Leading placeholder so width i describes the segment ending
            // at positions[i].
            line_widths: vec![0.0],
            last_move_time: 0.0,
            last_line_width: width,
            rect: BoundsRect::new(),
            bubbles: (style == FreeDrawStyle::Bubble).then(Vec::new),
            style,
        }
    }

    /// Append a pointer sample stamped with the current wall clock.
    pub fn add_position(&mut self, position: Pos2) {
        self.add_position_at(position, time::current_time_millis());
    }

    /// Append a pointer sample taken at `time_ms` (milliseconds): fold it
    /// into the bounding rect, extend the bubble trail for bubble strokes,
    /// and push the smoothed width of the segment it closes.
    pub fn add_position_at(&mut self, position: Pos2, time_ms: f64) {
        self.positions.push(position);
        self.rect.update(position);
        if let Some(bubbles) = &mut self.bubbles {
            bubbles.push(Bubble {
                radius: geometry::random_int(self.min_width * 2.0, self.max_width * 2.0),
                opacity: fastrand::f32(),
            });
        }

        if self.positions.len() > 1 {
            let speed = self.compute_speed(
                self.positions[self.positions.len() - 2],
                self.positions[self.positions.len() - 1],
                time_ms,
            );
            let line_width = self.compute_line_width(speed);
            self.line_widths.push(line_width);
        }
    }

    /// Pointer speed between two samples, in units per millisecond.
    fn compute_speed(&mut self, start: Pos2, end: Pos2, now_ms: f64) -> f32 {
        let move_distance = geometry::distance(start, end);
        let move_time = now_ms - self.last_move_time;
        self.last_move_time = now_ms;

        if move_time <= 0.0 {
            // A duplicate timestamp would otherwise push a non-finite
            // width into the EMA memory and corrupt every later segment.
            return f32::INFINITY;
        }
        (move_distance as f64 / move_time) as f32
    }

    /// Map speed to a segment width. Fast motion thins the line, slow
    /// motion thickens it, clamped at both ends, then blended 1/3-2/3
    /// with the previous width so noisy sampling does not jitter.
    fn compute_line_width(&mut self, speed: f32) -> f32 {
        let target = if speed >= MAX_SPEED {
            self.min_width
        } else if speed <= MIN_SPEED {
            self.max_width
        } else {
            self.max_width - (speed / MAX_SPEED) * self.max_width
        };

        let line_width = target * (1.0 / 3.0) + self.last_line_width * (2.0 / 3.0);
        self.last_line_width = line_width;
        line_width
    }

    /// Shift every position by `delta` and rebuild the bounding rect.
    pub fn translate(&mut self, delta: Vec2) {
        self.rect.reset();
        for position in &mut self.positions {
            *position += delta;
            self.rect.update(*position);
        }
    }

    /// Scale every position by `(scale_x, scale_y)`, keeping the corner
    /// opposite the dragged `corner` handle fixed relative to `prev_rect`
    /// (the stroke's bounding rect before the resize).
    ///
    /// Scaling about the origin moves every corner, so this runs in two
    /// passes: scale and measure the new rect, then shift all positions by
    /// the offset of the anchored corner.
    pub fn resize(&mut self, scale_x: f32, scale_y: f32, prev_rect: BoundsRect, corner: Corner) {
        // There is no reverse-growth handling, so shrinking is blocked
        // once the stroke reaches the minimum size.
        if (self.rect.width() <= RECT_MIN_SIZE && scale_x < 1.0)
            || (self.rect.height() <= RECT_MIN_SIZE && scale_y < 1.0)
        {
            debug!(
                "resize blocked at minimum size: {}x{}",
                self.rect.width(),
                self.rect.height()
            );
            return;
        }

        self.rect.reset();
        for position in &mut self.positions {
            position.x *= scale_x;
            position.y *= scale_y;
            self.rect.update(*position);
        }

        let (new_x, new_y) = (self.rect.x(), self.rect.y());
        let (new_width, new_height) = (self.rect.width(), self.rect.height());
        let (offset_x, offset_y) = match corner {
            Corner::BottomRight => (new_x - prev_rect.x(), new_y - prev_rect.y()),
            Corner::BottomLeft => (
                new_x + new_width - (prev_rect.x() + prev_rect.width()),
                new_y - prev_rect.y(),
            ),
            Corner::TopLeft => (
                new_x + new_width - (prev_rect.x() + prev_rect.width()),
                new_y + new_height - (prev_rect.y() + prev_rect.height()),
            ),
            Corner::TopRight => (
                new_x - prev_rect.x(),
                new_y + new_height - (prev_rect.y() + prev_rect.height()),
            ),
        };

        self.rect.reset();
        for position in &mut self.positions {
            position.x -= offset_x;
            position.y -= offset_y;
            self.rect.update(*position);
        }
    }

    pub fn positions(&self) -> &[Pos2] {
        &self.positions
    }

    pub fn line_widths(&self) -> &[f32] {
        &self.line_widths
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn style(&self) -> FreeDrawStyle {
        self.style
    }

    /// The bubble trail, index-aligned with the positions; `None` for
    /// every style except bubble.
    pub fn bubbles(&self) -> Option<&[Bubble]> {
        self.bubbles.as_deref()
    }

    /// The stroke's current bounding rect.
    pub fn bounds(&self) -> BoundsRect {
        self.rect
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    /// The previous segment's smoothed width (the EMA memory).
    pub fn last_line_width(&self) -> f32 {
        self.last_line_width
    }
}

impl Element for FreeDraw {
    fn element_type(&self) -> &'static str {
        super::FREE_DRAW
    }

    fn layer(&self) -> i32 {
        self.layer
    }

    fn rect(&self) -> Rect {
        self.rect.to_rect()
    }
}
