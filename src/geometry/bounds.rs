use egui::{Pos2, Rect};

/// Running min/max accumulator for the axis-aligned bounding box of a point
/// trail. There is no removal operation; whenever points are rewritten in
/// place the tracker must be reset and re-driven over the full set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsRect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl BoundsRect {
    /// An empty tracker: extrema seeded so the first point wins both ways.
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold one point into the running extrema.
    pub fn update(&mut self, point: Pos2) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// True until the first `update` call.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    pub fn x(&self) -> f32 {
        if self.is_empty() { 0.0 } else { self.min_x }
    }

    pub fn y(&self) -> f32 {
        if self.is_empty() { 0.0 } else { self.min_y }
    }

    pub fn width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    pub fn to_rect(&self) -> Rect {
        if self.is_empty() {
            Rect::NOTHING
        } else {
            Rect::from_min_max(
                Pos2::new(self.min_x, self.min_y),
                Pos2::new(self.max_x, self.max_y),
            )
        }
    }
}

impl Default for BoundsRect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_has_zero_extent() {
        let bounds = BoundsRect::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.x(), 0.0);
        assert_eq!(bounds.y(), 0.0);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn single_point_yields_zero_area_rect() {
        let mut bounds = BoundsRect::new();
        bounds.update(Pos2::new(3.0, -2.0));
        assert_eq!(bounds.x(), 3.0);
        assert_eq!(bounds.y(), -2.0);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn accumulates_extrema_in_any_order() {
        let mut bounds = BoundsRect::new();
        for point in [
            Pos2::new(5.0, 5.0),
            Pos2::new(-1.0, 9.0),
            Pos2::new(4.0, -3.0),
        ] {
            bounds.update(point);
        }
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 5.0);
        assert_eq!(bounds.min_y, -3.0);
        assert_eq!(bounds.max_y, 9.0);
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 12.0);
    }

    #[test]
    fn reset_forgets_previous_points() {
        let mut bounds = BoundsRect::new();
        bounds.update(Pos2::new(100.0, 100.0));
        bounds.reset();
        bounds.update(Pos2::new(1.0, 2.0));
        assert_eq!(bounds.to_rect(), Rect::from_min_max(Pos2::new(1.0, 2.0), Pos2::new(1.0, 2.0)));
    }
}
