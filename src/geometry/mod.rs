use egui::Pos2;

pub mod bounds;

/// Euclidean distance between two points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Midpoint of the segment from `a` to `b`
pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Uniformly random integer-valued float in `[min, max)`
pub fn random_int(min: f32, max: f32) -> f32 {
    let span = (max - min).max(0.0);
    (fastrand::f32() * span + min).floor()
}
