use std::f32::consts::TAU;
use std::sync::OnceLock;

/// Number of precomputed dot patterns, cycled by point index
pub const SPRAY_VARIANTS: usize = 5;

/// Dots per pattern
pub const SPRAY_DOTS: usize = 50;

/// Largest dot offset radius, before the per-segment width clipping
const SPRAY_RADIUS: f32 = 20.0;

/// One pre-seeded spray offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprayDot {
    pub angle: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// The 5x50 spray offset table.
///
/// Seeded once from a fixed seed so the dot patterns are identical on
/// every repaint; regenerating them per frame would make the spray boil.
pub fn spray_patterns() -> &'static [[SprayDot; SPRAY_DOTS]; SPRAY_VARIANTS] {
    static PATTERNS: OnceLock<[[SprayDot; SPRAY_DOTS]; SPRAY_VARIANTS]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut rng = fastrand::Rng::with_seed(0x7370_7261_79);
        let blank = SprayDot {
            angle: 0.0,
            radius: 0.0,
            alpha: 0.0,
        };
        let mut patterns = [[blank; SPRAY_DOTS]; SPRAY_VARIANTS];
        for pattern in &mut patterns {
            for dot in pattern.iter_mut() {
                *dot = SprayDot {
                    angle: rng.f32() * TAU,
                    radius: rng.f32() * SPRAY_RADIUS,
                    alpha: rng.f32(),
                };
            }
        }
        patterns
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_stable_across_calls() {
        assert_eq!(spray_patterns(), spray_patterns());
    }

    #[test]
    fn dots_are_within_seed_ranges() {
        for pattern in spray_patterns() {
            for dot in pattern {
                assert!((0.0..TAU).contains(&dot.angle));
                assert!((0.0..SPRAY_RADIUS).contains(&dot.radius));
                assert!((0.0..1.0).contains(&dot.alpha));
            }
        }
    }
}
