use egui::{Pos2, Vec2};
use log::trace;

use crate::element::free_draw::{Bubble, FreeDraw, FreeDrawStyle};
use crate::error::RenderError;
use crate::geometry;

pub mod painter;
pub mod pattern;
pub mod spray;
pub mod surface;

pub use painter::PainterSurface;
pub use pattern::{Material, PatternTile, crayon_tile, multi_color_tile};
pub use surface::{DrawCommand, Paint, Recorder, Surface};

/// Render one free-hand stroke onto `surface`.
///
/// Pure read of the stroke: the per-segment loop walks positions, widths
/// and style data but never mutates them, and the surface's paint state is
/// saved on entry and restored on every path out. A stroke with fewer than
/// two positions renders nothing.
pub fn render_free_draw<S: Surface>(
    surface: &mut S,
    draw: &FreeDraw,
    material: &Material,
) -> Result<(), RenderError> {
    surface.save();
    let result = render_styled(surface, draw, material);
    surface.restore();
    result
}

fn render_styled<S: Surface>(
    surface: &mut S,
    draw: &FreeDraw,
    material: &Material,
) -> Result<(), RenderError> {
    let base = *draw.colors().first().ok_or(RenderError::NoColor)?;
    surface.set_round_caps();
    match draw.style() {
        FreeDrawStyle::Basic => surface.set_stroke_paint(Paint::Solid(base)),
        FreeDrawStyle::Shadow => {
            surface.set_shadow_color(base);
            surface.set_stroke_paint(Paint::Solid(base));
        }
        FreeDrawStyle::Bubble | FreeDrawStyle::Spray => {
            surface.set_fill_paint(Paint::Solid(base));
        }
        FreeDrawStyle::MultiColor => {
            surface.set_stroke_paint(Paint::Tile(pattern::multi_color_tile(draw.colors())));
        }
        FreeDrawStyle::Crayon => {
            surface.set_stroke_paint(Paint::Tile(pattern::crayon_tile(
                base,
                material.crayon.as_ref(),
            )));
        }
    }

    trace!(
        "rendering {} positions, style {:?}",
        draw.positions().len(),
        draw.style()
    );

    if draw.style() == FreeDrawStyle::Bubble {
        let bubbles = draw.bubbles().ok_or(RenderError::MissingBubbleTrail)?;
        for i in 1..draw.positions().len() {
            draw_bubble(draw.positions()[i], bubbles[i], surface);
        }
        return Ok(());
    }

    for i in 1..draw.positions().len() {
        match draw.style() {
            FreeDrawStyle::Shadow => draw_curve(draw, i, surface, true),
            FreeDrawStyle::Spray => draw_spray(draw, i, surface),
            _ => draw_curve(draw, i, surface, false),
        }
    }
    Ok(())
}

/// Straight first segment, then quadratic curves: control point is the
/// previous position, endpoints are the midpoints of the two adjacent
/// segments. This is what turns the raw polyline into a smooth curve.
fn draw_curve<S: Surface>(draw: &FreeDraw, i: usize, surface: &mut S, shadowed: bool) {
    let positions = draw.positions();
    let center = positions[i - 1];
    let end = positions[i];
    surface.begin_path();
    if i == 1 {
        surface.move_to(center);
        surface.line_to(end);
    } else {
        surface.move_to(geometry::midpoint(positions[i - 2], center));
        surface.quad_to(center, geometry::midpoint(center, end));
    }
    surface.set_line_width(draw.line_widths()[i]);
    if shadowed {
        surface.set_shadow_blur(draw.line_widths()[i]);
    }
    surface.stroke();
}

/// 2x2 dots from the pre-seeded table around the point, clipped to a box
/// twice the segment width so the spray stays proportional to the stroke.
fn draw_spray<S: Surface>(draw: &FreeDraw, i: usize, surface: &mut S) {
    let point = draw.positions()[i];
    let limit = draw.line_widths()[i] * 2.0;
    for dot in &spray::spray_patterns()[i % spray::SPRAY_VARIANTS] {
        let dx = dot.radius * dot.angle.cos();
        let dy = dot.radius * dot.angle.sin();
        if dx < limit && dx > -limit && dy < limit && dy > -limit {
            surface.set_global_alpha(dot.alpha);
            surface.fill_rect(Pos2::new(point.x + dx, point.y + dy), Vec2::splat(2.0));
        }
    }
}

fn draw_bubble<S: Surface>(position: Pos2, bubble: Bubble, surface: &mut S) {
    surface.begin_path();
    surface.set_global_alpha(bubble.opacity);
    surface.circle(position, bubble.radius);
    surface.fill();
}
