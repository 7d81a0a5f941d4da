use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::surface::{Paint, Surface};

#[derive(Debug, Clone)]
struct GfxState {
    stroke_paint: Option<Paint>,
    fill_paint: Option<Paint>,
    line_width: f32,
    shadow_color: Color32,
    shadow_blur: f32,
    global_alpha: f32,
}

impl Default for GfxState {
    fn default() -> Self {
        Self {
            stroke_paint: None,
            fill_paint: None,
            line_width: 1.0,
            shadow_color: Color32::TRANSPARENT,
            shadow_blur: 0.0,
            global_alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathSeg {
    Line { from: Pos2, to: Pos2 },
    Quad { from: Pos2, control: Pos2, to: Pos2 },
    Circle { center: Pos2, radius: f32 },
}

/// [`Surface`] backend driving an `egui::Painter`.
///
/// Two canvas features have no egui primitive: pattern paints stroke with
/// the tile's average color, and shadows become an underlaid wider
/// translucent stroke instead of a true blur.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    state: GfxState,
    saved: Vec<GfxState>,
    path: Vec<PathSeg>,
    cursor: Option<Pos2>,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            state: GfxState::default(),
            saved: Vec::new(),
            path: Vec::new(),
            cursor: None,
        }
    }

    fn resolve(&self, paint: Option<&Paint>) -> Color32 {
        let color = match paint {
            Some(Paint::Solid(color)) => *color,
            Some(Paint::Tile(tile)) => tile.average_color(),
            None => Color32::BLACK,
        };
        if self.state.global_alpha < 1.0 {
            color.gamma_multiply(self.state.global_alpha)
        } else {
            color
        }
    }

    fn stroke_path_with(&self, stroke: Stroke) {
        for seg in &self.path {
            match *seg {
                PathSeg::Line { from, to } => {
                    self.painter.add(Shape::line_segment([from, to], stroke));
                }
                PathSeg::Quad { from, control, to } => {
                    self.painter.add(QuadraticBezierShape::from_points_stroke(
                        [from, control, to],
                        false,
                        Color32::TRANSPARENT,
                        stroke,
                    ));
                }
                PathSeg::Circle { center, radius } => {
                    self.painter.circle_stroke(center, radius, stroke);
                }
            }
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_round_caps(&mut self) {
        // epaint strokes are always round-capped and round-joined.
    }

    fn set_stroke_paint(&mut self, paint: Paint) {
        self.state.stroke_paint = Some(paint);
    }

    fn set_fill_paint(&mut self, paint: Paint) {
        self.state.fill_paint = Some(paint);
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_shadow_color(&mut self, color: Color32) {
        self.state.shadow_color = color;
    }

    fn set_shadow_blur(&mut self, blur: f32) {
        self.state.shadow_blur = blur;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, point: Pos2) {
        self.cursor = Some(point);
    }

    fn line_to(&mut self, point: Pos2) {
        if let Some(from) = self.cursor {
            self.path.push(PathSeg::Line { from, to: point });
        }
        self.cursor = Some(point);
    }

    fn quad_to(&mut self, control: Pos2, end: Pos2) {
        if let Some(from) = self.cursor {
            self.path.push(PathSeg::Quad {
                from,
                control,
                to: end,
            });
        }
        self.cursor = Some(end);
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.path.push(PathSeg::Circle { center, radius });
    }

    fn stroke(&mut self) {
        if self.state.shadow_blur > 0.0 && self.state.shadow_color != Color32::TRANSPARENT {
            let glow = Stroke::new(
                self.state.line_width + self.state.shadow_blur,
                self.state
                    .shadow_color
                    .gamma_multiply(0.5 * self.state.global_alpha),
            );
            self.stroke_path_with(glow);
        }
        let color = self.resolve(self.state.stroke_paint.as_ref());
        self.stroke_path_with(Stroke::new(self.state.line_width, color));
    }

    fn fill(&mut self) {
        let color = self.resolve(self.state.fill_paint.as_ref());
        for seg in &self.path {
            if let PathSeg::Circle { center, radius } = *seg {
                self.painter.circle_filled(center, radius, color);
            }
        }
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2) {
        let color = self.resolve(self.state.fill_paint.as_ref());
        self.painter
            .rect_filled(Rect::from_min_size(min, size), 0.0, color);
    }
}
