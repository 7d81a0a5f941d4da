use egui::{Color32, Pos2, Vec2};

use super::pattern::PatternTile;

/// Paint source for strokes and fills
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color32),
    /// A repeating offscreen tile
    Tile(PatternTile),
}

/// Canvas-style 2D drawing surface.
///
/// The style renderers are written against this trait so they stay
/// independent of the backend: [`PainterSurface`](super::PainterSurface)
/// lowers the calls to `egui` shapes, [`Recorder`] keeps them as a display
/// list. Backends keep a stack of paint state honoring `save`/`restore`.
pub trait Surface {
    /// Push the current paint state.
    fn save(&mut self);

    /// Pop back to the previously saved paint state.
    fn restore(&mut self);

    /// Round caps and joins for all stroked paths.
    fn set_round_caps(&mut self);

    fn set_stroke_paint(&mut self, paint: Paint);

    fn set_fill_paint(&mut self, paint: Paint);

    fn set_line_width(&mut self, width: f32);

    fn set_shadow_color(&mut self, color: Color32);

    fn set_shadow_blur(&mut self, blur: f32);

    fn set_global_alpha(&mut self, alpha: f32);

    /// Start a fresh path, discarding any unstroked one.
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Pos2);

    fn line_to(&mut self, point: Pos2);

    /// Quadratic Bézier from the current point through `control` to `end`.
    fn quad_to(&mut self, control: Pos2, end: Pos2);

    /// Append a full circle to the current path.
    fn circle(&mut self, center: Pos2, radius: f32);

    /// Stroke the current path with the stroke paint.
    fn stroke(&mut self);

    /// Fill the current path with the fill paint.
    fn fill(&mut self);

    /// Fill an axis-aligned rectangle with the fill paint.
    fn fill_rect(&mut self, min: Pos2, size: Vec2);
}

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    RoundCaps,
    StrokePaint(Paint),
    FillPaint(Paint),
    LineWidth(f32),
    ShadowColor(Color32),
    ShadowBlur(f32),
    GlobalAlpha(f32),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    QuadTo { control: Pos2, end: Pos2 },
    Circle { center: Pos2, radius: f32 },
    Stroke,
    Fill,
    FillRect { min: Pos2, size: Vec2 },
}

/// Display-list surface: records every command for later replay or
/// inspection instead of rasterizing.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_round_caps(&mut self) {
        self.commands.push(DrawCommand::RoundCaps);
    }

    fn set_stroke_paint(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::StrokePaint(paint));
    }

    fn set_fill_paint(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::FillPaint(paint));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_shadow_color(&mut self, color: Color32) {
        self.commands.push(DrawCommand::ShadowColor(color));
    }

    fn set_shadow_blur(&mut self, blur: f32) {
        self.commands.push(DrawCommand::ShadowBlur(blur));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Pos2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn quad_to(&mut self, control: Pos2, end: Pos2) {
        self.commands.push(DrawCommand::QuadTo { control, end });
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect { min, size });
    }
}
