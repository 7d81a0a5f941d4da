use egui::{Color32, ColorImage, Rgba};
use image::RgbaImage;
use log::debug;

/// Optional brush material supplied by the host. An absent crayon texture
/// falls back to a flat-colored tile.
#[derive(Debug, Default)]
pub struct Material {
    pub crayon: Option<RgbaImage>,
}

/// Width of one color band in the multi-color tile
const COLOR_WIDTH: usize = 5;

/// Height of the multi-color tile
const COLOR_HEIGHT: usize = 20;

/// Side length of the square crayon tile
const CRAYON_SIZE: usize = 100;

/// Small offscreen image repeated to fill a stroked path
#[derive(Debug, Clone)]
pub struct PatternTile {
    image: ColorImage,
}

impl PatternTile {
    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    /// Mean tile color, for backends that cannot tile-stroke a path.
    pub fn average_color(&self) -> Color32 {
        let pixels = &self.image.pixels;
        if pixels.is_empty() {
            return Color32::TRANSPARENT;
        }
        let mut sum = Rgba::TRANSPARENT;
        for &pixel in pixels {
            sum = sum + Rgba::from(pixel);
        }
        Color32::from(sum * (1.0 / pixels.len() as f32))
    }
}

impl PartialEq for PatternTile {
    fn eq(&self, other: &Self) -> bool {
        self.image.size == other.image.size && self.image.pixels == other.image.pixels
    }
}

/// Striped tile for the multi-color style: one 5x20 vertical band per
/// palette color, tiled horizontally when painted.
pub fn multi_color_tile(colors: &[Color32]) -> PatternTile {
    let size = [COLOR_WIDTH * colors.len(), COLOR_HEIGHT];
    let mut image = ColorImage::new(size, Color32::TRANSPARENT);
    for (band, &color) in colors.iter().enumerate() {
        for y in 0..COLOR_HEIGHT {
            for x in 0..COLOR_WIDTH {
                image.pixels[y * size[0] + band * COLOR_WIDTH + x] = color;
            }
        }
    }
    PatternTile { image }
}

/// 100x100 crayon tile: flat base color with the material texture
/// composited on top when present.
pub fn crayon_tile(base: Color32, crayon: Option<&RgbaImage>) -> PatternTile {
    let mut image = ColorImage::new([CRAYON_SIZE, CRAYON_SIZE], base);
    if let Some(texture) = crayon {
        let (width, height) = (texture.width() as usize, texture.height() as usize);
        if width == 0 || height == 0 {
            return PatternTile { image };
        }
        debug!("compositing {width}x{height} crayon material into pattern tile");
        for y in 0..CRAYON_SIZE {
            for x in 0..CRAYON_SIZE {
                // Nearest-neighbour sample, stretching the material over
                // the whole tile.
                let sx = (x * width / CRAYON_SIZE) as u32;
                let sy = (y * height / CRAYON_SIZE) as u32;
                let [r, g, b, a] = texture.get_pixel(sx, sy).0;
                let src = Rgba::from(Color32::from_rgba_unmultiplied(r, g, b, a));
                let dst = Rgba::from(image.pixels[y * CRAYON_SIZE + x]);
                let over = src + dst * (1.0 - src.a());
                image.pixels[y * CRAYON_SIZE + x] = Color32::from(over);
            }
        }
    }
    PatternTile { image }
}
