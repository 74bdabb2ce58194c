//! Item artwork drawn with half-block characters
//!
//! Each terminal cell shows two vertical pixels: the upper one as the
//! foreground of '▀' and the lower one as its background.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{
    imageops::{self, FilterType},
    RgbaImage,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Pixels below this alpha are left as terminal background
const ALPHA_CUTOFF: u8 = 128;

/// Upper and lower pixel of one cell, None where transparent
pub type HalfBlock = (Option<Color>, Option<Color>);

/// Artwork by filename. Failed loads are remembered as None so a
/// broken file is only tried once.
#[derive(Debug)]
pub struct ArtworkCache {
    dir: PathBuf,
    images: HashMap<String, Option<RgbaImage>>,
}

impl ArtworkCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            images: HashMap::new(),
        }
    }

    /// Load `name` from the image directory on first use
    pub fn load(&mut self, name: &str) -> Option<&RgbaImage> {
        if !self.images.contains_key(name) {
            let image = load_image(&self.dir.join(name));
            self.images.insert(name.to_string(), image);
        }
        self.get(name)
    }

    /// Previously loaded artwork
    pub fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.images.get(name).and_then(Option::as_ref)
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }
}

fn load_image(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(image) => {
            log::debug!("Loaded artwork {:?}", path);
            Some(image.to_rgba8())
        }
        Err(e) => {
            log::debug!("No artwork at {:?}: {}", path, e);
            None
        }
    }
}

/// Largest pixel size with the aspect ratio of `width` x `height` that
/// fits `cols` x `rows` half-block cells
pub fn fit_size(width: u32, height: u32, cols: u16, rows: u16) -> (u32, u32) {
    if width == 0 || height == 0 || cols == 0 || rows == 0 {
        return (0, 0);
    }
    let max_w = u64::from(cols);
    let max_h = u64::from(rows) * 2;
    let (w, h) = (u64::from(width), u64::from(height));

    if max_w * h <= max_h * w {
        (max_w as u32, (h * max_w / w).max(1) as u32)
    } else {
        ((w * max_h / h).max(1) as u32, max_h as u32)
    }
}

/// Cell colors for `image` scaled into `cols` x `rows`, row by row
pub fn half_blocks(image: &RgbaImage, cols: u16, rows: u16) -> Vec<Vec<HalfBlock>> {
    let (w, h) = fit_size(image.width(), image.height(), cols, rows);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let scaled;
    let image = if (w, h) == image.dimensions() {
        image
    } else {
        scaled = imageops::resize(image, w, h, FilterType::Triangle);
        &scaled
    };

    (0..h.div_ceil(2))
        .map(|row| {
            let top = row * 2;
            (0..w)
                .map(|x| {
                    let lower = if top + 1 < h {
                        pixel_color(image, x, top + 1)
                    } else {
                        None
                    };
                    (pixel_color(image, x, top), lower)
                })
                .collect()
        })
        .collect()
}

fn pixel_color(image: &RgbaImage, x: u32, y: u32) -> Option<Color> {
    let [r, g, b, a] = image.get_pixel(x, y).0;
    (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
}

/// Draws an image centered horizontally in its area
pub struct ArtworkWidget<'a> {
    image: &'a RgbaImage,
}

impl<'a> ArtworkWidget<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self { image }
    }
}

impl Widget for ArtworkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = half_blocks(self.image, area.width, area.height);
        let width = rows.first().map_or(0, Vec::len) as u16;
        let left = area.x + area.width.saturating_sub(width) / 2;

        for (dy, row) in rows.iter().enumerate() {
            for (dx, &(upper, lower)) in row.iter().enumerate() {
                let position = (left + dx as u16, area.y + dy as u16);
                let Some(cell) = buf.cell_mut(position) else {
                    continue;
                };
                match (upper, lower) {
                    (Some(upper), Some(lower)) => {
                        cell.set_char('▀').set_fg(upper).set_bg(lower);
                    }
                    (Some(upper), None) => {
                        cell.set_char('▀').set_fg(upper);
                    }
                    (None, Some(lower)) => {
                        cell.set_char('▄').set_fg(lower);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([200, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 200, 255]);

    /// Red top row, blue bottom row
    fn two_tone(width: u32) -> RgbaImage {
        RgbaImage::from_fn(width, 2, |_, y| if y == 0 { RED } else { BLUE })
    }

    #[test]
    fn test_fit_size_keeps_aspect() {
        assert_eq!(fit_size(100, 100, 20, 5), (10, 10));
        assert_eq!(fit_size(200, 100, 20, 20), (20, 10));
        assert_eq!(fit_size(2, 2, 2, 1), (2, 2));
        assert_eq!(fit_size(0, 10, 20, 5), (0, 0));
        assert_eq!(fit_size(10, 10, 0, 5), (0, 0));
    }

    #[test]
    fn test_half_blocks_pair_rows() {
        let cells = half_blocks(&two_tone(2), 2, 1);
        let expected = (Some(Color::Rgb(200, 0, 0)), Some(Color::Rgb(0, 0, 200)));
        assert_eq!(cells, vec![vec![expected, expected]]);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut image = two_tone(1);
        image.put_pixel(0, 1, Rgba([0, 0, 200, 0]));
        let cells = half_blocks(&image, 1, 1);
        assert_eq!(cells, vec![vec![(Some(Color::Rgb(200, 0, 0)), None)]]);
    }

    #[test]
    fn test_widget_draws_centered() {
        let image = two_tone(2);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        ArtworkWidget::new(&image).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), "▀");
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(200, 0, 0));
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(0, 0, 200));
        assert_eq!(buf[(3, 0)].symbol(), " ");
    }

    #[test]
    fn test_cache_loads_once_and_hides_broken() {
        let dir = TempDir::new().unwrap();
        two_tone(4).save(dir.path().join("gear.png")).unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let mut cache = ArtworkCache::new(dir.path());
        assert_eq!(cache.load("gear.png").map(|i| i.dimensions()), Some((4, 2)));
        assert!(cache.load("broken.png").is_none());
        assert!(cache.load("missing.png").is_none());
        assert!(cache.is_cached("missing.png"));
        assert!(cache.get("gear.png").is_some());
    }
}
