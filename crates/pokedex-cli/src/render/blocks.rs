//! Sprite to half-block art conversion
//!
//! Each terminal cell shows two vertically stacked pixels: the top pixel as
//! the cell background and the bottom pixel as the foreground of `▄`.

use crossterm::style::{style, Color, Stylize};
use image::imageops::{self, FilterType};
use image::{ImageError, Rgba, RgbaImage};
use std::collections::HashMap;

/// Sprites are resized to a square of this many pixels, giving
/// `ART_SIZE` columns by `ART_SIZE / 2` rows
pub const ART_SIZE: u32 = 80;

const ALPHA_THRESHOLD: u8 = 128;
const GREY_TOLERANCE: i32 = 10;
const BACKGROUND_DISTANCE: f64 = 30.0;
const FALLBACK_BACKGROUND: Rgba<u8> = Rgba([240, 240, 240, 255]);

const LOWER_HALF: &str = "▄";

/// Decode sprite bytes and render them as rows of half-block art
pub fn sprite_to_blocks(bytes: &[u8]) -> Result<Vec<String>, ImageError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let resized = imageops::resize(&decoded, ART_SIZE, ART_SIZE, FilterType::Lanczos3);
    Ok(to_half_blocks(&resized))
}

pub fn to_half_blocks(img: &RgbaImage) -> Vec<String> {
    let (width, height) = img.dimensions();
    let background = detect_background(img);

    (0..height)
        .step_by(2)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let top = *img.get_pixel(x, y);
                    // An odd last row repeats the top pixel
                    let bottom = if y + 1 < height {
                        *img.get_pixel(x, y + 1)
                    } else {
                        top
                    };
                    render_cell(top, bottom, background)
                })
                .collect()
        })
        .collect()
}

fn render_cell(top: Rgba<u8>, bottom: Rgba<u8>, background: Rgba<u8>) -> String {
    let top_colour = ansi_256(top).filter(|_| !is_background(top, background));
    let bottom_colour = ansi_256(bottom).filter(|_| !is_background(bottom, background));

    match (top_colour, bottom_colour) {
        (None, None) => " ".to_string(),
        (None, Some(b)) => style(LOWER_HALF).with(Color::AnsiValue(b)).to_string(),
        (Some(t), None) => style(" ").on(Color::AnsiValue(t)).to_string(),
        (Some(t), Some(b)) => style(LOWER_HALF)
            .with(Color::AnsiValue(b))
            .on(Color::AnsiValue(t))
            .to_string(),
    }
}

/// Nearest ANSI 256-colour index, or `None` for a transparent pixel
pub fn ansi_256(pixel: Rgba<u8>) -> Option<u8> {
    let [r, g, b, a] = pixel.0;
    if a < ALPHA_THRESHOLD {
        return None;
    }

    let avg = (r as i32 + g as i32 + b as i32) / 3;
    let near_grey = [r, g, b]
        .iter()
        .all(|&c| (c as i32 - avg).abs() <= GREY_TOLERANCE);
    if near_grey {
        return Some(232 + (avg * 23 / 255) as u8);
    }

    Some(16 + 36 * cube_level(r) + 6 * cube_level(g) + cube_level(b))
}

/// Index into the six-step colour cube axis
fn cube_level(value: u8) -> u8 {
    match value {
        0..=46 => 0,
        47..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

/// Most common visible colour along the image border.
///
/// Ties go to the colour seen first, scanning top/bottom rows then
/// left/right columns.
pub fn detect_background(img: &RgbaImage) -> Rgba<u8> {
    let (width, height) = img.dimensions();
    let mut edge = Vec::new();
    for x in 0..width {
        edge.push(img.get_pixel(x, 0));
        if height > 1 {
            edge.push(img.get_pixel(x, height - 1));
        }
    }
    for y in 0..height {
        edge.push(img.get_pixel(0, y));
        if width > 1 {
            edge.push(img.get_pixel(width - 1, y));
        }
    }

    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    let mut order: Vec<&Rgba<u8>> = Vec::new();
    for pixel in edge.into_iter().filter(|p| p.0[3] > 0) {
        let count = counts.entry([pixel.0[0], pixel.0[1], pixel.0[2]]).or_insert(0);
        if *count == 0 {
            order.push(pixel);
        }
        *count += 1;
    }

    let mut best: Option<(&Rgba<u8>, usize)> = None;
    for pixel in order {
        let count = counts[&[pixel.0[0], pixel.0[1], pixel.0[2]]];
        if best.map_or(true, |(_, most)| count > most) {
            best = Some((pixel, count));
        }
    }
    best.map(|(pixel, _)| *pixel).unwrap_or(FALLBACK_BACKGROUND)
}

/// Whether `pixel` should be drawn as blank against `background`
pub fn is_background(pixel: Rgba<u8>, background: Rgba<u8>) -> bool {
    if pixel.0[3] < ALPHA_THRESHOLD || background.0[3] < ALPHA_THRESHOLD {
        return true;
    }
    let distance: f64 = pixel.0[..3]
        .iter()
        .zip(&background.0[..3])
        .map(|(&p, &b)| {
            let d = p as f64 - b as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt();
    distance < BACKGROUND_DISTANCE
}

/// Shown when a sprite is unavailable
pub fn fallback_art() -> Vec<String> {
    [
        "      ╭─────────╮",
        "    ╱             ╲",
        "   ╱               ╲",
        "  │ ──────( ○ )──── │",
        "   ╲               ╱",
        "    ╲             ╱",
        "      ╰─────────╯",
        "       Poke Ball",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip_ansi;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_ansi_256_greys() {
        assert_eq!(ansi_256(Rgba([0, 0, 0, 255])), Some(232));
        assert_eq!(ansi_256(WHITE), Some(255));
        assert_eq!(ansi_256(Rgba([128, 130, 125, 255])), Some(243));
    }

    #[test]
    fn test_ansi_256_colour_cube() {
        assert_eq!(ansi_256(RED), Some(196));
        assert_eq!(ansi_256(Rgba([0, 0, 255, 255])), Some(21));
        assert_eq!(ansi_256(Rgba([100, 200, 50, 255])), Some(77));
    }

    #[test]
    fn test_ansi_256_transparent() {
        assert_eq!(ansi_256(Rgba([255, 0, 0, 127])), None);
        assert_eq!(ansi_256(CLEAR), None);
    }

    #[test]
    fn test_detect_background_most_common_edge() {
        let mut img = RgbaImage::from_pixel(4, 4, WHITE);
        img.put_pixel(0, 0, RED);
        assert_eq!(detect_background(&img), WHITE);
    }

    #[test]
    fn test_detect_background_fallback_when_transparent() {
        let img = RgbaImage::from_pixel(3, 3, CLEAR);
        assert_eq!(detect_background(&img), FALLBACK_BACKGROUND);
    }

    #[test]
    fn test_is_background_distance() {
        assert!(is_background(Rgba([250, 250, 250, 255]), WHITE));
        assert!(!is_background(RED, WHITE));
        assert!(is_background(RED, Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn test_half_blocks_layout() {
        let mut img = RgbaImage::from_pixel(2, 2, WHITE);
        img.put_pixel(1, 1, RED);

        let rows = to_half_blocks(&img);

        assert_eq!(rows.len(), 1);
        assert_eq!(strip_ansi(&rows[0]), " ▄");
    }

    #[test]
    fn test_top_only_pixel_is_blank_cell_with_colour() {
        let mut img = RgbaImage::from_pixel(3, 2, WHITE);
        img.put_pixel(1, 0, RED);

        let rows = to_half_blocks(&img);

        assert_eq!(strip_ansi(&rows[0]), "   ");
    }

    #[test]
    fn test_odd_height_rounds_up() {
        let img = RgbaImage::from_pixel(2, 3, CLEAR);
        let rows = to_half_blocks(&img);
        assert_eq!(rows, ["  ", "  "]);
    }

    #[test]
    fn test_sprite_to_blocks_dimensions() {
        let mut img = RgbaImage::from_pixel(16, 16, CLEAR);
        for x in 4..12 {
            for y in 4..12 {
                img.put_pixel(x, y, RED);
            }
        }
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let rows = sprite_to_blocks(&png).unwrap();

        assert_eq!(rows.len(), (ART_SIZE / 2) as usize);
        for row in &rows {
            assert_eq!(strip_ansi(row).chars().count(), ART_SIZE as usize);
        }
        assert!(rows.iter().any(|row| row.contains(LOWER_HALF)));
    }

    #[test]
    fn test_sprite_to_blocks_rejects_garbage() {
        assert!(sprite_to_blocks(b"definitely not a png").is_err());
    }
}
