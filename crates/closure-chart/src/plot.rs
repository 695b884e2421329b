use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];

// Pixels between the chart frame and the image border
const MARGIN: usize = 40;
// Half-width of a plotted point
const POINT: usize = 2;
// Tick marks drawn along each axis
const TICKS: usize = 10;
const TICK_LEN: usize = 5;

/// Rasterize a scatter chart of `(x, y)` points. The frame spans the full
/// data range on the x axis and `0..=max` on the y axis, both linear.
pub fn scatter(
    points: &[(f64, f64)],
    width: usize,
    height: usize,
    color: [u8; 3],
) -> Vec<Vec<[u8; 3]>> {
    assert!(width > 2 * MARGIN && height > 2 * MARGIN);
    let mut image = vec![vec![WHITE; width]; height];

    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);

    // Frame
    for x in MARGIN..(width - MARGIN) {
        image[height - MARGIN][x] = BLACK;
    }
    for y in MARGIN..=(height - MARGIN) {
        image[y][MARGIN] = BLACK;
    }
    for t in 0..=TICKS {
        let x = MARGIN + t * (width - 2 * MARGIN) / TICKS;
        for d in 0..TICK_LEN {
            image[height - MARGIN + d][x] = BLACK;
        }
        let y = MARGIN + t * (height - 2 * MARGIN) / TICKS;
        for d in 0..TICK_LEN {
            image[y][MARGIN - d] = BLACK;
        }
    }

    for &(x, y) in points {
        let (cx, cy) = to_pixel(x, y, (x_min, x_max), y_max, width, height);
        for py in cy.saturating_sub(POINT)..=(cy + POINT).min(height - 1) {
            for px in cx.saturating_sub(POINT)..=(cx + POINT).min(width - 1) {
                image[py][px] = color;
            }
        }
    }

    image
}

// Maps a data point into the framed area. The y axis points up in the chart
// but down in the pixel buffer.
fn to_pixel(
    x: f64,
    y: f64,
    (x_min, x_max): (f64, f64),
    y_max: f64,
    width: usize,
    height: usize,
) -> (usize, usize) {
    let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };
    let y_span = if y_max > 0.0 { y_max } else { 1.0 };
    let fx = (x - x_min) / x_span;
    let fy = y / y_span;
    let px = MARGIN + (fx * (width - 2 * MARGIN) as f64) as usize;
    let py = height - MARGIN - (fy * (height - 2 * MARGIN) as f64) as usize;
    (px.min(width - MARGIN), py.max(MARGIN))
}

/// Encode a row-major RGB pixel buffer as a PNG file.
pub fn save_png(path: &Path, image: &[Vec<[u8; 3]>]) -> io::Result<()> {
    let height = image.len();
    let width = image[0].len();
    let mut data = Vec::with_capacity(width * height * 3);
    for row in image {
        debug_assert!(row.len() == width);
        for pixel in row {
            data.extend_from_slice(pixel);
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&data)?;
    Ok(())
}
