//! PNG export of a composed artwork
//!
//! Renders the same structured cells and styles the SVG serializer uses, with
//! the same transforms: cell scale around its center, the per-column vertical
//! offset, and the horizontal grid offset.

use crate::generation::Artwork;
use crate::geometry::Point;
use crate::io::configuration::DOCUMENT_BOTTOM_MARGIN;
use crate::io::error::{Result, SkilleError};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Parse a `#rrggbb` color into an opaque pixel
pub fn parse_hex_color(color: &str) -> Option<Rgba<u8>> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

/// Even-odd test of a pixel center against a closed polygon
fn contains(polygon: &[Point; 4], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut previous = polygon[3];
    for &current in polygon {
        let [xi, yi] = current;
        let [xj, yj] = previous;
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

/// Fill a polygon given in pixel coordinates
fn fill_polygon(img: &mut RgbaImage, polygon: &[Point; 4], color: Rgba<u8>) {
    let (width, height) = img.dimensions();

    let min_x = polygon.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
    let max_x = polygon.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);
    let min_y = polygon.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
    let max_y = polygon.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);

    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return;
    }

    let x_start = min_x.floor().max(0.0) as u32;
    let x_end = (max_x.ceil().max(0.0) as u32).min(width);
    let y_start = min_y.floor().max(0.0) as u32;
    let y_end = (max_y.ceil().max(0.0) as u32).min(height);

    for py in y_start..y_end {
        for px in x_start..x_end {
            if contains(polygon, f64::from(px) + 0.5, f64::from(py) + 0.5) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Rasterize an artwork onto a transparent image
///
/// # Errors
///
/// Returns an error if the document size is not a positive pixel count or a
/// style color cannot be parsed.
pub fn render_artwork(artwork: &Artwork) -> Result<RgbaImage> {
    let width = artwork.canvas.width;
    let height = artwork.canvas.height + DOCUMENT_BOTTOM_MARGIN;
    if !(width >= 1.0 && height >= 1.0 && width.is_finite() && height.is_finite()) {
        return Err(SkilleError::EmptyArtwork {
            profile_id: artwork.profile_id.clone(),
        });
    }

    let mut img = ImageBuffer::new(width.round() as u32, height.round() as u32);
    let offset_x = artwork.profile.offset_width;

    for (col, column) in artwork.profile.columns.iter().enumerate() {
        let offset_y = artwork.style.column_offset(col);
        for (row, cell) in column.iter().enumerate() {
            let Some(style) = artwork.style.cell(col, row) else {
                continue;
            };
            if style.scale <= 0.0 {
                continue;
            }

            let color =
                parse_hex_color(style.color).ok_or_else(|| SkilleError::InvalidParameter {
                    parameter: "color",
                    value: style.color.to_string(),
                    reason: "expected a #rrggbb color".to_string(),
                })?;

            let [dx, dy] = cell.translate;
            let polygon = cell.vertices.map(|[vx, vy]| {
                [
                    offset_x + dx + vx * style.scale,
                    offset_y + dy + vy * style.scale,
                ]
            });
            fill_polygon(&mut img, &polygon, color);
        }
    }

    Ok(img)
}

/// Rasterize an artwork and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The artwork cannot be rendered (see [`render_artwork`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_artwork_as_png(artwork: &Artwork, output_path: &Path) -> Result<()> {
    let img = render_artwork(artwork)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SkilleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SkilleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
