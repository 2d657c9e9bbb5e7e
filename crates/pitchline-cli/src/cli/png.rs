//! PNG preview rendering.

use resvg::usvg;
use tiny_skia::Pixmap;

/// Largest edge, in pixels, of a rendered preview.
const MAX_EDGE_PX: f32 = 8192.0;

/// Longest edge used when no scale is given.
const DEFAULT_EDGE_PX: f32 = 1024.0;

/// Rasterise SVG content to a PNG file using resvg.
///
/// `scale` multiplies the SVG's intrinsic size; without one the longest edge
/// is fitted to 1024 px. Returns the pixel size written.
pub fn render_png(svg_content: &str, png_path: &str, scale: Option<f64>) -> Result<(u32, u32), String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| format!("Failed to parse generated SVG: {}", e))?;

    let size = tree.size();
    let longest = size.width().max(size.height());
    let scale = match scale {
        Some(s) if s > 0.0 && s.is_finite() => s as f32,
        Some(s) => return Err(format!("Invalid PNG scale: {}", s)),
        None => DEFAULT_EDGE_PX / longest,
    };
    let scale = scale.min(MAX_EDGE_PX / longest);

    let pixmap_width = ((size.width() * scale).ceil() as u32).max(1);
    let pixmap_height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height)
        .ok_or_else(|| format!("Could not create {}x{} pixmap", pixmap_width, pixmap_height))?;

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .map_err(|e| format!("Failed to write {}: {}", png_path, e))?;

    log::info!("rendered {}x{} preview to {}", pixmap_width, pixmap_height, png_path);
    Ok((pixmap_width, pixmap_height))
}
