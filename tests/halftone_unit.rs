//! Unit tests for the halftone filter.
//!
//! These tests exercise the public pipeline end to end on in-memory buffers:
//! - Preprocessing (luminance, contrast, brightness)
//! - Cell sampling and rectangle geometry
//! - Raster/vector parity
//! - Edge cases (white, black, partial cells)

use halftone::color::Color;
use halftone::halftone::*;

fn make_buffer(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::filled(width, height, [rgb[0], rgb[1], rgb[2], 255])
}

fn make_gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ==================== Preprocessing Tests ====================

#[test]
fn test_preprocess_is_idempotent_at_identity() {
    let source = make_gradient(64, 8);
    let once = preprocess(&source, 1.0, 0);
    let twice = preprocess(&once, 1.0, 0);
    assert_eq!(once, twice);
}

#[test]
fn test_preprocess_outputs_gray_pixels() {
    let source = make_buffer(4, 4, [200, 40, 90]);
    let out = preprocess(&source, 1.3, 12);
    for px in out.data().chunks_exact(CHANNELS) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn test_higher_brightness_never_darkens() {
    let source = make_gradient(32, 2);
    let dim = preprocess(&source, 1.0, -20);
    let bright = preprocess(&source, 1.0, 20);
    for (d, b) in dim.data().iter().zip(bright.data()) {
        assert!(b >= d);
    }
}

// ==================== Geometry Tests ====================

#[test]
fn test_white_image_emits_no_rectangles() {
    let params = RenderParameters::default();
    let luminance = preprocess(&make_buffer(50, 50, [255, 255, 255]), 1.0, 0);
    assert!(halftone_rects(&luminance, &params).is_empty());

    let svg = export_vector(&make_buffer(50, 50, [255, 255, 255]), &params);
    // Only the background rect
    assert_eq!(svg.matches("<rect").count(), 1);
}

#[test]
fn test_black_image_full_heights() {
    let params = RenderParameters::default();
    let luminance = preprocess(&make_buffer(100, 100, [0, 0, 0]), 1.0, 0);
    let rects = halftone_rects(&luminance, &params);

    // cell 6, ceil(100 / 6) = 17 per axis, last sample at 99 is in bounds
    assert_eq!(params.cell_size(), 6);
    assert_eq!(cell_count(100, 6), 17);
    assert_eq!(rects.len(), 17 * 17);

    for rect in &rects {
        let expected = if rect.col % 3 == 0 {
            params.max_height()
        } else {
            params.max_height() * params.tall_ratio
        };
        assert!(approx(rect.height, expected), "{:?}", rect);
        assert!(approx(rect.width, 4.0));
        assert_eq!(rect.color, Color::BLACK);
    }
}

#[test]
fn test_tall_and_scaled_columns() {
    let params = RenderParameters::default();
    let luminance = preprocess(&make_buffer(100, 100, [0, 0, 0]), 1.0, 0);
    let rects = halftone_rects(&luminance, &params);

    let col0 = rects[0];
    assert_eq!((col0.col, col0.row), (0, 0));
    assert!(approx(col0.x, 1.0));
    assert!(approx(col0.y, 0.0));
    assert!(approx(col0.height, 6.0));

    let col1 = rects[1];
    assert_eq!((col1.col, col1.row), (1, 0));
    assert!(approx(col1.x, 7.0));
    assert!(approx(col1.height, 3.6));
    assert!(approx(col1.y, 1.2));
}

#[test]
fn test_darker_samples_give_taller_rects() {
    let params = RenderParameters::default();
    let mut last = -1.0;
    for level in (0..=240u8).rev().step_by(40) {
        let luminance = preprocess(&make_buffer(6, 6, [level, level, level]), 1.0, 0);
        let rects = halftone_rects(&luminance, &params);
        let height = rects.first().map(|r| r.height).unwrap_or(0.0);
        assert!(height >= last, "level {} gave {}", level, height);
        last = height;
    }
}

#[test]
fn test_partial_edge_cells_skipped() {
    let params = RenderParameters::default();
    // Width 8: second cell at x=6 samples x=9, outside the canvas
    let luminance = preprocess(&make_buffer(8, 6, [0, 0, 0]), 1.0, 0);
    let rects = halftone_rects(&luminance, &params);
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].col, 0);
}

#[test]
fn test_rectangles_are_row_major() {
    let params = RenderParameters::default();
    let luminance = preprocess(&make_buffer(30, 30, [0, 0, 0]), 1.0, 0);
    let rects = halftone_rects(&luminance, &params);
    let order: Vec<(u32, u32)> = rects.iter().map(|r| (r.row, r.col)).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

// ==================== Parity Tests ====================

#[test]
fn test_vector_matches_raster_geometry() {
    let params = RenderParameters {
        dot_size: 5,
        dot_spacing: 3,
        tall_ratio: 0.45,
        ..Default::default()
    };
    let source = make_gradient(120, 40);
    let luminance = preprocess(&source, params.contrast, params.brightness);
    let rects = halftone_rects(&luminance, &params);
    let svg = export_vector(&source, &params);

    assert_eq!(svg.matches("<rect").count(), rects.len() + 1);
    for rect in &rects {
        let element = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height, rect.color
        );
        assert!(svg.contains(&element), "missing {}", element);
    }
}

#[test]
fn test_render_paints_every_rect() {
    let params = RenderParameters::default();
    let source = make_buffer(100, 100, [0, 0, 0]);
    let surface = render(&source, &params);

    assert_eq!(surface.dimensions(), (100, 100));
    // Tall rect of col 0 spans x 1..5, y 0..6
    assert_eq!(surface.get_pixel(3, 3).0, [0, 0, 0, 255]);
    // Gutter between rects stays background
    assert_eq!(surface.get_pixel(0, 0).0, [255, 255, 255, 255]);
    // Scaled rect of col 1 spans y 1.2..4.8
    assert_eq!(surface.get_pixel(9, 0).0, [255, 255, 255, 255]);
    assert_eq!(surface.get_pixel(9, 3).0, [0, 0, 0, 255]);
}

#[test]
fn test_render_is_deterministic() {
    let params = RenderParameters::default();
    let source = make_gradient(90, 45);
    assert_eq!(render(&source, &params), render(&source, &params));
    assert_eq!(export_vector(&source, &params), export_vector(&source, &params));
}

#[test]
fn test_custom_colors_flow_through() {
    let params = RenderParameters {
        foreground: Color::rgb(0x1e, 0x3a, 0x8a),
        background: Color::rgb(0xfd, 0xf6, 0xe3),
        ..Default::default()
    };
    let source = make_buffer(12, 12, [0, 0, 0]);
    let svg = export_vector(&source, &params);
    assert!(svg.contains(r##"<rect width="12" height="12" fill="#fdf6e3"/>"##));
    assert!(svg.contains(r##"fill="#1e3a8a""##));

    let surface = render(&source, &params);
    assert_eq!(surface.get_pixel(0, 0).0, [0xfd, 0xf6, 0xe3, 255]);
    assert_eq!(surface.get_pixel(3, 3).0, [0x1e, 0x3a, 0x8a, 255]);
}
