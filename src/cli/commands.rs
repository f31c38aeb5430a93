//! Subcommand handlers for render, pattern and config actions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use halftone::config::{default_path, Config, DEFAULT_CONFIG};
use halftone::error::HalftoneError;
use halftone::export::ExportFormat;
use halftone::halftone::RenderParameters;
use halftone::loader::CanvasBounds;
use halftone::pattern::{
    pattern_document, AnimationParameters, FrameLoop, PatternAnimator, PatternParameters,
    Pointer, Viewport,
};
use halftone::processor::Processor;

use super::args::{ConfigAction, PatternArgs, RenderArgs};

/// Render parameters: CLI > config > built-in defaults.
pub fn render_parameters(args: &RenderArgs, cfg: &Config) -> RenderParameters {
    let base = cfg.render_parameters();
    RenderParameters {
        contrast: args.contrast.unwrap_or(base.contrast),
        brightness: args.brightness.unwrap_or(base.brightness),
        dot_size: args.dot_size.unwrap_or(base.dot_size),
        dot_spacing: args.dot_spacing.unwrap_or(base.dot_spacing),
        dot_density: args.dot_density.unwrap_or(base.dot_density),
        min_height: args.min_height.unwrap_or(base.min_height),
        tall_ratio: args.tall_ratio.unwrap_or(base.tall_ratio),
        foreground: args.color.unwrap_or(base.foreground),
        background: args.background.unwrap_or(base.background),
    }
}

/// Canvas bounds: CLI > config > 800x600.
pub fn canvas_bounds(args: &RenderArgs, cfg: &Config) -> CanvasBounds {
    match args.max_size {
        Some((max_width, max_height)) => CanvasBounds {
            max_width,
            max_height,
        },
        None => cfg.canvas_bounds(),
    }
}

/// Load the input, render, and write the requested artifacts.
pub fn run_render(args: &RenderArgs, cfg: &Config) -> Result<Vec<PathBuf>, HalftoneError> {
    let params = render_parameters(args, cfg);
    params.validate()?;
    let bounds = canvas_bounds(args, cfg);
    bounds.validate()?;

    let mut processor = Processor::new(params, bounds);
    processor.load(&args.input)?;

    let out_dir = args.out_dir.clone().unwrap_or_else(|| cfg.output_dir());
    let mut written = Vec::new();

    for format in args.format.formats() {
        let export = match format {
            ExportFormat::Png => processor.export_png()?,
            ExportFormat::Svg => processor.export_svg(),
        };
        // Nothing loaded means nothing to export
        let Some(export) = export else { continue };

        let path = export.write_to(&out_dir)?;
        println!("Wrote {} (sha256 {})", path.display(), &export.digest()[..16]);
        written.push(path);
    }

    Ok(written)
}

pub fn pattern_parameters(args: &PatternArgs, cfg: &Config) -> PatternParameters {
    let base = cfg.pattern_parameters();
    PatternParameters {
        rectangle_width: args.rect_width.unwrap_or(base.rectangle_width),
        tall_height: args.tall_height.unwrap_or(base.tall_height),
        short_height: args.short_height.unwrap_or(base.short_height),
        horizontal_gap: args.horizontal_gap.unwrap_or(base.horizontal_gap),
        vertical_gap: args.vertical_gap.unwrap_or(base.vertical_gap),
    }
}

pub fn animation_parameters(args: &PatternArgs, cfg: &Config) -> AnimationParameters {
    let base = cfg.animation_parameters();
    AnimationParameters {
        sensitivity: args.sensitivity.unwrap_or(base.sensitivity),
        falloff_size: args.falloff.unwrap_or(base.falloff_size),
        animation_speed: args.animation_speed.unwrap_or(base.animation_speed),
    }
}

/// File name of the `index`-th pattern frame.
pub fn frame_file_name(index: u32) -> String {
    format!("pattern-frame-{:03}.svg", index)
}

/// Pointer position for frame `index` of `frames`, moving linearly.
fn pointer_at(start: Pointer, end: Pointer, index: u32, frames: u32) -> Pointer {
    if frames <= 1 {
        return start;
    }
    let t = index as f64 / (frames - 1) as f64;
    Pointer::new(
        start.x + (end.x - start.x) * t,
        start.y + (end.y - start.y) * t,
    )
}

/// Simulate the pattern animation and write one SVG per frame.
pub fn run_pattern(args: &PatternArgs, cfg: &Config) -> Result<Vec<PathBuf>, HalftoneError> {
    let params = pattern_parameters(args, cfg);
    params.validate()?;
    let animation = animation_parameters(args, cfg);
    animation.validate()?;
    let style = cfg.pattern_style();

    let (width, height) = args.viewport;
    let viewport = Viewport::new(width, height);
    let start = args
        .pointer
        .unwrap_or_else(|| Pointer::new(width as f64 / 2.0, height as f64 / 2.0));
    let end = args.to.unwrap_or(start);

    let out_dir = args.out_dir.clone().unwrap_or_else(|| cfg.output_dir());
    std::fs::create_dir_all(&out_dir).map_err(|e| HalftoneError::Write {
        path: out_dir.clone(),
        source: e,
    })?;

    let frame_time = Duration::from_secs(1) / args.fps;
    let mut frame_loop = FrameLoop::new(PatternAnimator::new(viewport, params, animation));
    let mut written = Vec::with_capacity(args.frames as usize);

    for index in 0..args.frames {
        let pointer = pointer_at(start, end, index, args.frames);
        if frame_loop.frame(frame_time * index, pointer).is_none() {
            break;
        }

        let svg = pattern_document(frame_loop.animator(), &style);
        let path = out_dir.join(frame_file_name(index));
        std::fs::write(&path, svg).map_err(|e| HalftoneError::Write {
            path: path.clone(),
            source: e,
        })?;
        written.push(path);
    }
    frame_loop.stop();

    log::info!(
        "Wrote {} pattern frames ({}x{} grid) to {}",
        written.len(),
        frame_loop.animator().grid().cols,
        frame_loop.animator().grid().rows,
        out_dir.display()
    );
    println!("Wrote {} frame(s) to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit: Option<&Path>, cfg: &Config) {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let p = cfg.render_parameters();
            let bounds = cfg.canvas_bounds();
            let pattern = cfg.pattern_parameters();
            let animation = cfg.animation_parameters();
            let style = cfg.pattern_style();

            println!("Current configuration:");
            println!("  Contrast: {}", p.contrast);
            println!("  Brightness: {}", p.brightness);
            println!("  Dot size: {}px", p.dot_size);
            println!("  Dot spacing: {}px", p.dot_spacing);
            println!("  Dot density: {}x", p.dot_density);
            println!("  Min height: {}px", p.min_height);
            println!("  Tall ratio: {}", p.tall_ratio);
            println!("  Colors: {} on {}", p.foreground, p.background);
            println!("  Canvas: {}x{}", bounds.max_width, bounds.max_height);
            println!(
                "  Pattern: {}px wide, {}/{}px tall, gaps {}x{}",
                pattern.rectangle_width,
                pattern.tall_height,
                pattern.short_height,
                pattern.horizontal_gap,
                pattern.vertical_gap
            );
            println!(
                "  Animation: sensitivity {}x, falloff {}, speed {}s",
                animation.sensitivity, animation.falloff_size, animation.animation_speed
            );
            println!(
                "  Pattern colors: {} (hover {}) on {}",
                style.primary, style.secondary, style.background
            );
            println!("  Output: {}", cfg.output_dir().display());
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'halftone config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            match std::fs::write(&config_path, DEFAULT_CONFIG) {
                Ok(()) => println!("Created config file: {}", config_path.display()),
                Err(e) => {
                    eprintln!("Error writing config file: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};
    use clap::Parser;
    use halftone::color::Color;

    fn render(argv: &[&str]) -> RenderArgs {
        match Args::parse_from(argv).command {
            Command::Render(args) => args,
            other => panic!("expected render, got {:?}", other),
        }
    }

    fn pattern(argv: &[&str]) -> PatternArgs {
        match Args::parse_from(argv).command {
            Command::Pattern(args) => args,
            other => panic!("expected pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = Config::parse(
            "[halftone]\ndot_size = 8\ndot_spacing = 4\ncolor = \"#00ff00\"\n",
            Path::new("t.toml"),
        )
        .unwrap();
        let args = render(&["halftone", "render", "a.png", "--dot-size", "3"]);
        let params = render_parameters(&args, &cfg);
        assert_eq!(params.dot_size, 3);
        assert_eq!(params.dot_spacing, 4);
        assert_eq!(params.foreground, Color::rgb(0, 255, 0));
        assert_eq!(params.contrast, 1.0);
    }

    #[test]
    fn test_max_size_overrides_canvas_config() {
        let cfg = Config::parse("[canvas]\nmax_width = 100\n", Path::new("t.toml")).unwrap();
        let args = render(&["halftone", "render", "a.png"]);
        assert_eq!(canvas_bounds(&args, &cfg).max_width, 100);
        let args = render(&["halftone", "render", "a.png", "--max-size", "50x40"]);
        assert_eq!(
            canvas_bounds(&args, &cfg),
            CanvasBounds {
                max_width: 50,
                max_height: 40
            }
        );
    }

    #[test]
    fn test_pattern_parameter_merge() {
        let cfg = Config::parse("[animation]\nsensitivity = 4.0\n", Path::new("t.toml")).unwrap();
        let args = pattern(&["halftone", "pattern", "--falloff", "0.5", "--rect-width", "12"]);
        let animation = animation_parameters(&args, &cfg);
        assert_eq!(animation.sensitivity, 4.0);
        assert_eq!(animation.falloff_size, 0.5);
        assert_eq!(pattern_parameters(&args, &cfg).rectangle_width, 12);
    }

    #[test]
    fn test_pointer_interpolation() {
        let a = Pointer::new(0.0, 100.0);
        let b = Pointer::new(90.0, 100.0);
        assert_eq!(pointer_at(a, b, 0, 3), a);
        assert_eq!(pointer_at(a, b, 1, 3), Pointer::new(45.0, 100.0));
        assert_eq!(pointer_at(a, b, 2, 3), b);
        assert_eq!(pointer_at(a, b, 0, 1), a);
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0), "pattern-frame-000.svg");
        assert_eq!(frame_file_name(42), "pattern-frame-042.svg");
    }

    #[test]
    fn test_run_render_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        image::RgbaImage::from_pixel(20, 10, image::Rgba([30, 30, 30, 255]))
            .save(&input)
            .unwrap();

        let out = dir.path().join("out");
        let args = render(&[
            "halftone",
            "render",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);
        let written = run_render(&args, &Config::default()).unwrap();
        assert_eq!(
            written,
            vec![out.join("halftone-image.png"), out.join("halftone-image.svg")]
        );
        // Canvas fitted to 800x600: 20x10 scales by 40 to 800x400
        let png = image::open(&written[0]).unwrap();
        assert_eq!((png.width(), png.height()), (800, 400));
    }

    #[test]
    fn test_run_render_rejects_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, "not an image").unwrap();
        let out = dir.path().join("out");

        let args = render(&[
            "halftone",
            "render",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);
        let err = run_render(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, HalftoneError::InvalidInput { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_render_rejects_oversized_config_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([0, 0, 0, 255]))
            .save(&input)
            .unwrap();
        let out = dir.path().join("out");
        let args = render(&[
            "halftone",
            "render",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);

        for canvas in [
            "[canvas]\nmax_width = 100000\nmax_height = 100000\n",
            "[canvas]\nmax_width = 0\n",
        ] {
            let cfg = Config::parse(canvas, Path::new("t.toml")).unwrap();
            let err = run_render(&args, &cfg).unwrap_err();
            assert!(matches!(err, HalftoneError::InvalidParameter { .. }));
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_run_pattern_rejects_overflowing_gap() {
        let dir = tempfile::tempdir().unwrap();
        let args = pattern(&[
            "halftone",
            "pattern",
            "--vertical-gap",
            "4294967285",
            "-o",
            dir.path().to_str().unwrap(),
        ]);
        let err = run_pattern(&args, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            HalftoneError::InvalidParameter {
                field: "vertical-gap",
                ..
            }
        ));
    }

    #[test]
    fn test_run_pattern_writes_frames() {
        let dir = tempfile::tempdir().unwrap();
        let args = pattern(&[
            "halftone",
            "pattern",
            "--viewport",
            "200x150",
            "--frames",
            "3",
            "-o",
            dir.path().to_str().unwrap(),
        ]);
        let written = run_pattern(&args, &Config::default()).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written[2].ends_with("pattern-frame-002.svg"));
        let svg = std::fs::read_to_string(&written[0]).unwrap();
        assert!(svg.starts_with(r#"<svg width="200" height="150" viewBox="0 0 200 150""#));
    }
}
