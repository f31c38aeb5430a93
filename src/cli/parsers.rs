//! Value parsers for command-line flags.

use halftone::color::Color;
use halftone::halftone::MIN_TALL_RATIO;
use halftone::loader::MAX_CANVAS_SIDE;
use halftone::pattern::Pointer;

/// Parse a strictly positive number (contrast, density, falloff).
pub fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Value must be greater than 0, got {}", value));
    }
    Ok(value)
}

/// Parse a number that may be zero but not negative (sensitivity, speed).
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Value must be 0 or greater, got {}", value));
    }
    Ok(value)
}

/// Parse and validate the short-column ratio (>= 0.1)
pub fn parse_tall_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !ratio.is_finite() || ratio < MIN_TALL_RATIO {
        return Err(format!(
            "Tall ratio must be at least {}, got {}",
            MIN_TALL_RATIO, ratio
        ));
    }
    Ok(ratio)
}

/// Parse and validate brightness (-255 to 255)
pub fn parse_brightness(s: &str) -> Result<i32, String> {
    let value: i32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;
    if !(-255..=255).contains(&value) {
        return Err(format!(
            "Brightness must be between -255 and 255, got {}",
            value
        ));
    }
    Ok(value)
}

/// Parse a `#rrggbb` / `#rgb` color
pub fn parse_color(s: &str) -> Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

/// Parse and validate a size (WIDTHxHEIGHT format)
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid size format '{}'. Use WIDTHxHEIGHT (e.g., 800x600)",
            s
        ));
    }
    let width: u32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid width '{}' in size", parts[0]))?;
    let height: u32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid height '{}' in size", parts[1]))?;
    if width == 0 || height == 0 {
        return Err("Size width and height must be greater than 0".to_string());
    }
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(format!(
            "Size exceeds maximum supported ({0}x{0})",
            MAX_CANVAS_SIDE
        ));
    }
    Ok((width, height))
}

/// Parse a pointer position (X,Y format)
pub fn parse_pointer(s: &str) -> Result<Pointer, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid pointer '{}'. Use X,Y (e.g., 400,300)", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("Invalid x '{}' in pointer", x))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("Invalid y '{}' in pointer", y))?;
    if !x.is_finite() || !y.is_finite() {
        return Err("Pointer coordinates must be finite".to_string());
    }
    Ok(Pointer::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("1.5"), Ok(1.5));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-2").is_err());
        assert!(parse_positive("abc").is_err());
        assert!(parse_positive("inf").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-0.1").is_err());
    }

    #[test]
    fn test_parse_tall_ratio() {
        assert_eq!(parse_tall_ratio("0.1"), Ok(0.1));
        assert_eq!(parse_tall_ratio("3"), Ok(3.0));
        assert!(parse_tall_ratio("0.09").is_err());
    }

    #[test]
    fn test_parse_brightness() {
        assert_eq!(parse_brightness("-40"), Ok(-40));
        assert!(parse_brightness("300").is_err());
        assert!(parse_brightness("1.5").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000"), Ok(Color::rgb(255, 128, 0)));
        assert!(parse_color("orange").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("20000x10").is_err());
    }

    #[test]
    fn test_parse_pointer() {
        assert_eq!(parse_pointer("400,300"), Ok(Pointer::new(400.0, 300.0)));
        assert_eq!(parse_pointer("-5.5, 2"), Ok(Pointer::new(-5.5, 2.0)));
        assert!(parse_pointer("400").is_err());
        assert!(parse_pointer("a,b").is_err());
    }
}
