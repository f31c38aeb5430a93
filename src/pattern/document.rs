//! Serialize a pattern frame as a standalone SVG document.

use std::fmt::Write;

use super::animate::PatternAnimator;
use super::layout::PatternRect;
use crate::color::Color;
use crate::halftone::SVG_NAMESPACE;

/// CSS class carried by every pattern rectangle.
pub const RECT_CLASS: &str = "pattern-rect";

/// Easing applied by the presentation layer between frames.
pub const TRANSITION_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Colors of the decorative pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternStyle {
    /// Rectangle fill
    pub primary: Color,
    /// Rectangle fill while hovered
    pub secondary: Color,
    pub background: Color,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x2e, 0x4b, 0x9c),
            secondary: Color::rgb(0x1e, 0x3a, 0x8a),
            background: Color::rgb(0x0f, 0x17, 0x2a),
        }
    }
}

/// Current animator frame as SVG.
pub fn pattern_document(animator: &PatternAnimator, style: &PatternStyle) -> String {
    let viewport = animator.viewport();
    let rects = animator.rects();
    let speed = animator.animation().animation_speed;

    let mut svg = String::with_capacity(512 + rects.len() * 140);
    let _ = write!(
        svg,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{ns}" style="background:{bg}">"#,
        w = viewport.width,
        h = viewport.height,
        ns = SVG_NAMESPACE,
        bg = style.background,
    );
    let _ = write!(
        svg,
        "<defs><style>.{class}{{fill:{fill};transition:all {speed}s {easing};}}.{class}:hover{{fill:{hover};}}</style></defs>",
        class = RECT_CLASS,
        fill = style.primary,
        speed = speed,
        easing = TRANSITION_EASING,
        hover = style.secondary,
    );
    for rect in rects {
        write_rect(&mut svg, rect);
    }
    svg.push_str("</svg>");
    svg
}

fn write_rect(svg: &mut String, rect: &PatternRect) {
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" class="{}" data-original-height="{}" data-original-y="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        RECT_CLASS,
        rect.baseline_height,
        rect.baseline_y
    );
}
