//! Inline style extraction.
//!
//! Reads the element's `style` attribute only; cascaded and external
//! stylesheets are intentionally out of scope for the importer.
//!
//! Rules:
//! - recognized properties: color, background-color, font-size,
//!   font-weight, font-family, text-align, padding (+ longhands)
//! - numeric values are pixel integers; unparseable text is omitted
//!   (font-size) or treated as 0 (padding sides)
//! - a padding record is attached only when at least one side is
//!   non-zero
//! - malformed declaration text never fails, it is skipped

use embridge_core::model::{Padding, Style};

/// Extract presentational style from an element's `style` attribute.
pub fn extract_style(style_attr: Option<&str>) -> Style {
    let mut style = Style::default();
    let Some(text) = style_attr else {
        return style;
    };

    // [top, bottom, left, right]
    let mut sides = [0u32; 4];

    for decl in text.split(';') {
        let Some((prop, value)) = decl.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match prop.as_str() {
            "color" => style.color = Some(value.to_string()),
            "background-color" => style.background_color = Some(value.to_string()),
            "font-size" => style.font_size = parse_px(value),
            "font-weight" => style.font_weight = Some(value.to_string()),
            "font-family" => style.font_family = Some(value.to_string()),
            "text-align" => style.text_align = Some(value.to_string()),
            // Shorthand first, longhands override in source order, the
            // same result a browser's `element.style` readback gives.
            "padding" => apply_padding_shorthand(value, &mut sides),
            "padding-top" => sides[0] = parse_px(value).unwrap_or(0),
            "padding-bottom" => sides[1] = parse_px(value).unwrap_or(0),
            "padding-left" => sides[2] = parse_px(value).unwrap_or(0),
            "padding-right" => sides[3] = parse_px(value).unwrap_or(0),
            _ => {}
        }
    }

    let padding = Padding {
        top: sides[0],
        bottom: sides[1],
        left: sides[2],
        right: sides[3],
    };
    if !padding.is_zero() {
        style.padding = Some(padding);
    }

    style
}

/// Expand the 1–4 value `padding` shorthand into per-side values.
fn apply_padding_shorthand(value: &str, sides: &mut [u32; 4]) {
    let vals: Vec<u32> = value
        .split_whitespace()
        .map(|v| parse_px(v).unwrap_or(0))
        .collect();

    let (top, right, bottom, left) = match vals.as_slice() {
        [all] => (*all, *all, *all, *all),
        [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
        [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
        [top, right, bottom, left] => (*top, *right, *bottom, *left),
        _ => return,
    };

    *sides = [top, bottom, left, right];
}

/// Leading-integer parse of a pixel length ("16px" → 16).
///
/// Anything without leading digits (negative, keyword, percentage with
/// no integer part) yields `None`.
fn parse_px(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
