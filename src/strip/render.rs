//! Render derivation and scoped markup output.

use super::color::Rgb;
use super::size::{Dimensions, SizePreset};
use super::token::parse_tokens;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

/// Raw attribute values currently set on the host element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub data: Option<String>,
    pub size: Option<String>,
}

impl Attributes {
    pub fn new(data: Option<&str>, size: Option<&str>) -> Self {
        Self {
            data: data.map(str::to_string),
            size: size.map(str::to_string),
        }
    }
}

/// Everything needed to draw one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDescriptor {
    /// Normalized (lower-cased) state.
    pub state: String,
    pub tooltip: String,
    /// Resolved display color.
    pub color: Rgb,
    /// Color applied inline; set only for states without a static rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_color: Option<Rgb>,
}

/// A fully resolved strip, derived from [`Attributes`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripRender {
    pub size: SizePreset,
    pub dimensions: Dimensions,
    pub blocks: Vec<BlockDescriptor>,
}

/// States that get a static `[data-state]` color rule.
const STATE_RULES: [(&str, Rgb); 3] = [
    ("ok", Rgb::OK),
    ("warning", Rgb::WARNING),
    ("error", Rgb::ERROR),
];

impl StripRender {
    /// Derive the render from raw attributes. Never fails: a missing `data`
    /// is an empty sequence and an unknown `size` is `medium`.
    pub fn derive(attributes: &Attributes) -> Self {
        let size = SizePreset::resolve(attributes.size.as_deref());
        let blocks = parse_tokens(attributes.data.as_deref().unwrap_or(""))
            .into_iter()
            .map(|token| {
                let color = token.state.color();
                BlockDescriptor {
                    tooltip: token.tooltip(),
                    inline_color: (!token.state.is_known()).then_some(color),
                    state: token.state.as_str().to_string(),
                    color,
                }
            })
            .collect();

        Self {
            size,
            dimensions: size.dimensions(),
            blocks,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The scoped stylesheet, parameterized by the active preset.
    pub fn style(&self) -> String {
        let Dimensions { width, height, gap } = self.dimensions;
        let state_rules: String = STATE_RULES
            .iter()
            .map(|(state, color)| {
                format!(".heat-block[data-state=\"{state}\"] {{\n    background-color: {color};\n}}\n")
            })
            .collect();

        format!(
            ":host {{\n    display: inline-block;\n}}\n\
             .heat-strip-container {{\n    display: flex;\n    gap: {gap}px;\n    padding: 4px;\n    background: transparent;\n    border-radius: 4px;\n}}\n\
             .heat-block {{\n    width: {width}px;\n    height: {height}px;\n    border-radius: 2px;\n    transition: transform 0.2s ease, box-shadow 0.2s ease;\n    cursor: pointer;\n}}\n\
             .heat-block:hover {{\n    transform: translateY(-2px);\n    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);\n}}\n\
             {state_rules}"
        )
    }

    /// Complete markup for the isolated subtree: style block, then the row.
    pub fn to_markup(&self) -> Markup {
        html! {
            style { (PreEscaped(self.style())) }
            div class="heat-strip-container" {
                @for block in &self.blocks {
                    div class="heat-block"
                        data-state=(block.state)
                        title=(block.tooltip)
                        style=[block.inline_color.map(|color| format!("background-color: {color};"))] {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_large() {
        let render = StripRender::derive(&Attributes::new(
            Some("ok,warning,error,unknown"),
            Some("large"),
        ));

        assert_eq!(render.len(), 4);
        assert_eq!(render.dimensions, Dimensions { width: 16, height: 40, gap: 4 });

        let colors: Vec<Rgb> = render.blocks.iter().map(|b| b.color).collect();
        assert_eq!(colors, vec![Rgb::OK, Rgb::WARNING, Rgb::ERROR, Rgb::FALLBACK]);

        let tooltips: Vec<&str> = render.blocks.iter().map(|b| b.tooltip.as_str()).collect();
        assert_eq!(tooltips, vec!["ok (1)", "warning (2)", "error (3)", "unknown (4)"]);
    }

    #[test]
    fn test_missing_attributes_use_defaults() {
        let render = StripRender::derive(&Attributes::default());
        assert!(render.is_empty());
        assert_eq!(render.size, SizePreset::Medium);
        assert_eq!(render.dimensions, SizePreset::Medium.dimensions());
    }

    #[test]
    fn test_inline_color_only_for_unknown_states() {
        let render = StripRender::derive(&Attributes::new(Some("OK, pending"), None));
        assert_eq!(render.blocks[0].state, "ok");
        assert_eq!(render.blocks[0].inline_color, None);
        assert_eq!(render.blocks[1].state, "pending");
        assert_eq!(render.blocks[1].inline_color, Some(Rgb::FALLBACK));
    }

    #[test]
    fn test_markup_structure() {
        let render = StripRender::derive(&Attributes::new(Some("ok,,Error, mystery"), Some("small")));
        let html = render.to_markup().into_string();

        assert_eq!(html.matches("class=\"heat-block\"").count(), 3);
        assert!(html.starts_with("<style>"));
        assert!(html.contains("width: 8px;"));
        assert!(html.contains("height: 20px;"));
        assert!(html.contains("gap: 2px;"));
        assert!(html.contains(".heat-block[data-state=\"error\"] {\n    background-color: #ef4444;"));
        assert!(html.contains("data-state=\"error\" title=\"Error (2)\"></div>"));
        assert!(html.contains(
            "data-state=\"mystery\" title=\"mystery (3)\" style=\"background-color: #94a3b8;\"></div>"
        ));
        assert_eq!(html.matches("style=\"background-color").count(), 1);
    }

    #[test]
    fn test_markup_hover_rule() {
        let css = StripRender::derive(&Attributes::default()).style();
        assert!(css.contains(".heat-block:hover"));
        assert!(css.contains("translateY(-2px)"));
        assert!(css.contains("transition: transform 0.2s ease, box-shadow 0.2s ease;"));
    }

    #[test]
    fn test_markup_escapes_attribute_values() {
        let render = StripRender::derive(&Attributes::new(Some("<b>\"x\"&"), None));
        let html = render.to_markup().into_string();
        assert!(html.contains("title=\"&lt;b&gt;&quot;x&quot;&amp; (1)\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_json_shape() {
        let render = StripRender::derive(&Attributes::new(Some("ok,odd"), Some("small")));
        let value = serde_json::to_value(&render).unwrap();
        assert_eq!(value["size"], "small");
        assert_eq!(value["dimensions"]["width"], 8);
        assert_eq!(value["blocks"][0]["color"], "#22c55e");
        assert!(value["blocks"][0].get("inline_color").is_none());
        assert_eq!(value["blocks"][1]["inline_color"], "#94a3b8");
    }
}
