//! Configuration types for owlgraph diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out, styled and rendered. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining the sections below.
//! - [`LayoutConfig`] - Controls the layout [`Direction`].
//! - [`StyleConfig`] - Controls fonts, node shapes and colors.
//! - [`RendererConfig`] - Selects the renderer executable and [`OutputFormat`].
//!
//! # Example
//!
//! ```
//! # use owlgraph::config::{AppConfig, Direction, OutputFormat};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().direction(), Direction::TopToBottom);
//! assert_eq!(config.renderer().format(), OutputFormat::Svg);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use owlgraph_core::color::Color;

/// Top-level application configuration.
///
/// Groups [`LayoutConfig`], [`StyleConfig`] and [`RendererConfig`] into a
/// single configuration root. Every section is optional in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Renderer configuration section.
    #[serde(default)]
    renderer: RendererConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Layout settings.
    /// * `style` - Visual styling options.
    /// * `renderer` - External renderer settings.
    pub fn new(layout: LayoutConfig, style: StyleConfig, renderer: RendererConfig) -> Self {
        Self {
            layout,
            style,
            renderer,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the renderer configuration.
    pub fn renderer(&self) -> &RendererConfig {
        &self.renderer
    }

    /// Returns a mutable reference to the layout configuration.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns a mutable reference to the renderer configuration.
    pub fn renderer_mut(&mut self) -> &mut RendererConfig {
        &mut self.renderer
    }
}

/// Direction in which the layout renderer ranks nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl Direction {
    /// Returns the renderer's `rankdir` value for this direction.
    pub fn rankdir(self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::LeftToRight => "LR",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top-to-bottom" | "tb" => Ok(Self::TopToBottom),
            "left-to-right" | "lr" => Ok(Self::LeftToRight),
            _ => Err(format!(
                "unknown direction `{s}`, expected `top-to-bottom` or `left-to-right`"
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopToBottom => f.write_str("top-to-bottom"),
            Self::LeftToRight => f.write_str("left-to-right"),
        }
    }
}

/// Layout configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Ranking [`Direction`] of the diagram.
    #[serde(default)]
    direction: Direction,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the layout [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Overrides the layout [`Direction`].
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

/// Family name under which the bundled symbol font is embedded.
pub const SYMBOL_FONT_FAMILY: &str = "DejaVu Sans Mono";

/// Visual styling configuration for rendered diagrams.
///
/// Fonts and shapes are passed through to the layout renderer verbatim.
/// Colors are accepted in any CSS syntax and validated on access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font family of the document and of edge labels.
    font_family: String,

    /// Font size of the document and of edge labels, in points.
    font_size: f32,

    /// Font family of node labels.
    node_font_family: String,

    /// Font size of node labels, in points.
    node_font_size: f32,

    /// Shape of named-entity nodes, such as `box` or `ellipse`.
    node_shape: String,

    /// Style of named-entity nodes, such as `rounded` or `filled`.
    node_style: String,

    /// Margin around node labels, in inches.
    node_margin: String,

    /// Background color, as a color string.
    background_color: String,

    /// Foreground color of nodes, edges and text, as a color string.
    foreground_color: String,

    /// Whether entities are named by their `rdfs:label` annotation.
    use_labels: bool,

    /// Preferred language tag when picking among several labels.
    label_language: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: SYMBOL_FONT_FAMILY.to_string(),
            font_size: 10.0,
            node_font_family: SYMBOL_FONT_FAMILY.to_string(),
            node_font_size: 10.0,
            node_shape: "box".to_string(),
            node_style: "rounded".to_string(),
            node_margin: "0.1,0.05".to_string(),
            background_color: "white".to_string(),
            foreground_color: "black".to_string(),
            use_labels: true,
            label_language: None,
        }
    }
}

impl StyleConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn node_font_family(&self) -> &str {
        &self.node_font_family
    }

    pub fn node_font_size(&self) -> f32 {
        self.node_font_size
    }

    pub fn node_shape(&self) -> &str {
        &self.node_shape
    }

    pub fn node_style(&self) -> &str {
        &self.node_style
    }

    pub fn node_margin(&self) -> &str {
        &self.node_margin
    }

    /// Returns `true` if entities are named by their labels rather than IRI fragments.
    pub fn use_labels(&self) -> bool {
        self.use_labels
    }

    pub fn label_language(&self) -> Option<&str> {
        self.label_language.as_deref()
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed foreground [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn foreground_color(&self) -> Result<Color, String> {
        Color::new(&self.foreground_color)
            .map_err(|err| format!("Invalid foreground color in config: {err}"))
    }
}

/// Image format requested from the layout renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// Returns the renderer's `-T` value for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(format!("unknown output format `{s}`, expected `svg` or `png`")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External layout renderer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Path or name of the renderer executable.
    program: String,

    /// Requested [`OutputFormat`].
    format: OutputFormat,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl RendererConfig {
    /// Creates a new [`RendererConfig`].
    pub fn new(program: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            program: program.into(),
            format,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Overrides the [`OutputFormat`].
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parsing() {
        assert_eq!("LR".parse::<Direction>(), Ok(Direction::LeftToRight));
        assert_eq!(
            "top-to-bottom".parse::<Direction>(),
            Ok(Direction::TopToBottom)
        );
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::LeftToRight.rankdir(), "LR");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("PNG".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!(OutputFormat::Svg.to_string(), "svg");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_invalid_colors_are_reported() {
        let style = StyleConfig {
            background_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.background_color().unwrap_err();
        assert!(err.contains("background"));
        assert!(style.foreground_color().is_ok());
    }

    #[test]
    fn test_default_renderer() {
        let renderer = RendererConfig::default();
        assert_eq!(renderer.program(), "dot");
        assert_eq!(renderer.format(), OutputFormat::Svg);
    }
}
