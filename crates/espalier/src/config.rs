//! Configuration types for Espalier layout runs.
//!
//! This module provides configuration structures that control how trees are
//! laid out and rendered. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and render settings.
//! - [`LayoutConfig`] - Controls which [`Strategy`] assigns the coordinates.
//! - [`RenderConfig`] - Controls the textual grid output.
//!
//! # Example
//!
//! ```
//! # use espalier::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().placeholder(), '.');
//! ```

use serde::Deserialize;

use espalier_core::strategy::Strategy;

/// Top-level application configuration combining layout and render settings.
///
/// Groups [`LayoutConfig`] and [`RenderConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and render configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Strategy settings for coordinate assignment.
    /// * `render` - Textual grid output options.
    pub fn new(layout: LayoutConfig, render: RenderConfig) -> Self {
        Self { layout, render }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Strategy configuration for coordinate assignment.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Default [`Strategy`] for coordinate assignment.
    #[serde(default)]
    strategy: Strategy,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured [`Strategy`].
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Output configuration for the textual grid.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Placeholder token shown in unoccupied grid cells.
    #[serde(default = "default_placeholder")]
    placeholder: char,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified placeholder.
    pub fn new(placeholder: char) -> Self {
        Self { placeholder }
    }

    /// Returns the placeholder token for unoccupied cells.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> char {
    '.'
}
