//! Configuration API for segment processing

use crate::config::defaults;
use crate::error::Result;
use crate::markup::MarkupSyntax;
use crate::window::ContextWindow;

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) context_window: ContextWindow,
    pub(crate) syntax: MarkupSyntax,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_window: ContextWindow::new(defaults::CONTEXT_CHARS),
            syntax: MarkupSyntax::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Context window used for the condensed view
    pub fn context_window(&self) -> ContextWindow {
        self.context_window
    }

    /// Marker token syntax
    pub fn syntax(&self) -> &MarkupSyntax {
        &self.syntax
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    context_chars: Option<i64>,
    context_window: Option<ContextWindow>,
    syntax: Option<MarkupSyntax>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context window from a signed count; negative values fail in `build`
    pub fn context_chars(mut self, chars: i64) -> Self {
        self.context_chars = Some(chars);
        self.context_window = None;
        self
    }

    /// Set the context window
    pub fn context_window(mut self, window: ContextWindow) -> Self {
        self.context_window = Some(window);
        self.context_chars = None;
        self
    }

    /// Set the marker token syntax
    pub fn syntax(mut self, syntax: MarkupSyntax) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(chars) = self.context_chars {
            config.context_window = ContextWindow::try_from(chars)?;
        }
        if let Some(window) = self.context_window {
            config.context_window = window;
        }
        if let Some(syntax) = self.syntax {
            syntax.validate()?;
            config.syntax = syntax;
        }

        Ok(config)
    }
}
