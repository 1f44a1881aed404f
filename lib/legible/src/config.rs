//! Handler configuration types.

/// Configuration for [`crate::ErrorHandler`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Return and log the full record instead of the reduced one.
    pub debug: bool,
    /// Free-text tag appended to every log header line.
    pub info: Option<String>,
}

impl HandlerConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> HandlerConfigBuilder {
        HandlerConfigBuilder::default()
    }
}

/// Builder for [`HandlerConfig`].
#[derive(Debug, Clone, Default)]
pub struct HandlerConfigBuilder {
    debug: Option<bool>,
    info: Option<String>,
}

impl HandlerConfigBuilder {
    /// Set debug mode.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the log tag.
    #[must_use]
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> HandlerConfig {
        let defaults = HandlerConfig::default();
        HandlerConfig {
            debug: self.debug.unwrap_or(defaults.debug),
            info: self.info.or(defaults.info),
        }
    }
}
