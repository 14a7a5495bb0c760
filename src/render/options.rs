use clap::ValueEnum;

/// A rendering format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum RenderFormat {
    /// HTML markup.
    #[default]
    Html,
    /// JSON.
    Json,
}

/// Rendering options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    format: RenderFormat,
    newline: bool,
}

impl RenderOptions {
    /// Creates a new `RenderOptions` instance.
    pub const fn new(format: RenderFormat, newline: bool) -> Self {
        Self { format, newline }
    }

    /// Returns the rendering format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Returns whether a trailing newline is written.
    pub const fn newline(&self) -> bool {
        self.newline
    }

    /// Sets a rendering format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether a trailing newline is written.
    pub const fn set_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }
}
