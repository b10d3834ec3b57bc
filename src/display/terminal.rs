use console;

/// Terminal control and ANSI color handling
pub struct Terminal {
    pub supports_color: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            supports_color: console::colors_enabled(),
        }
    }

    /// Get the style applied to the greeting line
    pub fn greeting_style(&self) -> console::Style {
        let mut style = console::Style::new();
        if !self.supports_color {
            return style;
        }

        style = style.green().bold();
        style
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
