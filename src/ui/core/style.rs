/// Cell colours. `Default` leaves the terminal's own colour in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Swaps foreground and background for an active/selected look.
    ///
    /// A `Default` colour has no concrete value to swap in, so the result
    /// falls back to white text (for a default background) and a black
    /// background (for a default foreground).
    pub fn highlighted(self) -> Self {
        let fg = match self.bg {
            Color::Default => Color::White,
            bg => bg,
        };
        let bg = match self.fg {
            Color::Default => Color::Black,
            fg => fg,
        };
        Self { fg, bg }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
