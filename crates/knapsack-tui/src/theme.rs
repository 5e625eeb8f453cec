use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default text color
    pub fg: Color,
    /// Title banner color
    pub title: Color,
    /// Panel border color
    pub border: Color,
    /// Unselected item row color
    pub item: Color,
    /// Selected item highlight
    pub selected: Color,
    /// Hinted item highlight (one optimal combo)
    pub hint: Color,
    /// Capacity/totals text color
    pub info: Color,
    /// Error/overweight message color
    pub error: Color,
    /// Victory message color
    pub success: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            title: Color::Rgb { r: 255, g: 210, b: 100 },
            border: Color::Rgb { r: 110, g: 115, b: 130 },
            item: Color::Rgb { r: 200, g: 200, b: 210 },
            selected: Color::Rgb { r: 90, g: 220, b: 120 },
            hint: Color::Rgb { r: 255, g: 215, b: 0 },
            info: Color::Rgb { r: 150, g: 170, b: 210 },
            error: Color::Rgb { r: 255, g: 95, b: 95 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            key: Color::Rgb { r: 160, g: 200, b: 255 },
        }
    }

    /// Light theme for pale terminals
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            title: Color::Rgb { r: 170, g: 110, b: 0 },
            border: Color::Rgb { r: 120, g: 120, b: 130 },
            item: Color::Rgb { r: 50, g: 50, b: 60 },
            selected: Color::Rgb { r: 0, g: 140, b: 60 },
            hint: Color::Rgb { r: 190, g: 140, b: 0 },
            info: Color::Rgb { r: 60, g: 90, b: 150 },
            error: Color::Rgb { r: 190, g: 30, b: 30 },
            success: Color::Rgb { r: 0, g: 150, b: 60 },
            key: Color::Rgb { r: 50, g: 100, b: 180 },
        }
    }

    /// Look a theme up by CLI name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}
