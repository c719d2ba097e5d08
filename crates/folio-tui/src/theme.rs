use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub red: Color,
    pub red_dim: Color,
    pub red_deep: Color,

    // Semantic colors
    pub accent: Color,
    pub marquee: Color,
    pub track: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Black page with red accents
        Self {
            bg0: Color::Rgb(0x00, 0x00, 0x00),
            bg1: Color::Rgb(0x11, 0x11, 0x11),
            bg2: Color::Rgb(0x1f, 0x1f, 0x1f),
            fg0: Color::Rgb(0xff, 0xff, 0xff),
            fg1: Color::Rgb(0xd1, 0xd5, 0xdb),
            grey0: Color::Rgb(0x6b, 0x72, 0x80),
            grey1: Color::Rgb(0x9c, 0xa3, 0xaf),
            red: Color::Rgb(0xef, 0x44, 0x44),
            red_dim: Color::Rgb(0x7f, 0x1d, 0x1d),
            red_deep: Color::Rgb(0x99, 0x1b, 0x1b),
            accent: Color::Rgb(0xef, 0x44, 0x44),
            marquee: Color::Rgb(0x4c, 0x14, 0x14),
            track: Color::Rgb(0x27, 0x27, 0x2a),
        }
    }
}

impl Theme {
    /// Blend `color` toward the page background by `1 - opacity`
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        match (color, self.bg0) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let mix = |c: u8, base: u8| -> u8 {
                    (base as f64 + (c as f64 - base as f64) * opacity).round() as u8
                };
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ if opacity < 0.5 => self.bg0,
            _ => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.red, 1.0), theme.red);
        assert_eq!(theme.fade(theme.red, 0.0), theme.bg0);
    }

    #[test]
    fn test_fade_midpoint() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Rgb(200, 100, 0), 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_fade_named_color() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Red, 0.2), theme.bg0);
        assert_eq!(theme.fade(Color::Red, 0.8), Color::Red);
    }
}
