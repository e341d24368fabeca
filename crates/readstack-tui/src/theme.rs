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
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,

    // Semantic colors
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub accent: Color,

    /// Dark scheme flag, forwarded into the header layout
    pub dark: bool,
}

impl Theme {
    /// Blend `fg` toward `bg` by opacity in [0, 1].
    ///
    /// The terminal has no alpha channel, so every opacity the header derives
    /// becomes a color blend. Out-of-range opacities (the welcome text may
    /// overshoot) are clamped here at the very edge of rendering.
    pub fn fade(&self, fg: Color, bg: Color, opacity: f64) -> Color {
        let t = opacity.clamp(0.0, 1.0);
        match (to_rgb(fg), to_rgb(bg)) {
            (Some((fr, fg_, fb)), Some((br, bg_, bb))) => Color::Rgb(
                blend(br, fr, t),
                blend(bg_, fg_, t),
                blend(bb, fb, t),
            ),
            _ => {
                if t < 0.5 {
                    bg
                } else {
                    fg
                }
            }
        }
    }
}

fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[inline]
fn blend(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(40, 40, 40);
        assert_eq!(theme.fade(fg, bg, 1.0), fg);
        assert_eq!(theme.fade(fg, bg, 0.0), bg);
    }

    #[test]
    fn test_fade_clamps_overshoot() {
        let theme = Theme::default();
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(40, 40, 40);
        assert_eq!(theme.fade(fg, bg, 1.8), fg);
        assert_eq!(theme.fade(fg, bg, -0.4), bg);
    }

    #[test]
    fn test_fade_midpoint() {
        let theme = Theme::default();
        let mid = theme.fade(Color::Rgb(100, 100, 100), Color::Rgb(0, 0, 0), 0.5);
        assert_eq!(mid, Color::Rgb(50, 50, 50));
    }
}
