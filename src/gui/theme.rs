use crate::style::Paint;
use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub primary: Srgba<f64>,
    pub secondary: Srgba<f64>,
    pub material: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ThemeColors {
    /// Colors used when no style context is available, e.g. offscreen rendering.
    pub fn fallback() -> Self {
        Self {
            primary: Srgba::new(0.1, 0.1, 0.1, 1.0),
            secondary: Srgba::new(0.45, 0.45, 0.47, 1.0),
            material: Srgba::new(0.96, 0.96, 0.96, 1.0),
        }
    }

    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::fallback();
        Self {
            primary: Self::lookup_color(context, "theme_fg_color", fallback.primary),
            secondary: Self::lookup_color(context, "insensitive_fg_color", fallback.secondary),
            material: Self::lookup_color(context, "theme_bg_color", fallback.material),
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}

impl Paint {
    pub fn resolve(&self, colors: &ThemeColors) -> Srgba<f64> {
        let with_opacity = |c: Srgba<f64>, opacity: f64| {
            Srgba::new(c.red, c.green, c.blue, c.alpha * opacity)
        };
        match *self {
            Self::Rgba(c) => c,
            Self::Primary(o) => with_opacity(colors.primary, o),
            Self::Secondary(o) => with_opacity(colors.secondary, o),
            Self::Material(o) => with_opacity(colors.material, o),
            Self::Clear => Srgba::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.dotpage-indicator {
    background: none;
    background-color: transparent;
}
.dotpage-page-label {
    font-size: 2em;
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_opacity_to_theme_colors() {
        let colors = ThemeColors::fallback();
        let active = Paint::Primary(0.4).resolve(&colors);
        assert_eq!(active.color, colors.primary.color);
        assert!((active.alpha - 0.4).abs() < 1e-9);

        assert_eq!(Paint::Clear.resolve(&colors).alpha, 0.0);
        assert_eq!(
            Paint::white(0.3).resolve(&colors),
            Srgba::new(1.0, 1.0, 1.0, 0.3)
        );
    }
}
