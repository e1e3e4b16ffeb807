//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)] // Field names are self-describing color roles
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // States
    pub selected: Color,
    pub hover: Color,
    pub unread: Color,
    pub danger: Color,
    pub success: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Light theme: the console's classic white-on-red branding.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.70, 0.0, 0.0),
            primary_dark: Color::from_rgb(0.55, 0.0, 0.0),

            surface: Color::WHITE,
            background: Color::from_rgb(0.97, 0.97, 0.97),

            text_primary: Color::from_rgb(0.10, 0.11, 0.13),
            text_secondary: Color::from_rgb(0.42, 0.45, 0.50),
            text_muted: Color::from_rgb(0.60, 0.63, 0.67),
            text_on_primary: Color::WHITE,

            selected: Color::from_rgb(0.99, 0.93, 0.93),
            hover: Color::from_rgb(0.975, 0.96, 0.96),
            unread: Color::from_rgb(0.70, 0.0, 0.0),
            danger: Color::from_rgb(0.82, 0.14, 0.18),
            success: Color::from_rgb(0.13, 0.55, 0.30),

            border_subtle: Color::from_rgb(0.91, 0.91, 0.92),
            border_medium: Color::from_rgb(0.80, 0.80, 0.82),
        }
    }

    /// Dark theme counterpart.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.85, 0.25, 0.25),
            primary_dark: Color::from_rgb(0.70, 0.15, 0.15),

            surface: Color::from_rgb(0.12, 0.12, 0.14),
            background: Color::from_rgb(0.09, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.92, 0.94),
            text_secondary: Color::from_rgb(0.65, 0.66, 0.70),
            text_muted: Color::from_rgb(0.48, 0.49, 0.53),
            text_on_primary: Color::WHITE,

            selected: Color::from_rgb(0.22, 0.13, 0.13),
            hover: Color::from_rgb(0.16, 0.14, 0.14),
            unread: Color::from_rgb(0.95, 0.45, 0.45),
            danger: Color::from_rgb(0.95, 0.40, 0.42),
            success: Color::from_rgb(0.35, 0.75, 0.50),

            border_subtle: Color::from_rgb(0.20, 0.20, 0.22),
            border_medium: Color::from_rgb(0.30, 0.30, 0.33),
        }
    }

    /// Palette for the given mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
