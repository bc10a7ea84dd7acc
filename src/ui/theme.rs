//! Theme system for the rating grid
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const HEADER: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const HEADER: Color = color!(0xf5f5f5);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get header/footer bar color based on theme
pub fn header_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::HEADER
    } else {
        light::HEADER
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

/// Neon pink accent color (same for both modes)
pub const ACCENT_PINK: Color = color!(0xff1493);

/// Hover state for accent
pub const ACCENT_PINK_HOVER: Color = color!(0xff69b4);

/// Filled star color
pub const STAR_GOLD: Color = color!(0xffc107);

/// Hovered star color
pub const STAR_GOLD_HOVER: Color = color!(0xffd54f);

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Header and footer bars
pub fn bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(header_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: divider(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rating card
pub fn card(theme: &Theme, submitted: bool) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: if submitted {
                success(theme)
            } else {
                border_color(theme)
            },
        },
        ..Default::default()
    }
}

/// Loading placeholder card
pub fn placeholder_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(placeholder_bg(theme))),
        text_color: Some(text_muted(theme)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dialog box
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT_PINK)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_PINK_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.25))),
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Danger button (red for destructive actions)
pub fn danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(danger(theme))),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(danger_hover(theme))),
            ..base
        },
        _ => base,
    }
}

/// Star button; `filled` picks the glyph color
pub fn star_button(theme: &Theme, status: button::Status, filled: bool) -> button::Style {
    let color = match (filled, status) {
        (true, button::Status::Hovered) => STAR_GOLD_HOVER,
        (true, _) => STAR_GOLD,
        (false, button::Status::Hovered) => STAR_GOLD_HOVER,
        (false, button::Status::Disabled) => TEXT_DISABLED,
        (false, _) => text_muted(theme),
    };
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Text-only button (no background until hovered)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Theme-aware color helpers for components
// ============================================================================

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Surface elevated color (for cards, popups)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.12, 0.12, 0.14)
    } else {
        Color::from_rgb(0.96, 0.96, 0.98)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Danger hover color
pub fn danger_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(1.0, 0.4, 0.4)
    } else {
        Color::from_rgb(0.9, 0.3, 0.3)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.7)
    }
}

/// Placeholder background (for rows still loading)
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.18, 0.18, 0.18)
    } else {
        Color::from_rgb(0.9, 0.9, 0.9)
    }
}
