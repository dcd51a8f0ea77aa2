use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Fixed application theme; there is no appearance setting to persist.
pub fn app_theme() -> Theme {
    Theme::custom("Face Box Viewer", palette())
}

fn palette() -> Palette {
    Palette {
        background: color!(0x1b, 0x1d, 0x21),
        text: color!(0xd4, 0xd4, 0xd4),
        primary: color!(0x4f, 0x8f, 0xe8),
        success: color!(0x37, 0xc6, 0x5f),
        warning: color!(0xf5, 0xc1, 0x2e),
        danger: color!(0xe8, 0x4a, 0x3f),
    }
}

/// De-emphasized text color for placeholders and hints.
pub fn tertiary_color(theme: &Theme) -> Color {
    let palette = theme.extended_palette();
    Color {
        a: 0.55,
        ..palette.background.base.text
    }
}
