use ratatui::style::Color;
use shopcat_types::Theme;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub price: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::Rgb(247, 247, 248),
                fg: Color::Rgb(27, 27, 31),
                muted: Color::Rgb(107, 107, 118),
                accent: Color::Rgb(214, 51, 108),
                price: Color::Rgb(23, 122, 62),
                border: Color::Rgb(200, 200, 208),
                highlight_bg: Color::Rgb(228, 228, 236),
                error: Color::Rgb(190, 30, 45),
            },
            Theme::Dark => Self {
                bg: Color::Rgb(20, 20, 23),
                fg: Color::Rgb(236, 236, 241),
                muted: Color::Rgb(154, 154, 166),
                accent: Color::Rgb(255, 107, 154),
                price: Color::Rgb(105, 219, 124),
                border: Color::Rgb(60, 60, 70),
                highlight_bg: Color::Rgb(45, 45, 54),
                error: Color::Rgb(255, 120, 120),
            },
        }
    }
}
