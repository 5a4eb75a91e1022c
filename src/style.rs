use std::str::FromStr;

/// Terminal palette available for die backgrounds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    #[default]
    Cyan,
    White,
    Default,
    LightBlack,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

impl Color {
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
        Color::LightBlack,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::LightWhite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
            Color::LightBlack => "light-black",
            Color::LightRed => "light-red",
            Color::LightGreen => "light-green",
            Color::LightYellow => "light-yellow",
            Color::LightBlue => "light-blue",
            Color::LightMagenta => "light-magenta",
            Color::LightCyan => "light-cyan",
            Color::LightWhite => "light-white",
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accept light_blue, LightBlue and "light blue" alongside light-blue
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Color::ALL
            .into_iter()
            .find(|color| color.name().replace('-', "") == normalized)
            .ok_or_else(|| format!("Unknown color '{s}'"))
    }
}

/// How a line should be presented. Only the console decides what that means
/// in terms of streams and escape codes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Style {
    #[default]
    Plain,
    Error,
    Colored(Color),
}
