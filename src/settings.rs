use std::path::Path;

use crate::style::Color;

pub const BACKGROUND_VAR: &str = "ROLL_BACKGROUND";
const DEFAULT_NAME: &str = "roll";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Settings {
    /// Name shown in the usage text
    pub program_name: String,
    pub background: Color,
}

impl Settings {
    /// Build settings from how the program was invoked and the value of
    /// `ROLL_BACKGROUND`, if any. Unknown colors fall back to the default.
    pub fn new(invoked_as: Option<&str>, background: Option<&str>) -> Self {
        let program_name = invoked_as
            .and_then(|path| Path::new(path).file_name())
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let background = match background.map(str::parse::<Color>) {
            Some(Ok(color)) => color,
            Some(Err(e)) => {
                log::warn!("{e}, keeping the default background");
                Color::default()
            }
            None => Color::default(),
        };
        Settings {
            program_name,
            background,
        }
    }

    pub fn from_env() -> Self {
        let invoked_as = std::env::args().next();
        let background = std::env::var(BACKGROUND_VAR).ok();
        Self::new(invoked_as.as_deref(), background.as_deref())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            program_name: DEFAULT_NAME.to_string(),
            background: Color::default(),
        }
    }
}
