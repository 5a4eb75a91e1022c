use crate::console::Console;
use crate::dice::PIPS;
use crate::style::{Color, Style};

pub const FACE_ROWS: usize = 3;
pub const FACE_WIDTH: usize = 5;

/// The drawing of one die: three rows of five columns painted on a
/// background color.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Face {
    pub rows: [&'static str; FACE_ROWS],
    pub background: Color,
}

impl Face {
    pub fn draw(&self, console: &mut impl Console) -> Result<(), std::io::Error> {
        for row in self.rows {
            console.write(row, Style::Colored(self.background))?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct PipRenderer {
    background: Color,
}

impl PipRenderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Panics when `pips` is not a value a six-sided die can land on. Callers
    /// only ever pass what a [`crate::dice::Dice`] rolled.
    pub fn render(&self, pips: u8) -> Face {
        assert!(PIPS.contains(&pips), "pip count {pips} out of range");
        let rows = match pips {
            1 => ["     ", "  *  ", "     "],
            2 => ["    *", "     ", "*    "],
            3 => ["    *", "  *  ", "*    "],
            4 => ["*   *", "     ", "*   *"],
            5 => ["*   *", "  *  ", "*   *"],
            6 => ["*   *", "*   *", "*   *"],
            _ => unreachable!("range checked above"),
        };
        Face {
            rows,
            background: self.background,
        }
    }
}
