//! This is a separate module so we can exclude it from WASM compilation

use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use std::io::{stderr, stdin, stdout, BufRead, Write};

use crate::console::Console;
use crate::style::{Color, Style};

/// Standard streams: errors in red on stderr, everything else on stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    fn colored(line: &str, color: Color) -> Result<(), std::io::Error> {
        let mut stdout = stdout();
        stdout.queue(SetBackgroundColor(background(color)))?;
        stdout.queue(Print(line))?;
        stdout.queue(ResetColor)?;
        stdout.queue(Print("\n"))?;
        stdout.flush()
    }

    fn error(line: &str) -> Result<(), std::io::Error> {
        let mut stderr = stderr();
        stderr.queue(SetForegroundColor(TermColor::Red))?;
        stderr.queue(Print(line))?;
        stderr.queue(ResetColor)?;
        stderr.queue(Print("\n"))?;
        stderr.flush()
    }

    fn plain(line: &str) -> Result<(), std::io::Error> {
        let mut stdout = stdout();
        stdout.queue(ResetColor)?;
        stdout.queue(Print(line))?;
        stdout.queue(Print("\n"))?;
        stdout.flush()
    }
}

impl Console for Terminal {
    fn write(&mut self, line: &str, style: Style) -> Result<(), std::io::Error> {
        match style {
            Style::Plain => Self::plain(line),
            Style::Error => Self::error(line),
            Style::Colored(color) => Self::colored(line, color),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, std::io::Error> {
        let mut line = String::new();
        if stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(&line).to_string()))
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}

fn background(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::Default => TermColor::Reset,
        Color::LightBlack => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::LightWhite => TermColor::White,
    }
}
