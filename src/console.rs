use std::collections::VecDeque;

use itertools::Itertools;

use crate::style::Style;

/// Where the engine writes lines and reads answers from.
pub trait Console {
    fn write(&mut self, line: &str, style: Style) -> Result<(), std::io::Error>;

    /// Reads one line without its terminator. `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, std::io::Error>;
}

/// In-memory console: answers come from a queue of scripted lines and
/// everything written is kept in order.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    input: VecDeque<String>,
    written: Vec<(Style, String)>,
}

impl Transcript {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[(Style, String)] {
        &self.written
    }

    /// Lines meant for standard output, colored or not
    pub fn output(&self) -> Vec<&str> {
        self.written
            .iter()
            .filter(|(style, _)| *style != Style::Error)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.written
            .iter()
            .filter(|(style, _)| *style == Style::Error)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Answers nobody asked for yet
    pub fn unread(&self) -> usize {
        self.input.len()
    }

    pub fn plain_text(&self) -> String {
        self.written.iter().map(|(_, line)| line).join("\n")
    }
}

impl Console for Transcript {
    fn write(&mut self, line: &str, style: Style) -> Result<(), std::io::Error> {
        self.written.push((style, line.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, std::io::Error> {
        Ok(self.input.pop_front())
    }
}
