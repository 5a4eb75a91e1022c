use rand::Rng;

use crate::console::Console;
use crate::dice::Dice;
use crate::error::RollError;
use crate::parse::{
    parse_arguments, parse_dice_answer, parse_repetition_answer, Answer, Invocation, RollRequest,
};
use crate::render::PipRenderer;
use crate::settings::Settings;
use crate::style::Style;

const WELCOME: &str =
    "Welcome to Roll.  This program will roll up to 6 dice at a time, and up to 10 repetitions.";
const DICE_PROMPT: &str = "Type a number between 1 to 6 to roll the dice, or 'q' to quit";
const REPETITION_PROMPT: &str = "Type a number between 1 to 10 for repetitions";

/// How a run ended, once everything has been printed
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    Completed,
    Failed(RollError),
}

/// Drives a whole invocation: decides between static and interactive mode,
/// reports bad input and prints the rolls.
pub struct RollEngine<C: Console, R: Rng> {
    arguments: Vec<String>,
    console: C,
    rng: R,
    settings: Settings,
    renderer: PipRenderer,
}

impl<C: Console, R: Rng> RollEngine<C, R> {
    pub fn new(arguments: Vec<String>, console: C, rng: R, settings: Settings) -> Self {
        let renderer = PipRenderer::new(settings.background);
        RollEngine {
            arguments,
            console,
            rng,
            settings,
            renderer,
        }
    }

    /// Static mode when there are arguments, interactive mode otherwise
    pub fn run(&mut self) -> Result<Outcome, std::io::Error> {
        if self.arguments.is_empty() {
            self.interactive_mode()
        } else {
            self.static_mode()
        }
    }

    pub fn static_mode(&mut self) -> Result<Outcome, std::io::Error> {
        log::debug!("static mode with arguments {:?}", self.arguments);
        match parse_arguments(&self.arguments) {
            Ok(Invocation::Roll(request)) => {
                self.roll_and_print(request)?;
                Ok(Outcome::Completed)
            }
            Ok(Invocation::Help) => {
                self.print_usage()?;
                Ok(Outcome::Completed)
            }
            Err(e) => {
                self.display(&e)?;
                self.print_usage()?;
                Ok(Outcome::Failed(e))
            }
        }
    }

    /// Prompt for dice and repetitions until the user quits or input runs out.
    /// Mistakes are reported and the prompt starts over.
    pub fn interactive_mode(&mut self) -> Result<Outcome, std::io::Error> {
        log::debug!("interactive mode");
        self.say(WELCOME)?;
        loop {
            self.say(DICE_PROMPT)?;
            let Some(line) = self.console.read_line()? else {
                log::debug!("input closed while waiting for a dice count");
                break;
            };
            let dice_count = match parse_dice_answer(&line) {
                Ok(Answer::Dice(dice_count)) => dice_count,
                Ok(Answer::Quit) => break,
                Err(e) => {
                    self.display(&e)?;
                    continue;
                }
            };

            self.say(REPETITION_PROMPT)?;
            let Some(line) = self.console.read_line()? else {
                log::debug!("input closed while waiting for repetitions");
                break;
            };
            let request = parse_repetition_answer(&line).and_then(|repetition_count| {
                RollRequest::new(dice_count.into(), repetition_count.into())
            });
            match request {
                Ok(request) => self.roll_and_print(request)?,
                Err(e) => self.display(&e)?,
            }
        }
        Ok(Outcome::Completed)
    }

    pub fn roll_and_print(&mut self, request: RollRequest) -> Result<(), std::io::Error> {
        log::debug!(
            "rolling {} dice {} time(s)",
            request.dice_count(),
            request.repetition_count()
        );
        self.say("")?;
        for i in 1..=request.repetition_count() {
            self.say(&format!("Roll {i}"))?;
            let dice = vec![Dice::default(); request.dice_count() as usize];
            for (n, die) in dice.iter().enumerate() {
                let rolled = die.roll(&mut self.rng);
                log::trace!("roll {i}, die {}: {}", n + 1, rolled.pips_landed());
                self.renderer
                    .render(rolled.pips_landed())
                    .draw(&mut self.console)?;
                self.say("")?;
            }
        }
        Ok(())
    }

    pub fn print_usage(&mut self) -> Result<(), std::io::Error> {
        let name = self.settings.program_name.clone();
        let usage = [
            "usage:".to_string(),
            format!("{name} <# of dice, up to 6>"),
            "or".to_string(),
            format!("{name} -r <optional: # of repetitions, default to 2> <# of dice, up to 6>"),
            "or".to_string(),
            format!("{name} -h to show usage information"),
            format!("Type {name} without an option to enter interactive mode."),
        ];
        for line in usage {
            self.say(&line)?;
        }
        Ok(())
    }

    fn display(&mut self, error: &RollError) -> Result<(), std::io::Error> {
        log::debug!("rejected input: {error:?}");
        self.console.write(&error.to_string(), Style::Error)
    }

    fn say(&mut self, line: &str) -> Result<(), std::io::Error> {
        self.console.write(line, Style::Plain)
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
