use std::ops::RangeInclusive;

use crate::error::RollError;

pub const DICE: RangeInclusive<u8> = 1..=6;
pub const REPETITIONS: RangeInclusive<u8> = 1..=10;
pub const DEFAULT_REPETITIONS: u8 = 2;

/// The letter following a dash in the first argument
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OptionType {
    Repeat,
    Help,
    Quit,
    Unknown,
}

impl From<char> for OptionType {
    fn from(c: char) -> Self {
        match c {
            'r' => OptionType::Repeat,
            'h' => OptionType::Help,
            'q' => OptionType::Quit,
            _ => OptionType::Unknown,
        }
    }
}

/// A validated number of dice and how many times to roll them. Only the
/// constructors in this module build one, so holding a `RollRequest` means
/// both counts are in range.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RollRequest {
    dice_count: u8,
    repetition_count: u8,
}

impl RollRequest {
    pub fn new(dice_count: i64, repetition_count: i64) -> Result<Self, RollError> {
        let repetition_count = within(repetition_count, REPETITIONS, RollError::InvalidRepeats)?;
        let dice_count = within(dice_count, DICE, RollError::InvalidDiceCount)?;
        Ok(RollRequest {
            dice_count,
            repetition_count,
        })
    }

    pub fn dice_count(&self) -> u8 {
        self.dice_count
    }

    pub fn repetition_count(&self) -> u8 {
        self.repetition_count
    }
}

/// What a static invocation asks for
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Invocation {
    Roll(RollRequest),
    Help,
}

/// One answer to the first interactive prompt
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Answer {
    Dice(u8),
    Quit,
}

pub fn parse_arguments(arguments: &[String]) -> Result<Invocation, RollError> {
    let (first, rest) = arguments.split_first().ok_or(RollError::TooFewArguments)?;
    match option_flag(first) {
        Some(flag) => match OptionType::from(flag) {
            OptionType::Repeat => parse_repeat(rest).map(Invocation::Roll),
            OptionType::Help => Ok(Invocation::Help),
            OptionType::Quit | OptionType::Unknown => {
                Err(RollError::InvalidOption(Some(flag.to_string())))
            }
        },
        None => {
            if !rest.is_empty() {
                return Err(RollError::TooManyArguments);
            }
            let dice_count = number(first).ok_or_else(|| invalid_option(first))?;
            RollRequest::new(dice_count, 1).map(Invocation::Roll)
        }
    }
}

/// Everything after `-r`: either `[dice]` or `[repeat, dice]`. Inside the
/// repeat form a token that isn't a number is out of range like any other.
fn parse_repeat(arguments: &[String]) -> Result<RollRequest, RollError> {
    match arguments {
        [] => Err(RollError::TooFewArguments),
        [dice] => {
            let dice_count = number(dice).ok_or(RollError::InvalidDiceCount)?;
            RollRequest::new(dice_count, DEFAULT_REPETITIONS.into())
        }
        [repeat, dice] => {
            let repetition_count = number(repeat).ok_or(RollError::InvalidRepeats)?;
            let repetition_count =
                within(repetition_count, REPETITIONS, RollError::InvalidRepeats)?;
            let dice_count = number(dice).ok_or(RollError::InvalidDiceCount)?;
            RollRequest::new(dice_count, repetition_count.into())
        }
        _ => Err(RollError::TooManyArguments),
    }
}

pub fn parse_dice_answer(line: &str) -> Result<Answer, RollError> {
    match number(line) {
        Some(n) => within(n, DICE, RollError::InvalidDiceCount).map(Answer::Dice),
        None if line == "q" => Ok(Answer::Quit),
        None => Err(invalid_option(line)),
    }
}

pub fn parse_repetition_answer(line: &str) -> Result<u8, RollError> {
    let n = number(line).ok_or_else(|| invalid_option(line))?;
    within(n, REPETITIONS, RollError::InvalidRepeats)
}

/// `-x` yields `x`. Only a dash followed by exactly one character counts.
fn option_flag(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(flag), None) => Some(flag),
        _ => None,
    }
}

fn number(token: &str) -> Option<i64> {
    token.parse().ok()
}

fn within(n: i64, range: RangeInclusive<u8>, error: RollError) -> Result<u8, RollError> {
    u8::try_from(n)
        .ok()
        .filter(|n| range.contains(n))
        .ok_or(error)
}

fn invalid_option(token: &str) -> RollError {
    if token.is_empty() {
        RollError::InvalidOption(None)
    } else {
        RollError::InvalidOption(Some(token.to_string()))
    }
}
