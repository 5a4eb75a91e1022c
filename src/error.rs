/// Everything that can be wrong with what the user asked for
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum RollError {
    #[error("Invalid dice count")]
    InvalidDiceCount,

    #[error("Invalid repeats")]
    InvalidRepeats,

    #[error("Invalid option{}", .0.as_ref().map(|option| format!(": {option}")).unwrap_or_default())]
    InvalidOption(Option<String>),

    #[error("Too few arguments")]
    TooFewArguments,

    #[error("Too many arguments")]
    TooManyArguments,
}
