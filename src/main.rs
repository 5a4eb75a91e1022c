use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use rand::rngs::ThreadRng;

use roll::engine::{Outcome, RollEngine};
use roll::settings::Settings;
use roll::terminal::Terminal;

fn cli() -> Command {
    Command::new("roll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Roll up to six dice and draw their faces")
        .long_about(
            "Roll up to six six-sided dice, up to ten times in a row, and draw each\n\
            face as a grid of pips. Run without arguments to be asked for the\n\
            number of dice and repetitions until you type q.",
        )
        // -h and -r belong to the dice engine, not to clap
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("arguments")
                .action(ArgAction::Append)
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Everything after the program name, exactly as typed. clap would swallow a
/// leading `--`, which the engine has to see and reject.
fn engine_arguments(raw: Vec<OsString>) -> Vec<String> {
    cli().get_matches_from(raw.iter());
    raw.into_iter()
        .skip(1)
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = engine_arguments(std::env::args_os().collect());

    let mut engine = RollEngine::new(
        arguments,
        Terminal,
        ThreadRng::default(),
        Settings::from_env(),
    );
    match engine.run() {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Failed(e)) => {
            log::debug!("finished with {e:?}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("roll: {e}");
            ExitCode::from(2)
        }
    }
}
