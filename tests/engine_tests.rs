use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use roll::console::{Console, Transcript};
use roll::engine::{Outcome, RollEngine};
use roll::error::RollError;
use roll::render::{FACE_ROWS, FACE_WIDTH};
use roll::settings::Settings;
use roll::style::{Color, Style};

const FACES: [[&str; 3]; 6] = [
    ["     ", "  *  ", "     "],
    ["    *", "     ", "*    "],
    ["    *", "  *  ", "*    "],
    ["*   *", "     ", "*   *"],
    ["*   *", "  *  ", "*   *"],
    ["*   *", "*   *", "*   *"],
];

const USAGE: [&str; 7] = [
    "usage:",
    "roll <# of dice, up to 6>",
    "or",
    "roll -r <optional: # of repetitions, default to 2> <# of dice, up to 6>",
    "or",
    "roll -h to show usage information",
    "Type roll without an option to enter interactive mode.",
];

fn run(arguments: &[&str], input: &[&str]) -> (Outcome, Transcript) {
    let mut engine = RollEngine::new(
        arguments.iter().map(|s| s.to_string()).collect(),
        Transcript::new(input.iter().copied()),
        StdRng::seed_from_u64(0xd1ce),
        Settings::default(),
    );
    let outcome = engine.run().expect("transcripts never fail");
    (outcome, engine.into_console())
}

/// Splits what was written into rolls, each a list of faces, checking the
/// layout along the way.
fn rolls(transcript: &Transcript) -> Vec<Vec<[String; 3]>> {
    let written = transcript.written();
    let mut rolls: Vec<Vec<[String; 3]>> = Vec::new();
    let mut i = 0;
    assert_eq!((Style::Plain, String::new()), written[i]);
    i += 1;
    while i < written.len() {
        let (style, line) = &written[i];
        if *style == Style::Plain && line.starts_with("Roll ") {
            assert_eq!(format!("Roll {}", rolls.len() + 1), *line);
            rolls.push(Vec::new());
            i += 1;
            continue;
        }
        if *style == Style::Plain {
            // interactive prompts after a roll end the block
            break;
        }
        let rows: Vec<String> = written[i..i + FACE_ROWS]
            .iter()
            .map(|(style, line)| {
                assert_eq!(Style::Colored(Color::Cyan), *style);
                assert_eq!(FACE_WIDTH, line.chars().count());
                line.clone()
            })
            .collect();
        assert_eq!((Style::Plain, String::new()), written[i + FACE_ROWS]);
        let face = [rows[0].clone(), rows[1].clone(), rows[2].clone()];
        assert!(
            FACES.iter().any(|known| known.iter().eq(face.iter())),
            "{face:?} is not a die face"
        );
        rolls
            .last_mut()
            .expect("a face always follows a header")
            .push(face);
        i += FACE_ROWS + 1;
    }
    rolls
}

#[test]
fn one_roll_for_every_dice_count() {
    for n in 1..=6 {
        let (outcome, transcript) = run(&[&n.to_string()], &[]);
        assert_eq!(Outcome::Completed, outcome);
        let rolls = rolls(&transcript);
        assert_eq!(1, rolls.len());
        assert_eq!(n, rolls[0].len());
        assert!(transcript.errors().is_empty());
    }
}

#[test]
fn dice_count_out_of_range() {
    for token in ["0", "7", "42", "-10"] {
        let (outcome, transcript) = run(&[token], &[]);
        assert_eq!(Outcome::Failed(RollError::InvalidDiceCount), outcome);
        assert_eq!(vec!["Invalid dice count"], transcript.errors());
        assert_eq!(USAGE.to_vec(), transcript.output());
    }
}

#[test]
fn not_a_number() {
    for token in ["six", "1.5", "d6"] {
        let (outcome, transcript) = run(&[token], &[]);
        assert_eq!(
            Outcome::Failed(RollError::InvalidOption(Some(token.to_string()))),
            outcome
        );
        assert_eq!(vec![format!("Invalid option: {token}")], transcript.errors());
        assert_eq!(USAGE.to_vec(), transcript.output());
    }
}

#[test]
fn repeat_defaults_to_two() {
    let (outcome, transcript) = run(&["-r", "3"], &[]);
    assert_eq!(Outcome::Completed, outcome);
    let rolls = rolls(&transcript);
    assert_eq!(2, rolls.len());
    assert!(rolls.iter().all(|roll| roll.len() == 3));
}

#[test]
fn repeat_with_count() {
    let (_, transcript) = run(&["-r", "5", "4"], &[]);
    let rolls = rolls(&transcript);
    assert_eq!(5, rolls.len());
    assert!(rolls.iter().all(|roll| roll.len() == 4));
}

#[test]
fn repeat_failures() {
    let cases = [
        (vec!["-r", "11", "4"], RollError::InvalidRepeats),
        (vec!["-r", "5", "7"], RollError::InvalidDiceCount),
        (vec!["-r"], RollError::TooFewArguments),
        (vec!["-r", "1", "1", "1"], RollError::TooManyArguments),
    ];
    for (arguments, error) in cases {
        let (outcome, transcript) = run(&arguments, &[]);
        assert_eq!(vec![error.to_string()], transcript.errors());
        assert_eq!(Outcome::Failed(error), outcome);
        assert_eq!(USAGE.to_vec(), transcript.output());
    }
}

#[test]
fn too_many_arguments() {
    let (outcome, transcript) = run(&["2", "3"], &[]);
    assert_eq!(Outcome::Failed(RollError::TooManyArguments), outcome);
    assert_eq!(vec!["Too many arguments"], transcript.errors());
}

#[test]
fn help() {
    let (outcome, transcript) = run(&["-h"], &[]);
    assert_eq!(Outcome::Completed, outcome);
    assert!(transcript.errors().is_empty());
    assert_eq!(USAGE.to_vec(), transcript.output());
}

#[test]
fn unknown_option() {
    let (outcome, transcript) = run(&["-x"], &[]);
    assert_eq!(
        Outcome::Failed(RollError::InvalidOption(Some("x".to_string()))),
        outcome
    );
    assert_eq!(vec!["Invalid option: x"], transcript.errors());
    assert_eq!(USAGE.to_vec(), transcript.output());
}

#[test]
fn quit_is_not_a_static_option() {
    let (outcome, transcript) = run(&["-q"], &[]);
    assert_eq!(
        Outcome::Failed(RollError::InvalidOption(Some("q".to_string()))),
        outcome
    );
    assert_eq!(vec!["Invalid option: q"], transcript.errors());
}

#[test]
fn interactive_roll_then_quit() {
    let (outcome, transcript) = run(&[], &["3", "2", "q"]);
    assert_eq!(Outcome::Completed, outcome);
    assert_eq!(0, transcript.unread());

    let written = transcript.written();
    let welcome = written.iter().position(|(_, line)| line.starts_with("Welcome"));
    assert_eq!(Some(0), welcome);

    let start = written
        .iter()
        .position(|(_, line)| line.is_empty())
        .expect("a roll was printed");
    let mut rolled = Transcript::default();
    for (style, line) in &written[start..] {
        rolled.write(line, *style).expect("transcripts never fail");
    }
    let rolls = rolls(&rolled);
    assert_eq!(2, rolls.len());
    assert!(rolls.iter().all(|roll| roll.len() == 3));
    assert!(transcript.errors().is_empty());
}

#[test]
fn interactive_mistakes_do_not_end_the_session() {
    let (outcome, transcript) = run(&[], &["x", "1", "1", "q"]);
    assert_eq!(Outcome::Completed, outcome);
    assert_eq!(vec!["Invalid option: x"], transcript.errors());
    assert_eq!(0, transcript.unread());
    assert!(transcript.output().contains(&"Roll 1"));
}

#[test]
fn interactive_ends_with_input() {
    let (outcome, transcript) = run(&[], &["x"]);
    assert_eq!(Outcome::Completed, outcome);
    assert_eq!(vec!["Invalid option: x"], transcript.errors());
}
