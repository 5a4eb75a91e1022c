use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;

pub mod console;
pub mod dice;
pub mod engine;
pub mod error;
pub mod parse;
pub mod render;
pub mod settings;
pub mod style;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

use console::Transcript;
use engine::RollEngine;
use settings::Settings;

/// Run a static invocation such as `-r 3 4` and hand back everything it
/// printed, without colors.
#[wasm_bindgen]
pub fn roll_and_draw(input: &str) -> String {
    let arguments = input.split_whitespace().map(str::to_string).collect();
    let mut engine = RollEngine::new(
        arguments,
        Transcript::default(),
        ThreadRng::default(),
        Settings::default(),
    );
    match engine.static_mode() {
        Ok(_) => engine.into_console().plain_text(),
        Err(e) => e.to_string(),
    }
}
