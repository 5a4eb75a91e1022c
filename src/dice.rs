use std::ops::RangeInclusive;

use rand::Rng;

pub const PIPS: RangeInclusive<u8> = 1..=6;

/// A single six-sided die. Rolling hands back a new die rather than mutating
/// this one.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Dice {
    pips_landed: u8,
}

impl Dice {
    pub fn roll(&self, rng: &mut impl Rng) -> Dice {
        Dice {
            pips_landed: rng.gen_range(PIPS),
        }
    }

    pub fn pips_landed(&self) -> u8 {
        self.pips_landed
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice { pips_landed: 1 }
    }
}
