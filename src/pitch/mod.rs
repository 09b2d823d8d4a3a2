//! Pitch, pitch-class, tendency, and spelled-pitch data model
//!
//! This module contains the musical vocabulary surrounding the combinatorial
//! core:
//! - Unspelled pitches and their chromatic classes
//! - Tendency values decoded from the cut partition
//! - Letter names, accidentals, and octave-registered spelled pitches
//! - The resolution table from tendency pairs to concrete spellings

use std::fmt;

/// Resolution table from pitch class and tendency pair to a spelling
pub mod resolution;
/// Letter names, accidentals, and octave-registered spelled pitches
pub mod spelling;
/// Binary resolution direction assigned to candidate-spelling nodes
pub mod tendency;

pub use spelling::{Accidental, LetterName, SpelledPitch, Spelling};
pub use tendency::{Tendency, TendencyPair};

/// An unspelled musical event as a fractional semitone number
///
/// Values are MIDI-aligned (60.0 is middle C). Immutable and supplied by the
/// caller; microtonal inflections round to the nearest semitone when the
/// chromatic class is taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pitch(f64);

impl Pitch {
    /// Create a pitch from a fractional semitone number
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The fractional semitone number
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// The chromatic class of this pitch, rounded to the nearest semitone
    pub fn class(&self) -> PitchClass {
        let rounded = self.0.round() as i64;
        PitchClass::new(rounded.rem_euclid(12) as u8)
    }
}

impl From<f64> for Pitch {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// A pitch modulo the octave, in `0..12`
///
/// Used only as a lookup key into the cost model and resolution table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, reducing the value modulo 12
    pub const fn new(value: u8) -> Self {
        Self(value % 12)
    }

    /// The chromatic class value in `0..12`
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Pitch, PitchClass};

    #[test]
    fn test_class_rounds_fractional_semitones() {
        assert_eq!(Pitch::new(60.4).class(), PitchClass::new(0));
        assert_eq!(Pitch::new(62.6).class(), PitchClass::new(3));
        assert_eq!(Pitch::new(-1.0).class(), PitchClass::new(11));
    }
}
