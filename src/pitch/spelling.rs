//! Letter names, accidentals, and octave-registered spelled pitches

use std::fmt;

use crate::pitch::Pitch;

/// Diatonic letter name
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterName {
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// A
    A,
    /// B
    B,
}

impl LetterName {
    /// Semitone offset of the natural letter above C within one octave
    pub const fn semitone_offset(&self) -> u8 {
        match self {
            Self::C => 0,
            Self::D => 2,
            Self::E => 4,
            Self::F => 5,
            Self::G => 7,
            Self::A => 9,
            Self::B => 11,
        }
    }

    /// Position of the natural letter on the line of fifths, with C at zero
    pub const fn fifths_position(&self) -> i8 {
        match self {
            Self::F => -1,
            Self::C => 0,
            Self::G => 1,
            Self::D => 2,
            Self::A => 3,
            Self::E => 4,
            Self::B => 5,
        }
    }
}

impl fmt::Display for LetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::E => write!(f, "E"),
            Self::F => write!(f, "F"),
            Self::G => write!(f, "G"),
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Chromatic alteration applied to a letter name
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accidental {
    /// Two semitones down
    DoubleFlat,
    /// One semitone down
    Flat,
    /// No alteration
    Natural,
    /// One semitone up
    Sharp,
    /// Two semitones up
    DoubleSharp,
}

impl Accidental {
    /// Signed semitone offset of the alteration
    pub const fn semitone_offset(&self) -> i8 {
        match self {
            Self::DoubleFlat => -2,
            Self::Flat => -1,
            Self::Natural => 0,
            Self::Sharp => 1,
            Self::DoubleSharp => 2,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleFlat => write!(f, "bb"),
            Self::Flat => write!(f, "b"),
            Self::Natural => Ok(()),
            Self::Sharp => write!(f, "#"),
            Self::DoubleSharp => write!(f, "##"),
        }
    }
}

/// A concrete notation spelling: letter name plus accidental
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Spelling {
    letter: LetterName,
    accidental: Accidental,
}

impl Spelling {
    /// Combine a letter name and accidental
    pub const fn new(letter: LetterName, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// The diatonic letter name
    pub const fn letter(&self) -> LetterName {
        self.letter
    }

    /// The chromatic alteration
    pub const fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Position on the line of fifths: letter position plus seven per
    /// accidental step
    pub const fn fifths_position(&self) -> i8 {
        self.letter.fifths_position() + 7 * self.accidental.semitone_offset()
    }

    /// Chromatic class named by this spelling, in `0..12`
    pub const fn semitone_class(&self) -> u8 {
        let offset = self.letter.semitone_offset() as i16 + self.accidental.semitone_offset() as i16;
        offset.rem_euclid(12) as u8
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

/// A spelling bound to an octave register
///
/// The octave follows the letter name, not the sounding chromatic class, so
/// the two spellings at the octave seam register correctly: B sharp 3 and
/// C natural 4 name the same semitone, as do C flat 4 and B natural 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpelledPitch {
    spelling: Spelling,
    octave: i32,
}

impl SpelledPitch {
    /// Bind a spelling to an explicit octave register
    pub const fn new(spelling: Spelling, octave: i32) -> Self {
        Self { spelling, octave }
    }

    /// Register a spelling against the pitch it notates
    ///
    /// Chooses the octave so that the notated semitone equals the pitch's
    /// rounded semitone number; enharmonic reinterpretation across octave
    /// boundaries falls out of the subtraction.
    pub fn register(pitch: Pitch, spelling: Spelling) -> Self {
        let rounded = pitch.value().round() as i32;
        let natural = rounded
            - i32::from(spelling.accidental().semitone_offset())
            - i32::from(spelling.letter().semitone_offset());
        Self {
            spelling,
            octave: natural.div_euclid(12) - 1,
        }
    }

    /// The spelling component
    pub const fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// The octave register, with middle C in octave 4
    pub const fn octave(&self) -> i32 {
        self.octave
    }

    /// The notated semitone number
    pub const fn semitone(&self) -> i32 {
        (self.octave + 1) * 12
            + self.spelling.letter().semitone_offset() as i32
            + self.spelling.accidental().semitone_offset() as i32
    }
}

impl fmt::Display for SpelledPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::{Accidental, LetterName, SpelledPitch, Spelling};
    use crate::pitch::Pitch;

    #[test]
    fn test_octave_seam_registers_below() {
        let b_sharp = Spelling::new(LetterName::B, Accidental::Sharp);
        let spelled = SpelledPitch::register(Pitch::new(60.0), b_sharp);
        assert_eq!(spelled.octave(), 3);
        assert_eq!(spelled.semitone(), 60);
    }

    #[test]
    fn test_octave_seam_registers_above() {
        let c_flat = Spelling::new(LetterName::C, Accidental::Flat);
        let spelled = SpelledPitch::register(Pitch::new(59.0), c_flat);
        assert_eq!(spelled.octave(), 4);
        assert_eq!(spelled.semitone(), 59);
    }
}
