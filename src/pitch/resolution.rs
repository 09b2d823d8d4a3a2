//! Resolution table from pitch class and tendency pair to a spelling
//!
//! Each chromatic class has exactly two candidate spellings: a sharp-leaning
//! one and a flat-leaning one. Natural classes carry the same candidate on
//! both sides; the five altered classes split into the conventional
//! sharp/flat pair. The leading slot of a tendency pair decides which
//! candidate wins.

use crate::error::{Result, SpellerError};
use crate::pitch::PitchClass;
use crate::pitch::spelling::{Accidental, LetterName, Spelling};
use crate::pitch::tendency::{Tendency, TendencyPair};

/// Candidate spelling of a pitch class for one tendency
///
/// `Up` selects the sharp-leaning candidate, `Down` the flat-leaning one.
pub const fn candidate(class: PitchClass, tendency: Tendency) -> Spelling {
    let sharp_leaning = matches!(tendency, Tendency::Up);
    match class.value() {
        1 => {
            if sharp_leaning {
                Spelling::new(LetterName::C, Accidental::Sharp)
            } else {
                Spelling::new(LetterName::D, Accidental::Flat)
            }
        }
        2 => Spelling::new(LetterName::D, Accidental::Natural),
        3 => {
            if sharp_leaning {
                Spelling::new(LetterName::D, Accidental::Sharp)
            } else {
                Spelling::new(LetterName::E, Accidental::Flat)
            }
        }
        4 => Spelling::new(LetterName::E, Accidental::Natural),
        5 => Spelling::new(LetterName::F, Accidental::Natural),
        6 => {
            if sharp_leaning {
                Spelling::new(LetterName::F, Accidental::Sharp)
            } else {
                Spelling::new(LetterName::G, Accidental::Flat)
            }
        }
        7 => Spelling::new(LetterName::G, Accidental::Natural),
        8 => {
            if sharp_leaning {
                Spelling::new(LetterName::G, Accidental::Sharp)
            } else {
                Spelling::new(LetterName::A, Accidental::Flat)
            }
        }
        9 => Spelling::new(LetterName::A, Accidental::Natural),
        10 => {
            if sharp_leaning {
                Spelling::new(LetterName::A, Accidental::Sharp)
            } else {
                Spelling::new(LetterName::B, Accidental::Flat)
            }
        }
        11 => Spelling::new(LetterName::B, Accidental::Natural),
        _ => Spelling::new(LetterName::C, Accidental::Natural),
    }
}

/// Resolve a pitch class and tendency pair to a concrete spelling
///
/// The leading slot carries the pitch's resolved direction: `(Up, Down)`
/// selects the sharp-leaning candidate, `(Down, Up)` the flat-leaning one.
///
/// # Errors
///
/// Returns `SpellerError::Unspellable` when the two slots carry equal
/// tendencies; such a pair names no notation and indicates the barrier
/// constraint did not hold upstream.
pub const fn resolve(class: PitchClass, pair: TendencyPair) -> Result<Spelling> {
    if !pair.is_separated() {
        return Err(SpellerError::Unspellable { class, pair });
    }
    Ok(candidate(class, pair.slot0))
}
