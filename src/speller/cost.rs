//! Pairwise spelling cost lookup table
//!
//! A cost model maps a pair of (pitch-class, tendency) indices to the cost of
//! postulating both candidate spellings simultaneously. The model is built
//! once, is immutable afterwards, and may be shared across concurrent
//! spelling calls. Absence of a pair is distinguished from zero cost: the
//! graph builder treats a missing entry as a configuration error.

use std::collections::HashMap;
use std::fmt;

use ndarray::Array2;

use crate::graph::capacity::Capacity;
use crate::pitch::PitchClass;
use crate::pitch::resolution::candidate;
use crate::pitch::tendency::Tendency;

/// One of the two candidate spellings of a pitch class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LookupIndex {
    /// Chromatic class of the pitch
    pub class: PitchClass,
    /// Which candidate: `Up` sharp-leaning, `Down` flat-leaning
    pub tendency: Tendency,
}

impl LookupIndex {
    /// Create an index from a class and tendency
    pub const fn new(class: PitchClass, tendency: Tendency) -> Self {
        Self { class, tendency }
    }

    /// Column of this index's tendency in the fifths-position table
    const fn tendency_column(&self) -> usize {
        match self.tendency {
            Tendency::Down => 0,
            Tendency::Up => 1,
        }
    }
}

impl fmt::Display for LookupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(class {}, {})", self.class, self.tendency)
    }
}

/// Key into the cost model: a pair of candidate-spelling indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LookupPair {
    /// Index at the edge's tail
    pub from: LookupIndex,
    /// Index at the edge's head
    pub to: LookupIndex,
}

impl LookupPair {
    /// Create a pair from tail and head indices
    pub const fn new(from: LookupIndex, to: LookupIndex) -> Self {
        Self { from, to }
    }
}

/// Immutable mapping from lookup pairs to spelling costs
///
/// Built once before any graph is constructed. `weight` returns nothing for
/// pairs outside the model's domain; only user-built models can be partial,
/// the fifths model is total over all pairs.
#[derive(Clone, Debug)]
pub struct CostModel {
    weights: HashMap<LookupPair, Capacity>,
}

impl CostModel {
    /// Build the line-of-fifths model
    ///
    /// The cost of a pair is the absolute distance between the two candidate
    /// spellings' positions on the line of fifths: candidates that sit far
    /// apart (say C sharp against G flat) are expensive to postulate
    /// together, close ones nearly free. Total over every one of the
    /// `(12 x 2)^2` pairs and deterministic.
    pub fn fifths() -> Self {
        let table = fifths_positions();
        let mut weights = HashMap::with_capacity(24 * 24);
        for from_class in 0..12_u8 {
            for from_tendency in [Tendency::Down, Tendency::Up] {
                let from = LookupIndex::new(PitchClass::new(from_class), from_tendency);
                for to_class in 0..12_u8 {
                    for to_tendency in [Tendency::Down, Tendency::Up] {
                        let to = LookupIndex::new(PitchClass::new(to_class), to_tendency);
                        let distance = (position(&table, from) - position(&table, to)).abs();
                        weights.insert(LookupPair::new(from, to), Capacity::Finite(distance));
                    }
                }
            }
        }
        Self { weights }
    }

    /// Build a model from explicit weights
    ///
    /// Pairs left out of the map are outside the model's domain; the graph
    /// builder reports them as configuration errors rather than defaulting.
    pub const fn from_weights(weights: HashMap<LookupPair, Capacity>) -> Self {
        Self { weights }
    }

    /// Cost of postulating both candidate spellings of a pair, if defined
    pub fn weight(&self, pair: &LookupPair) -> Option<Capacity> {
        self.weights.get(pair).copied()
    }

    /// Number of pairs in the model's domain
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Test whether the model defines no pairs at all
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Line-of-fifths position of every candidate spelling
///
/// Rows are the twelve chromatic classes, columns the two tendencies (flat
/// candidate first). Positions follow the usual convention: naturals from F
/// at -1 through B at 5, each sharp adding seven, each flat subtracting
/// seven.
pub fn fifths_positions() -> Array2<f64> {
    Array2::from_shape_fn((12, 2), |(class, column)| {
        let tendency = if column == 0 {
            Tendency::Down
        } else {
            Tendency::Up
        };
        f64::from(candidate(PitchClass::new(class as u8), tendency).fifths_position())
    })
}

/// Distance on the line of fifths between a candidate and the pivot class
///
/// The pivot's own position is taken from its sharp-leaning candidate; for
/// natural classes the two candidates coincide, so the choice only matters
/// for pivots on altered classes.
pub fn pivot_distance(index: LookupIndex, pivot: PitchClass) -> f64 {
    let own = f64::from(candidate(index.class, index.tendency).fifths_position());
    let reference = f64::from(candidate(pivot, Tendency::Up).fifths_position());
    (own - reference).abs()
}

/// Read one candidate's position out of the fifths table
fn position(table: &Array2<f64>, index: LookupIndex) -> f64 {
    table
        .get([usize::from(index.class.value()), index.tendency_column()])
        .copied()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{CostModel, LookupIndex, LookupPair};
    use crate::graph::capacity::Capacity;
    use crate::pitch::PitchClass;
    use crate::pitch::tendency::Tendency;

    #[test]
    fn test_fifths_model_is_total() {
        let model = CostModel::fifths();
        assert_eq!(model.len(), 24 * 24);
    }

    #[test]
    fn test_fifths_model_is_symmetric() {
        let model = CostModel::fifths();
        let c_sharp = LookupIndex::new(PitchClass::new(1), Tendency::Up);
        let g_flat = LookupIndex::new(PitchClass::new(6), Tendency::Down);
        let forward = model.weight(&LookupPair::new(c_sharp, g_flat));
        let backward = model.weight(&LookupPair::new(g_flat, c_sharp));
        // C sharp sits at 7, G flat at -6
        assert_eq!(forward, Some(Capacity::Finite(13.0)));
        assert_eq!(forward, backward);
    }
}
