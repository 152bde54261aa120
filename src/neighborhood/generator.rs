//! Precomputed swap and insert neighborhoods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveKind};
use crate::flowshop::Flowshop;

/// Every move of one kind for sequences of a fixed length.
///
/// A neighborhood depends only on the job count, so it is built once per
/// problem size and shared by reference across every search on schedules
/// of that size.
///
/// # Enumeration order
///
/// - **Swap**: `(i, j)` for `0 ≤ i < j < n`, `i` outer ascending, `j` inner
///   ascending. `n(n-1)/2` moves.
/// - **Insert**: `(i, j)` for `0 ≤ i, j < n`, skipping `j == i` and
///   `j == i - 1` (both leave the sequence unchanged), same loop order.
///   `(n-1)²` moves.
///
/// # Examples
///
/// ```
/// use u_flowshop::neighborhood::{Move, Neighborhood};
///
/// let swaps = Neighborhood::swap(5);
/// assert_eq!(swaps.len(), 10);
/// assert_eq!(swaps.moves()[0], Move::Swap(0, 1));
///
/// let inserts = Neighborhood::insert(5);
/// assert_eq!(inserts.len(), 16);
/// assert_eq!(inserts.moves()[4], Move::Insert(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighborhood {
    kind: MoveKind,
    job_count: usize,
    moves: Vec<Move>,
}

impl Neighborhood {
    /// Builds the neighborhood of `kind` for `job_count` jobs.
    pub fn new(kind: MoveKind, job_count: usize) -> Self {
        match kind {
            MoveKind::Swap => Self::swap(job_count),
            MoveKind::Insert => Self::insert(job_count),
        }
    }

    /// All position exchanges.
    pub fn swap(job_count: usize) -> Self {
        let n = job_count;
        let mut moves = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                moves.push(Move::Swap(i, j));
            }
        }
        Self {
            kind: MoveKind::Swap,
            job_count,
            moves,
        }
    }

    /// All non-trivial remove-and-reinsert moves.
    pub fn insert(job_count: usize) -> Self {
        let n = job_count;
        let mut moves = Vec::with_capacity(n.saturating_sub(1).pow(2));
        for i in 0..n {
            for j in 0..n {
                if j == i || (i > 0 && j == i - 1) {
                    continue;
                }
                moves.push(Move::Insert(i, j));
            }
        }
        Self {
            kind: MoveKind::Insert,
            job_count,
            moves,
        }
    }

    /// Builds the neighborhood of `kind` sized for `instance`.
    pub fn for_instance(kind: MoveKind, instance: &Flowshop) -> Self {
        Self::new(kind, instance.job_count())
    }

    /// The move family.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Sequence length the moves were generated for.
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Moves in enumeration order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the neighborhood has no moves (fewer than two jobs).
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at `index` in enumeration order.
    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    /// Iterates over the moves in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
