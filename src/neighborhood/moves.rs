//! Move descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FlowshopError;

/// The two move families of the permutation neighborhoods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Exchange two positions.
    Swap,
    /// Remove one job and reinsert it elsewhere.
    Insert,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Swap => write!(f, "swap"),
            MoveKind::Insert => write!(f, "insert"),
        }
    }
}

/// A position pair describing one move on a sequence.
///
/// Moves are plain data: they hold no reference to a schedule and can be
/// applied to any sequence long enough to contain both positions.
///
/// - `Swap(i, j)` exchanges the elements at `i` and `j`.
/// - `Insert(i, j)` removes the element at `i`, then inserts it at index
///   `j` of the shortened sequence.
///
/// # Examples
///
/// ```
/// use u_flowshop::neighborhood::Move;
///
/// let mut seq = vec!['a', 'b', 'c', 'd'];
/// Move::Insert(0, 2).apply_to(&mut seq).unwrap();
/// assert_eq!(seq, vec!['b', 'c', 'a', 'd']);
///
/// Move::Swap(0, 3).apply_to(&mut seq).unwrap();
/// assert_eq!(seq, vec!['d', 'c', 'a', 'b']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Swap(usize, usize),
    Insert(usize, usize),
}

impl Move {
    /// The move family.
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Swap(..) => MoveKind::Swap,
            Move::Insert(..) => MoveKind::Insert,
        }
    }

    /// The `(i, j)` position pair.
    pub fn positions(&self) -> (usize, usize) {
        match *self {
            Move::Swap(i, j) | Move::Insert(i, j) => (i, j),
        }
    }

    /// Whether both positions are valid for a sequence of `len` elements.
    pub fn is_in_bounds(&self, len: usize) -> bool {
        let (i, j) = self.positions();
        i < len && j < len
    }

    /// Applies the move to `seq` in place.
    pub fn apply_to<T>(&self, seq: &mut Vec<T>) -> Result<(), FlowshopError> {
        if !self.is_in_bounds(seq.len()) {
            return Err(FlowshopError::MoveOutOfBounds {
                mv: *self,
                len: seq.len(),
            });
        }
        match *self {
            Move::Swap(i, j) => seq.swap(i, j),
            Move::Insert(i, j) => {
                let item = seq.remove(i);
                seq.insert(j, item);
            }
        }
        Ok(())
    }

    /// First position whose element changes.
    pub(crate) fn first_touched(&self) -> usize {
        let (i, j) = self.positions();
        i.min(j)
    }

    /// Index in the original sequence of the element that ends up at
    /// `position` once the move is applied.
    pub(crate) fn source_index(&self, position: usize) -> usize {
        match *self {
            Move::Swap(i, j) => {
                if position == i {
                    j
                } else if position == j {
                    i
                } else {
                    position
                }
            }
            Move::Insert(i, j) => {
                if position == j {
                    i
                } else if i < j && position >= i && position < j {
                    position + 1
                } else if j < i && position > j && position <= i {
                    position - 1
                } else {
                    position
                }
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j) = self.positions();
        write!(f, "{}({}, {})", self.kind(), i, j)
    }
}
