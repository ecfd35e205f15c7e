//! Mixed-radix index enumeration over a rectangular shape.
//!
//! [`IndexCursor`] walks the full cross-product of valid index tuples for a
//! given shape in lexicographic order, with the last (innermost) dimension
//! varying fastest, the same order as row-major element storage. Each
//! dimension is a digit with its own radix; `advance` increments the least
//! significant digit and propagates carries outward.

/// One digit of the counter: an immutable radix and a current index.
#[derive(Debug, Clone)]
struct Digit {
    len: usize,
    current: usize,
}

/// A mixed-radix counter over index tuples, outermost dimension first.
///
/// Callers must not construct a cursor for a shape containing a zero-length
/// dimension; an empty cross-product has nothing to enumerate and is handled
/// before any cursor exists. [`IndexCursor::walk`] performs that check.
#[derive(Debug, Clone)]
pub struct IndexCursor {
    digits: Vec<Digit>,
}

impl IndexCursor {
    /// Build a cursor positioned at the all-zero tuple.
    pub fn new(shape: &[usize]) -> IndexCursor {
        debug_assert!(
            shape.iter().all(|&len| len > 0),
            "every dimension must be non-empty; shape {shape:?}"
        );
        IndexCursor {
            digits: shape.iter().map(|&len| Digit { len, current: 0 }).collect(),
        }
    }

    /// Number of dimensions this cursor enumerates.
    pub fn rank(&self) -> usize {
        self.digits.len()
    }

    /// The current index tuple, outermost dimension first. Pure read.
    pub fn current_indices(&self) -> Vec<usize> {
        self.digits.iter().map(|digit| digit.current).collect()
    }

    /// Step to the next tuple in lexicographic order.
    ///
    /// Returns `false` once the cross-product is exhausted; at that point
    /// every digit has wrapped back to zero. A failed advance and an
    /// outward-propagating carry are the same event, not two.
    pub fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            if digit.current + 1 < digit.len {
                digit.current += 1;
                return true;
            }
            digit.current = 0;
        }
        false
    }

    /// Iterate every index tuple for `shape` from scratch.
    ///
    /// Yields nothing when any dimension is zero-length; yields the single
    /// empty tuple for a rank-0 shape.
    pub fn walk(shape: &[usize]) -> IndexWalk {
        if shape.iter().any(|&len| len == 0) {
            IndexWalk {
                cursor: None,
                started: false,
            }
        } else {
            IndexWalk {
                cursor: Some(IndexCursor::new(shape)),
                started: false,
            }
        }
    }
}

/// Iterator over the index tuples of a shape, in cursor order.
#[derive(Debug, Clone)]
pub struct IndexWalk {
    cursor: Option<IndexCursor>,
    started: bool,
}

impl Iterator for IndexWalk {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let cursor = self.cursor.as_mut()?;
        if self.started {
            if !cursor.advance() {
                self.cursor = None;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(cursor.current_indices())
    }
}
