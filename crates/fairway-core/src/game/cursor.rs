/// Current hole, clamped to `[0, len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCursor {
    index: usize,
    len: usize,
}

impl HoleCursor {
    /// Cursor at the first hole of a course with `len` holes.
    ///
    /// A zero-length cursor stays at index 0 and never moves.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Advance one hole; returns false when already on the last hole
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one hole; returns false when already on the first hole
    pub fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based hole number as shown to players
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }
}
