/// A 2×2 ordered dither pattern.
///
/// Indexed as `[x & 1][y & 1]`. A set cell selects the rule's
/// `dest_when_set` color, a clear cell selects `dest_when_clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherPattern([[bool; 2]; 2]);

impl DitherPattern {
    /// Wrap a raw `[x parity][y parity]` grid.
    pub const fn new(cells: [[bool; 2]; 2]) -> Self {
        Self(cells)
    }

    /// Cell for the pixel at `(x, y)`.
    #[inline]
    pub const fn is_set(&self, x: u32, y: u32) -> bool {
        self.0[(x & 1) as usize][(y & 1) as usize]
    }

    /// Number of set cells out of four.
    pub fn density(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell).count()
    }
}

const O: bool = false;
const X: bool = true;

/// The five patterns, for 0/4 through 4/4 coverage of `dest_when_set`.
pub const DITHER_PATTERNS: [DitherPattern; 5] = [
    DitherPattern::new([[O, O], [O, O]]),
    DitherPattern::new([[X, O], [O, O]]),
    DitherPattern::new([[O, X], [X, O]]),
    DitherPattern::new([[O, X], [X, X]]),
    DitherPattern::new([[X, X], [X, X]]),
];
