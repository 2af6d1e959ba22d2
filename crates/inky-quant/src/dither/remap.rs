//! Curated source-color remap rules.

use super::matrix::{DitherPattern, DITHER_PATTERNS};
use crate::color::Rgba8;
use crate::palette::{lookup_index, InkColor};

/// Default match radius around each rule's source color (RGB, 0..=255 scale).
pub const DEFAULT_REMAP_THRESHOLD: f32 = 3.0;

/// Source colors used by the weather icon artwork.
pub mod source {
    use crate::color::Rgba8;

    pub const YELLOW: Rgba8 = Rgba8::opaque(255, 234, 49);
    pub const BLUE: Rgba8 = Rgba8::opaque(34, 160, 239);
    pub const ORANGE: Rgba8 = Rgba8::opaque(254, 180, 47);
    pub const RED: Rgba8 = Rgba8::opaque(250, 80, 46);
    /// Red-orange; rendered as plain red.
    pub const RORANGE: Rgba8 = Rgba8::opaque(254, 84, 22);
    pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);

    pub const PALE_YELLOW: Rgba8 = Rgba8::opaque(224, 217, 181);

    pub const GREY0: Rgba8 = Rgba8::opaque(229, 229, 229);
    pub const GREY1: Rgba8 = Rgba8::opaque(198, 198, 198);
    pub const GREY2: Rgba8 = Rgba8::opaque(174, 170, 179);
    pub const GREY3: Rgba8 = Rgba8::opaque(120, 120, 120);
    /// Not referenced by any rule; falls through to the classifier.
    pub const GREY4: Rgba8 = Rgba8::opaque(111, 111, 111);
}

/// One source color and the two palette colors it dithers between.
///
/// [`SOURCE_RULES`] holds the built-in rules. Hand-built rules must keep
/// `dither_pattern` below `DITHER_PATTERNS.len()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemapRule {
    pub source: Rgba8,
    pub dest_when_set: Rgba8,
    pub dest_when_clear: Rgba8,
    /// Index into [`DITHER_PATTERNS`].
    pub dither_pattern: usize,
}

impl RemapRule {
    const fn new(
        source: Rgba8,
        dest_when_set: Rgba8,
        dest_when_clear: Rgba8,
        dither_pattern: usize,
    ) -> Self {
        Self {
            source,
            dest_when_set,
            dest_when_clear,
            dither_pattern,
        }
    }

    /// The rule's dither pattern.
    ///
    /// # Panics
    ///
    /// Panics if `dither_pattern` is not an index into [`DITHER_PATTERNS`].
    #[inline]
    pub fn pattern(&self) -> DitherPattern {
        match DITHER_PATTERNS.get(self.dither_pattern) {
            Some(pattern) => *pattern,
            None => panic!(
                "dither pattern {} out of range 0..{}",
                self.dither_pattern,
                DITHER_PATTERNS.len()
            ),
        }
    }

    /// Destination color for the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the rule's pattern index is invalid, see [`pattern`](Self::pattern).
    #[inline]
    pub fn destination(&self, x: u32, y: u32) -> Rgba8 {
        if self.pattern().is_set(x, y) {
            self.dest_when_set
        } else {
            self.dest_when_clear
        }
    }
}

const BLACK: Rgba8 = InkColor::Black.rgba();
const WHITE: Rgba8 = InkColor::White.rgba();
const BLUE: Rgba8 = InkColor::Blue.rgba();
const RED: Rgba8 = InkColor::Red.rgba();
const YELLOW: Rgba8 = InkColor::Yellow.rgba();
const ORANGE: Rgba8 = InkColor::Orange.rgba();

/// The rule list, in priority order.
///
/// The second GREY3 rule can never match (the first one always wins) but is
/// kept so the table stays identical to the one the artwork was tuned with.
pub const SOURCE_RULES: [RemapRule; 13] = [
    RemapRule::new(source::YELLOW, YELLOW, YELLOW, 0),
    RemapRule::new(source::BLUE, BLUE, BLUE, 0),
    RemapRule::new(source::ORANGE, ORANGE, ORANGE, 0),
    RemapRule::new(source::RED, RED, RED, 0),
    RemapRule::new(source::RORANGE, RED, RED, 0),
    RemapRule::new(source::WHITE, WHITE, WHITE, 0),
    RemapRule::new(source::BLACK, BLACK, BLACK, 0),
    RemapRule::new(source::PALE_YELLOW, YELLOW, WHITE, 2),
    RemapRule::new(source::GREY0, BLACK, WHITE, 1),
    RemapRule::new(source::GREY1, BLACK, WHITE, 1),
    RemapRule::new(source::GREY2, BLACK, WHITE, 2),
    RemapRule::new(source::GREY3, BLACK, WHITE, 2),
    RemapRule::new(source::GREY3, BLACK, WHITE, 2),
];

/// Ordered, first-match-wins remap over [`SOURCE_RULES`].
///
/// # Example
///
/// ```
/// use inky_quant::{InkColor, RemapTable, Rgba8};
///
/// let table = RemapTable::new();
/// let pale_yellow = Rgba8::opaque(224, 217, 181);
///
/// assert_eq!(table.remap(pale_yellow, 0, 0), Some(InkColor::White));
/// assert_eq!(table.remap(pale_yellow, 1, 0), Some(InkColor::Yellow));
/// assert_eq!(table.remap(Rgba8::opaque(90, 10, 200), 0, 0), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RemapTable {
    rules: &'static [RemapRule],
    threshold: f32,
}

impl RemapTable {
    /// The built-in rules with the default 3.0 threshold.
    pub const fn new() -> Self {
        Self {
            rules: &SOURCE_RULES,
            threshold: DEFAULT_REMAP_THRESHOLD,
        }
    }

    /// Override the match radius. A source matches when its distance to the
    /// input is strictly below `threshold`.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Current match radius.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The rules in evaluation order.
    #[inline]
    pub fn rules(&self) -> &'static [RemapRule] {
        self.rules
    }

    /// Index of the first rule whose source lies within the threshold.
    pub fn find_rule(&self, color: Rgba8) -> Option<usize> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.source.distance(color) < self.threshold {
                return Some(i);
            }
        }
        None
    }

    /// Resolve a curated color at pixel `(x, y)`.
    ///
    /// Returns `None` when no rule matches; the caller then falls back to
    /// the [`ColorClassifier`](crate::ColorClassifier). Alpha is ignored.
    pub fn remap(&self, color: Rgba8, x: u32, y: u32) -> Option<InkColor> {
        self.find_rule(color)
            .map(|i| lookup_index(self.rules[i].destination(x, y)))
    }
}

impl Default for RemapTable {
    fn default() -> Self {
        Self::new()
    }
}
