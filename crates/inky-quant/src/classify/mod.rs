//! Nearest-color classification for colors the remap table does not cover.
//!
//! # Algorithm
//!
//! Evaluated in this exact order:
//!
//! 1. **Greyscale**: achromatic colors go to Black or White, whichever is
//!    nearer (strict `<`, so an exact tie would favor White).
//! 2. **Transparency**: a non-greyscale color with alpha below 200 returns
//!    index `PALETTE_SIZE - 1`.
//! 3. **Chromatic**: nearest of Green, Blue, Red, Yellow, Orange; the first
//!    strict minimum wins, so ties favor the lower index.
//!
//! # Transparency index
//!
//! Step 2 returns index 6, which is Orange in the active table, and not the
//! `Clean` entry at index 7. This mirrors the behavior the device images were
//! produced with and is kept as-is until the intent is settled. In the
//! default [`Quantizer`](crate::Quantizer) configuration the pipeline's own
//! transparency check (same 200 cut-off) runs first, so step 2 is only
//! reachable when the pipeline threshold is lowered.

mod nearest;

pub use nearest::{ColorClassifier, CLASSIFIER_ALPHA_THRESHOLD};
