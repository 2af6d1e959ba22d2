//! Palette constants and index lookup.
//!
//! The seven renderable colors are stored in the order the Inky panel
//! expects them, followed by a fully transparent `Clean` entry that sits one
//! past the renderable range and is only reached through the pipeline's
//! transparency short-circuit.

use crate::color::Rgba8;

/// Number of renderable (active) palette colors.
pub const PALETTE_SIZE: usize = 7;

/// Palette index returned by [`lookup_index`] when no active color matches
/// exactly (Red).
const LOOKUP_FALLBACK: InkColor = InkColor::Red;

/// Ordered palette: the seven active colors plus the transparent sentinel.
pub const PALETTE_ORDER: [Rgba8; PALETTE_SIZE + 1] = [
    Rgba8::opaque(0, 0, 0),       // Black
    Rgba8::opaque(255, 255, 255), // White
    Rgba8::opaque(0, 255, 0),     // Green
    Rgba8::opaque(0, 0, 255),     // Blue
    Rgba8::opaque(255, 0, 0),     // Red
    Rgba8::opaque(255, 255, 0),   // Yellow
    Rgba8::opaque(255, 140, 0),   // Orange
    Rgba8::new(255, 255, 255, 0), // Clean
];

/// A palette index with a name.
///
/// The discriminant is the index into [`PALETTE_ORDER`]. `Clean` (7) equals
/// [`PALETTE_SIZE`] and marks a pixel as transparent / not renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum InkColor {
    Black = 0,
    White = 1,
    Green = 2,
    Blue = 3,
    Red = 4,
    Yellow = 5,
    Orange = 6,
    Clean = 7,
}

impl InkColor {
    /// Every palette entry, in index order, including `Clean`.
    pub const ALL: [InkColor; PALETTE_SIZE + 1] = [
        InkColor::Black,
        InkColor::White,
        InkColor::Green,
        InkColor::Blue,
        InkColor::Red,
        InkColor::Yellow,
        InkColor::Orange,
        InkColor::Clean,
    ];

    /// The renderable entries only.
    pub const ACTIVE: [InkColor; PALETTE_SIZE] = [
        InkColor::Black,
        InkColor::White,
        InkColor::Green,
        InkColor::Blue,
        InkColor::Red,
        InkColor::Yellow,
        InkColor::Orange,
    ];

    /// Numeric palette index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an entry by raw index, `None` if outside `0..=PALETTE_SIZE`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The display color for this entry.
    #[inline]
    pub const fn rgba(self) -> Rgba8 {
        PALETTE_ORDER[self as usize]
    }

    /// Returns true for the seven renderable entries.
    #[inline]
    pub const fn is_active(self) -> bool {
        (self as usize) < PALETTE_SIZE
    }

    /// Lowercase name, as used in logs and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            InkColor::Black => "black",
            InkColor::White => "white",
            InkColor::Green => "green",
            InkColor::Blue => "blue",
            InkColor::Red => "red",
            InkColor::Yellow => "yellow",
            InkColor::Orange => "orange",
            InkColor::Clean => "clean",
        }
    }
}

/// Find the palette index of a color by exact equality.
///
/// Scans the seven active colors in order. Colors that match none of them
/// (including any alpha other than 255) resolve to Red (index 4).
///
/// # Example
///
/// ```
/// use inky_quant::{lookup_index, InkColor, Rgba8};
///
/// assert_eq!(lookup_index(Rgba8::opaque(255, 255, 0)), InkColor::Yellow);
/// assert_eq!(lookup_index(Rgba8::opaque(1, 2, 3)), InkColor::Red);
/// ```
pub fn lookup_index(color: Rgba8) -> InkColor {
    for ink in InkColor::ACTIVE {
        if ink.rgba() == color {
            return ink;
        }
    }
    LOOKUP_FALLBACK
}

/// Pack the RGB channels into a 24-bit key, dropping alpha.
///
/// The layout is `0x00RRGGBB`; [`unpack`] is its exact inverse.
#[inline]
pub const fn pack(color: Rgba8) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Rebuild a color from a packed 24-bit key.
///
/// Alpha is not part of the key and comes back as 255.
#[inline]
pub const fn unpack(key: u32) -> Rgba8 {
    Rgba8::opaque(
        ((key >> 16) & 0xFF) as u8,
        ((key >> 8) & 0xFF) as u8,
        (key & 0xFF) as u8,
    )
}

/// Translate a raw palette index into its display color.
///
/// # Panics
///
/// Panics if `index > PALETTE_SIZE`. Such an index can only come from a bug
/// in the classifier or remap table, never from pixel data.
pub fn display_color(index: usize) -> Rgba8 {
    assert!(
        index <= PALETTE_SIZE,
        "palette index {} out of range 0..={}",
        index,
        PALETTE_SIZE
    );
    PALETTE_ORDER[index]
}
