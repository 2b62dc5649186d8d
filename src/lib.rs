#![warn(rust_2018_idioms)]

//! Reordering and presentation-form substitution for Myanmar-script text
//! destined for renderers that lay codepoints out in raw logical order,
//! without complex-script shaping.
//!
//! The transform rewrites a flat character stream so that a naive
//! left-to-right renderer places the pre-base vowel sign and Medial Ra
//! before the glyphs they visually precede, and picks the correct
//! private-use-area glyph variant for characters whose shape depends on
//! their neighbours. Markup passes through untouched.
//!
//! ```
//! let shaped = myanmar_reshaper::reshape("\u{1014}\u{102F}");
//! assert_eq!(shaped, "\u{E107}\u{102F}");
//! ```

mod buffer;
pub mod myanmar;
/// Presentation-form codepoints and the contextual substitution tables.
pub mod tables;

pub use crate::buffer::MarkerPolicy;
pub use crate::myanmar::{reshape, reshape_with_policy};
