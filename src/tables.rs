//! Myanmar character constants, the presentation-form glyph set, and the
//! contextual substitution tables.
//!
//! The tables are plain static data so the traversal logic in
//! [`crate::myanmar`] stays independent of the rule set and the rules can
//! be unit-tested on their own.

/// U+001D, a control scalar the target fonts treat as an invisible cluster
/// break. Written immediately before a Sign E that has been detached from
/// its base so the vowel does not join the preceding cluster.
pub const SEP: char = '\u{001D}';

pub const NA: char = '\u{1014}'; // န Na
pub const RA: char = '\u{101B}'; // ရ Ra
pub const SIGN_U: char = '\u{102F}'; // ု Sign U
pub const SIGN_UU: char = '\u{1030}'; // ူ Sign Uu
pub const SIGN_E: char = '\u{1031}'; // ေ Sign E
pub const DOT_BELOW: char = '\u{1037}'; // ့ Dot Below
pub const MEDIAL_YA: char = '\u{103B}'; // ျ Sign Medial Ya
pub const MEDIAL_RA: char = '\u{103C}'; // ြ Sign Medial Ra
pub const MEDIAL_WA: char = '\u{103D}'; // ွ Sign Medial Wa
pub const MEDIAL_HA: char = '\u{103E}'; // ှ Sign Medial Ha

/// Private-use-area presentation forms. Each stands in for the correct
/// glyph shape of an ordinary character in a specific context, because the
/// target renderer cannot select glyph variants itself. The values match
/// the glyph set shipped in the fonts this crate was written against.
pub mod pua {
    /// Wide form of Medial Ra, wrapping a double-width base.
    pub const MEDIAL_RA_WIDE: char = '\u{E1B2}';
    /// Na with its descender removed, clearing below-base marks.
    pub const NA_SHORT: char = '\u{E107}';
    /// Ra with a shortened leg, clearing a below-base vowel.
    pub const RA_SHORT: char = '\u{E108}';
    /// Sign U dropped low, clear of a Medial Ya or Medial Ra.
    pub const SIGN_U_LOW: char = '\u{E2F1}';
    /// Sign Uu dropped low, clear of a Medial Ya or Medial Ra.
    pub const SIGN_UU_LOW: char = '\u{E2F2}';
    /// Dot Below lowered under an occupied below-base position.
    pub const DOT_BELOW_LOW: char = '\u{E037}';
    /// Dot Below shifted aside for Ra and the low medials.
    pub const DOT_BELOW_SHIFTED: char = '\u{E137}';
    /// Medial Ha tucked under a Medial Ra.
    pub const MEDIAL_HA_UNDER_RA: char = '\u{E1F3}';
}

/// The four medial consonant signs. Up to three may stack on one base, and
/// all of them must visually follow a reordered Sign E.
pub const MEDIALS: &[char] = &[MEDIAL_YA, MEDIAL_RA, MEDIAL_WA, MEDIAL_HA];

/// Double-width bases that take the wide form of Medial Ra.
pub const RA_MEDIAL_WIDE_BASES: &[char] = &[
    '\u{1000}', // က Ka
    '\u{1003}', // ဃ Gha
    '\u{100F}', // ဏ Nna
    '\u{1006}', // ဆ Cha
    '\u{1010}', // တ Ta
    '\u{1011}', // ထ Tha
    '\u{1018}', // ဘ Bha
    '\u{101A}', // ယ Ya
    '\u{101C}', // လ La
    '\u{101E}', // သ Sa
    '\u{101F}', // ဟ Ha
    '\u{1021}', // အ A
];

const BELOW_VOWELS: &[char] = &[SIGN_U, SIGN_UU];
const BELOW_MARKS: &[char] = &[SIGN_U, SIGN_UU, MEDIAL_WA, MEDIAL_HA];
const RA_FORMS: &[char] = &[MEDIAL_RA, pua::MEDIAL_RA_WIDE];
const LOW_VOWELS: &[char] = &[pua::SIGN_U_LOW, pua::SIGN_UU_LOW];

/// What a matched [`ContextRule`] does to the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RuleAction {
    /// Replace the triggering scalar with a presentation form.
    Replace(char),
    /// Detach the Sign E following the trigger: the trigger's slot becomes
    /// the (separator, Sign E) marker and the Sign E's slot receives the
    /// given presentation form.
    DetachSignE(char),
}

/// A contextual substitution rule: when `trigger` sits at position `i` and
/// the scalar at every `(offset, set)` pair lies in its set, `action`
/// applies at `i`. An offset landing outside the buffer is a non-match.
#[derive(Debug)]
pub struct ContextRule {
    pub trigger: char,
    pub context: &'static [(i8, &'static [char])],
    pub action: RuleAction,
}

const fn rule(
    trigger: char,
    context: &'static [(i8, &'static [char])],
    action: RuleAction,
) -> ContextRule {
    ContextRule {
        trigger,
        context,
        action,
    }
}

use RuleAction::{DetachSignE, Replace};

/// The general contextual substitution rules, applied in one forward scan.
///
/// For a given position every matching rule is applied in table order, so
/// for same-slot replacements the last match wins. Context reads always
/// see the live buffer, including substitutions written earlier in the
/// same scan.
pub static CONTEXT_RULES: &[ContextRule] = &[
    // Na's descender collides with anything drawn in the below-base space,
    // even one slot further along the cluster.
    rule(NA, &[(1, BELOW_MARKS)], Replace(pua::NA_SHORT)),
    rule(NA, &[(2, BELOW_VOWELS)], Replace(pua::NA_SHORT)),
    rule(
        NA,
        &[(1, &[SIGN_E]), (2, BELOW_MARKS)],
        DetachSignE(pua::NA_SHORT),
    ),
    // Ra's leg collides with a below-base vowel up to three slots away.
    rule(RA, &[(1, BELOW_VOWELS)], Replace(pua::RA_SHORT)),
    rule(RA, &[(2, BELOW_VOWELS)], Replace(pua::RA_SHORT)),
    rule(RA, &[(3, BELOW_VOWELS)], Replace(pua::RA_SHORT)),
    // Sign U and Sign Uu drop low after Medial Ya or either form of
    // Medial Ra.
    rule(SIGN_U, &[(-1, &[MEDIAL_YA])], Replace(pua::SIGN_U_LOW)),
    rule(SIGN_U, &[(-2, &[MEDIAL_YA])], Replace(pua::SIGN_U_LOW)),
    rule(SIGN_U, &[(-2, RA_FORMS)], Replace(pua::SIGN_U_LOW)),
    rule(SIGN_U, &[(-3, RA_FORMS)], Replace(pua::SIGN_U_LOW)),
    rule(SIGN_UU, &[(-1, &[MEDIAL_YA])], Replace(pua::SIGN_UU_LOW)),
    rule(SIGN_UU, &[(-2, &[MEDIAL_YA])], Replace(pua::SIGN_UU_LOW)),
    rule(SIGN_UU, &[(-2, RA_FORMS)], Replace(pua::SIGN_UU_LOW)),
    rule(SIGN_UU, &[(-3, RA_FORMS)], Replace(pua::SIGN_UU_LOW)),
    // Dot Below dodges whatever already claimed the below-base space. The
    // Ra, low-vowel, and medial contexts take the wider shift.
    rule(DOT_BELOW, &[(-1, BELOW_VOWELS)], Replace(pua::DOT_BELOW_LOW)),
    rule(DOT_BELOW, &[(-1, &[NA])], Replace(pua::DOT_BELOW_LOW)),
    rule(DOT_BELOW, &[(-2, &[NA])], Replace(pua::DOT_BELOW_LOW)),
    rule(DOT_BELOW, &[(-1, &[RA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-2, &[RA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-3, &[RA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-1, LOW_VOWELS)], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-1, &[MEDIAL_WA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-2, &[MEDIAL_WA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-1, &[MEDIAL_YA])], Replace(pua::DOT_BELOW_SHIFTED)),
    rule(DOT_BELOW, &[(-2, &[MEDIAL_YA])], Replace(pua::DOT_BELOW_SHIFTED)),
    // Medial Ha tucks under a Medial Ra two slots back.
    rule(MEDIAL_HA, &[(-2, RA_FORMS)], Replace(pua::MEDIAL_HA_UNDER_RA)),
];
