//! Character-level reshaping of Myanmar text for renderers that lay
//! codepoints out in logical order without complex-script shaping.
//!
//! Four passes run in a fixed order over one mutable buffer:
//!
//! 1. Sign E is moved in front of the stacked medials it visually
//!    precedes.
//! 2. Medial Ra is moved in front of its base, detaching an already
//!    reordered Sign E behind a separator marker where necessary.
//! 3. Medial Ra is substituted with its wide presentation form before
//!    double-width bases.
//! 4. The general contextual substitution table is applied in a single
//!    forward scan.
//!
//! Later passes observe the rewrites of earlier ones. The transform is
//! total: it never fails, holds no shared state, and leaves any input
//! without Myanmar codepoints untouched.

use log::debug;

use crate::buffer::{CharBuffer, MarkerPolicy};
use crate::tables::{self, RuleAction};

/// Rewrites the Myanmar codepoints in `text` into visual order, with
/// presentation-form substitutions applied, using the default
/// [`MarkerPolicy`].
///
/// Markup and non-Myanmar text pass through unchanged. The function is
/// defined for one application to logical-order text; re-applying it to
/// its own output is unsupported.
pub fn reshape(text: &str) -> String {
    reshape_with_policy(text, MarkerPolicy::default())
}

/// Like [`reshape`], with an explicit policy for the separator-marker
/// writes.
pub fn reshape_with_policy(text: &str, policy: MarkerPolicy) -> String {
    if !text.chars().any(is_myanmar) {
        return text.to_owned();
    }

    let mut buf = CharBuffer::new(text, policy);
    reorder_sign_e(&mut buf);
    reorder_medial_ra(&mut buf);
    substitute_medial_ra(&mut buf);
    contextual_substitutions(&mut buf);
    if buf.rewrites() > 0 {
        debug!("applied {} myanmar reshaping rewrites", buf.rewrites());
    }
    buf.into_string()
}

fn is_myanmar(ch: char) -> bool {
    matches!(ch as u32, 0x1000..=0x109F)
}

fn medial(ch: char) -> bool {
    tables::MEDIALS.contains(&ch)
}

/// Sign E is stored after the consonant cluster it is drawn before. Walk
/// it leftward through up to three stacked medials, one position at a
/// time, re-checking class membership after every swap.
fn reorder_sign_e(buf: &mut CharBuffer) {
    for i in 0..buf.len() {
        if buf.get(i) != Some(tables::SIGN_E) {
            continue;
        }
        let mut j = i;
        for _ in 0..3 {
            match buf.at(j, -1) {
                Some(m) if medial(m) => {
                    buf.swap(j - 1, j);
                    j -= 1;
                }
                _ => break,
            }
        }
    }
}

/// Medial Ra wraps around the left of its base, so it must precede the
/// base in visual order. When the slot before it holds an already
/// reordered Sign E, the vowel is detached behind a separator so it keeps
/// drawing first: `[base, e, ra]` becomes `[sep e, ra, base]`.
fn reorder_medial_ra(buf: &mut CharBuffer) {
    let mut i = 0;
    while i < buf.len() {
        if buf.get(i) != Some(tables::MEDIAL_RA) {
            i += 1;
            continue;
        }
        if buf.at(i, -1) == Some(tables::SIGN_E) {
            // A Sign E with no base slot before it is left alone.
            if i >= 2 {
                let base = buf.take(i - 2);
                match buf.policy() {
                    MarkerPolicy::Legacy => {
                        buf.set_pair(i - 2, tables::SEP, tables::SIGN_E);
                        buf.set(i - 1, tables::MEDIAL_RA);
                        buf.put(i, base);
                    }
                    MarkerPolicy::Shifted => {
                        // The Sign E at i - 1 stays put; the separator
                        // takes the base's slot and the base moves past
                        // the medial, growing the buffer by one.
                        buf.set(i - 2, tables::SEP);
                        buf.insert_slot(i + 1, base);
                        i += 1;
                    }
                }
            }
        } else if i >= 1 {
            buf.swap(i - 1, i);
        }
        i += 1;
    }
}

/// Substitutes the wide form of Medial Ra before double-width bases.
fn substitute_medial_ra(buf: &mut CharBuffer) {
    for i in 0..buf.len() {
        if buf.get(i) == Some(tables::MEDIAL_RA)
            && buf
                .at(i, 1)
                .map_or(false, |c| tables::RA_MEDIAL_WIDE_BASES.contains(&c))
        {
            buf.set(i, tables::pua::MEDIAL_RA_WIDE);
        }
    }
}

/// Applies [`tables::CONTEXT_RULES`] in a single forward scan. The
/// trigger is the value a slot held when the scan reached it; context
/// reads see the live buffer.
fn contextual_substitutions(buf: &mut CharBuffer) {
    let mut i = 0;
    while i < buf.len() {
        let Some(trigger) = buf.get(i) else {
            i += 1;
            continue;
        };
        let mut inserted = 0;
        for rule in tables::CONTEXT_RULES {
            if rule.trigger != trigger || !context_matches(buf, i, rule.context) {
                continue;
            }
            match rule.action {
                RuleAction::Replace(form) => buf.set(i, form),
                RuleAction::DetachSignE(form) => {
                    inserted = detach_sign_e(buf, i, form);
                }
            }
        }
        i += 1 + inserted;
    }
}

fn context_matches(buf: &CharBuffer, i: usize, context: &[(i8, &[char])]) -> bool {
    context
        .iter()
        .all(|&(offset, set)| buf.at(i, offset as isize).map_or(false, |c| set.contains(&c)))
}

/// The triggering consonant's slot becomes the (separator, Sign E) marker
/// and the Sign E's slot receives the presentation form. Returns the
/// number of extra positions created.
fn detach_sign_e(buf: &mut CharBuffer, i: usize, form: char) -> usize {
    match buf.policy() {
        MarkerPolicy::Legacy => {
            buf.set_pair(i, tables::SEP, tables::SIGN_E);
            buf.set(i + 1, form);
            0
        }
        MarkerPolicy::Shifted => {
            buf.set(i, tables::SEP);
            buf.insert(i + 1, tables::SIGN_E);
            buf.set(i + 2, form);
            1
        }
    }
}
