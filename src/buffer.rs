//! The slot buffer the reshaping passes mutate in place.

use tinyvec::{tiny_vec, TinyVec};

/// One buffer position. A slot normally holds exactly one scalar; the
/// separator-marker writes may leave two scalars in a single slot under
/// [`MarkerPolicy::Legacy`].
pub(crate) type Slot = TinyVec<[char; 2]>;

/// Controls how the two-scalar (separator, Sign E) marker writes behave.
///
/// The historical implementation stored both scalars in a single buffer
/// cell, so positions after the write were not shifted and every later
/// context offset was computed over the unshifted buffer. Whether that was
/// intended is unknowable at this point; the fonts in circulation were
/// tuned against it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MarkerPolicy {
    /// The pair shares one position. Output is byte-for-byte compatible
    /// with the historical implementation.
    #[default]
    Legacy,
    /// The pair occupies two positions and every later context offset sees
    /// the shifted buffer.
    Shifted,
}

/// An owned, randomly indexable sequence of scalars, built once per
/// `reshape` call and flattened back into a `String` at the end.
pub(crate) struct CharBuffer {
    slots: Vec<Slot>,
    policy: MarkerPolicy,
    rewrites: usize,
}

impl CharBuffer {
    pub fn new(text: &str, policy: MarkerPolicy) -> Self {
        let slots = text.chars().map(|c| tiny_vec!([char; 2] => c)).collect();
        CharBuffer {
            slots,
            policy,
            rewrites: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> MarkerPolicy {
        self.policy
    }

    pub fn rewrites(&self) -> usize {
        self.rewrites
    }

    /// The scalar at position `i`, if `i` is in range and the slot holds a
    /// single scalar. A marker slot holding two scalars never matches any
    /// single-character comparison, mirroring the historical buffer where
    /// a two-character cell compared unequal to every trigger and context
    /// character.
    pub fn get(&self, i: usize) -> Option<char> {
        match &self.slots.get(i)?[..] {
            &[c] => Some(c),
            _ => None,
        }
    }

    /// The scalar at signed offset `delta` from `i`. An offset landing
    /// outside `[0, len)` is a non-match, never a wraparound.
    pub fn at(&self, i: usize, delta: isize) -> Option<char> {
        self.get(i.checked_add_signed(delta)?)
    }

    pub fn set(&mut self, i: usize, c: char) {
        self.slots[i] = tiny_vec!([char; 2] => c);
        self.rewrites += 1;
    }

    /// Writes two scalars into the single slot at `i`. Positions after `i`
    /// are unaffected; only `MarkerPolicy::Legacy` call sites use this.
    pub fn set_pair(&mut self, i: usize, c1: char, c2: char) {
        self.slots[i] = tiny_vec!([char; 2] => c1, c2);
        self.rewrites += 1;
    }

    /// Inserts `c` as a genuine position, shifting everything after it.
    pub fn insert(&mut self, i: usize, c: char) {
        self.slots.insert(i, tiny_vec!([char; 2] => c));
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.rewrites += 1;
    }

    /// Removes and returns the whole slot at `i`, leaving an empty slot
    /// behind. The caller is expected to refill or relocate it.
    pub fn take(&mut self, i: usize) -> Slot {
        std::mem::take(&mut self.slots[i])
    }

    pub fn put(&mut self, i: usize, slot: Slot) {
        self.slots[i] = slot;
    }

    pub fn insert_slot(&mut self, i: usize, slot: Slot) {
        self.slots.insert(i, slot);
    }

    pub fn into_string(self) -> String {
        self.slots.into_iter().flatten().collect()
    }
}
