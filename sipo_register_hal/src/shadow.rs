//! An in-memory mirror of the device's internal bit chain

use heapless::Vec;

/// A fixed capacity ring buffer of the bits most recently shifted into the
/// register. Index 0 is the newest bit, which sits in the first stage of the
/// chain. Once `width` bits are held, pushing another evicts the oldest, as
/// it falls off the end of the physical chain.
///
/// Slots that have never been written since construction are not valid and
/// read back as `None`.
pub struct ShadowRegister<const N: usize> {
    buffer: [bool; N],
    /// Position of the newest bit in `buffer`
    head: usize,
    /// Number of slots that hold a written bit, at most `width`
    valid: usize,
    width: usize,
}

impl<const N: usize> ShadowRegister<N> {
    /// An empty shadow register of `width` bits. Callers make sure
    /// `width <= N`, so the width is clamped rather than checked.
    pub fn new(width: usize) -> Self {
        Self {
            buffer: [false; N],
            head: 0,
            valid: 0,
            width: width.min(N),
        }
    }

    /// Number of bits the chain holds
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of slots written since construction, at most `width`
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// True once every slot has been written at least once
    pub fn is_full(&self) -> bool {
        self.valid == self.width
    }

    /// Shifts `bit` into the front, evicting the oldest bit when full
    pub fn push(&mut self, bit: bool) {
        if self.width == 0 {
            return;
        }

        self.head = (self.head + self.width - 1) % self.width;
        self.buffer[self.head] = bit;

        if self.valid < self.width {
            self.valid += 1;
        }
    }

    /// The bit at `index` from the front, or `None` if that slot was never
    /// written or lies past the end of the chain
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.valid {
            return None;
        }

        Some(self.buffer[(self.head + index) % self.width])
    }

    /// The valid bits, newest first
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.valid).filter_map(move |index| self.get(index))
    }

    /// A copy of the valid bits, newest first
    pub fn to_vec(&self) -> Vec<bool, N> {
        self.iter().collect()
    }

    /// Fills every slot with `bit`, marking them all valid
    pub fn fill(&mut self, bit: bool) {
        self.buffer[..self.width].fill(bit);
        self.head = 0;
        self.valid = self.width;
    }

    /// Copies the chain into `output`, the way a latch pulse copies the
    /// chain onto the parallel outputs. Slots never written come out off.
    pub fn snapshot(&self, output: &mut [bool]) {
        for (index, out) in output.iter_mut().enumerate() {
            *out = self.get(index).unwrap_or(false);
        }
    }

    /// True if the front `bits.len()` slots are valid and equal `bits`
    pub fn starts_with(&self, bits: &[bool]) -> bool {
        bits.iter()
            .enumerate()
            .all(|(index, bit)| self.get(index) == Some(*bit))
    }
}
