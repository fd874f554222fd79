use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Number of 64-bit words backing a [`Bitboard`].
pub const WORDS: usize = 16;

/// Maximum number of cells a [`Bitboard`] can address.
pub const MAX_CELLS: usize = WORDS * 64;

/// A fixed-size bit set of up to 1024 cells.
/// Stored as 16 × u64 words, entirely on the stack.
///
/// The bitboard carries no geometry; interpreting bit `i` as cell
/// `(i % width, i / width)` is the job of [`crate::grid::BitGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Default for Bitboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard { words: [0; WORDS] }
    }

    /// The lowest `n` bits set, everything above cleared.
    pub fn low_bits(n: usize) -> Self {
        debug_assert!(n <= MAX_CELLS);
        let mut bb = Self::empty();
        let full = n / 64;
        for w in bb.words.iter_mut().take(full) {
            *w = u64::MAX;
        }
        let rest = n % 64;
        if rest != 0 {
            bb.words[full] = (1u64 << rest) - 1;
        }
        bb
    }

    /// Construct from raw words.
    #[inline]
    pub const fn from_words(words: [u64; WORDS]) -> Self {
        Bitboard { words }
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < MAX_CELLS);
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < MAX_CELLS);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < MAX_CELLS);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// True if any bit is set.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Population count — number of set bits.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Shift all bits left (toward higher indices) by `n` positions.
    /// Bits shifted beyond 1023 are lost.
    #[inline]
    pub fn shift_left(&self, n: usize) -> Self {
        if n == 0 {
            return *self;
        }
        if n >= MAX_CELLS {
            return Self::empty();
        }
        let word_shift = n / 64;
        let bit_shift = n % 64;
        let mut out = [0u64; WORDS];

        if bit_shift == 0 {
            out[word_shift..].copy_from_slice(&self.words[..WORDS - word_shift]);
        } else {
            for i in word_shift..WORDS {
                out[i] = self.words[i - word_shift] << bit_shift;
                if i > word_shift {
                    out[i] |= self.words[i - word_shift - 1] >> (64 - bit_shift);
                }
            }
        }
        Bitboard { words: out }
    }

    /// Shift all bits right (toward lower indices) by `n` positions.
    /// Bits shifted below 0 are lost.
    #[inline]
    pub fn shift_right(&self, n: usize) -> Self {
        if n == 0 {
            return *self;
        }
        if n >= MAX_CELLS {
            return Self::empty();
        }
        let word_shift = n / 64;
        let bit_shift = n % 64;
        let mut out = [0u64; WORDS];

        if bit_shift == 0 {
            out[..WORDS - word_shift].copy_from_slice(&self.words[word_shift..]);
        } else {
            for i in 0..WORDS - word_shift {
                out[i] = self.words[i + word_shift] >> bit_shift;
                if i + word_shift + 1 < WORDS {
                    out[i] |= self.words[i + word_shift + 1] << (64 - bit_shift);
                }
            }
        }
        Bitboard { words: out }
    }

    /// Iterate over indices of set bits, lowest first.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator {
            words: self.words,
            word_index: 0,
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        let mut out = [0u64; WORDS];
        for (o, (a, b)) in out.iter_mut().zip(self.words.iter().zip(rhs.words.iter())) {
            *o = a & b;
        }
        Bitboard { words: out }
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a &= b;
        }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        let mut out = [0u64; WORDS];
        for (o, (a, b)) in out.iter_mut().zip(self.words.iter().zip(rhs.words.iter())) {
            *o = a | b;
        }
        Bitboard { words: out }
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a |= b;
        }
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        let mut out = [0u64; WORDS];
        for (o, w) in out.iter_mut().zip(self.words.iter()) {
            *o = !w;
        }
        Bitboard { words: out }
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
#[derive(Clone, Debug)]
pub struct BitIterator {
    words: [u64; WORDS],
    word_index: usize,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.word_index < WORDS {
            let w = self.words[self.word_index];
            if w != 0 {
                let bit = w.trailing_zeros() as usize;
                // Clear lowest set bit
                self.words[self.word_index] = w & (w - 1);
                return Some(self.word_index * 64 + bit);
            }
            self.word_index += 1;
        }
        None
    }
}
