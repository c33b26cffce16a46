//! Symbols and genes.

use rand::Rng;
use std::fmt;

/// One symbol of a decoded expression.
///
/// The declaration order is the canonical enumeration used by the
/// [`codec`](super::codec): `Symbol::ALL[i]` has code `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    Add,
    Sub,
    Mul,
    Div,
}

impl Symbol {
    /// Number of assigned symbols.
    pub const COUNT: usize = 14;

    /// All symbols in code order.
    pub const ALL: [Symbol; Self::COUNT] = [
        Symbol::D0,
        Symbol::D1,
        Symbol::D2,
        Symbol::D3,
        Symbol::D4,
        Symbol::D5,
        Symbol::D6,
        Symbol::D7,
        Symbol::D8,
        Symbol::D9,
        Symbol::Add,
        Symbol::Sub,
        Symbol::Mul,
        Symbol::Div,
    ];

    /// Position of this symbol in [`Symbol::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_digit(self) -> bool {
        self.index() < 10
    }

    pub fn is_operator(self) -> bool {
        !self.is_digit()
    }

    /// Textual form: `'0'..='9'`, `'+'`, `'-'`, `'*'`, `'/'`.
    pub fn as_char(self) -> char {
        const CHARS: [char; Symbol::COUNT] = [
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/',
        ];
        CHARS[self.index()]
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub fn from_char(ch: char) -> Option<Symbol> {
        Symbol::ALL.iter().copied().find(|s| s.as_char() == ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 4-bit gene value in `0..=15`.
///
/// Only codes below [`Symbol::COUNT`] are assigned; the remaining two decode
/// to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene(u8);

impl Gene {
    /// Largest representable gene value.
    pub const MAX: u8 = 0b1111;

    /// Creates a gene from the low four bits of `value`.
    pub fn new(value: u8) -> Self {
        Gene(value & Self::MAX)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this code is assigned to a symbol.
    pub fn is_assigned(self) -> bool {
        (self.0 as usize) < Symbol::COUNT
    }

    /// Draws uniformly from the 14 assigned codes.
    ///
    /// Unassigned codes are never produced here; they only appear in a
    /// population through crossover or mutation.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Gene(rng.random_range(0..Symbol::COUNT as u8))
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
