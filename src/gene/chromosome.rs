//! The 40-bit chromosome.

use super::codec;
use super::symbol::{Gene, Symbol};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Genes per chromosome.
pub const GENE_COUNT: usize = 10;

/// Bits per gene.
pub const GENE_BITS: usize = 4;

/// Bits per chromosome.
pub const CHROMOSOME_BITS: usize = GENE_COUNT * GENE_BITS;

const MASK: u64 = (1 << CHROMOSOME_BITS) - 1;

/// Unassigned code used to pad [`Chromosome::from_symbols`].
const PAD: u8 = Gene::MAX;

/// A fixed-length genome of [`GENE_COUNT`] genes.
///
/// Bits are numbered `0..40` from the most significant bit of gene 0, which
/// is also the order of the textual form:
///
/// ```
/// use u_exprga::gene::Chromosome;
///
/// let c: Chromosome = "0101101001011111111111111111111111111111".parse().unwrap();
/// assert!(!c.bit(0));
/// assert!(c.bit(1));
/// assert_eq!(c.to_string().len(), 40);
/// ```
///
/// `Chromosome` is `Copy`; every operator returns a fresh value, so a
/// chromosome recorded as a generation's best can never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: u64,
}

impl Chromosome {
    /// Builds a chromosome from its raw bits. Bits above [`CHROMOSOME_BITS`]
    /// are discarded.
    pub fn from_bits(bits: u64) -> Self {
        Self { bits: bits & MASK }
    }

    /// Builds a chromosome from ten genes.
    pub fn from_genes(genes: [Gene; GENE_COUNT]) -> Self {
        let bits = genes
            .iter()
            .fold(0u64, |acc, g| (acc << GENE_BITS) | g.value() as u64);
        Self { bits }
    }

    /// Encodes up to ten symbols, padding the remaining genes with an
    /// unassigned code. Returns `None` for more than ten symbols.
    pub fn from_symbols(symbols: &[Symbol]) -> Option<Self> {
        if symbols.len() > GENE_COUNT {
            return None;
        }
        let mut genes = [Gene::new(PAD); GENE_COUNT];
        for (slot, &s) in genes.iter_mut().zip(symbols) {
            *slot = codec::encode(s);
        }
        Some(Self::from_genes(genes))
    }

    /// Encodes an expression string such as `"5+4"`.
    ///
    /// Returns `None` if the text is longer than ten symbols or contains a
    /// character that is not a symbol.
    pub fn from_expression(expr: &str) -> Option<Self> {
        let symbols: Option<Vec<Symbol>> = expr.chars().map(Symbol::from_char).collect();
        Self::from_symbols(&symbols?)
    }

    /// Creates a chromosome whose genes are drawn uniformly from the assigned
    /// codes.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut genes = [Gene::new(0); GENE_COUNT];
        for g in genes.iter_mut() {
            *g = Gene::random(rng);
        }
        Self::from_genes(genes)
    }

    /// Raw bits, right-aligned.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Returns bit `i`, where bit 0 is the leftmost.
    ///
    /// # Panics
    /// Panics if `i >= CHROMOSOME_BITS`.
    pub fn bit(&self, i: usize) -> bool {
        assert!(i < CHROMOSOME_BITS, "bit index {i} out of range");
        (self.bits >> (CHROMOSOME_BITS - 1 - i)) & 1 == 1
    }

    /// Returns gene `i`.
    ///
    /// # Panics
    /// Panics if `i >= GENE_COUNT`.
    pub fn gene(&self, i: usize) -> Gene {
        assert!(i < GENE_COUNT, "gene index {i} out of range");
        let shift = (GENE_COUNT - 1 - i) * GENE_BITS;
        Gene::new(((self.bits >> shift) & 0xF) as u8)
    }

    /// All genes in order.
    pub fn genes(&self) -> [Gene; GENE_COUNT] {
        std::array::from_fn(|i| self.gene(i))
    }

    /// Returns a copy with the bits set in `mask` flipped.
    pub(crate) fn flipped(self, mask: u64) -> Self {
        Self::from_bits(self.bits ^ mask)
    }

    /// Mask selecting bits `i..CHROMOSOME_BITS` (the tail from bit `i`).
    pub(crate) fn tail_mask(i: usize) -> u64 {
        debug_assert!(i <= CHROMOSOME_BITS);
        if i == CHROMOSOME_BITS {
            0
        } else {
            MASK >> i
        }
    }

    /// Mask with only bit `i` set.
    pub(crate) fn bit_mask(i: usize) -> u64 {
        debug_assert!(i < CHROMOSOME_BITS);
        1 << (CHROMOSOME_BITS - 1 - i)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:040b}", self.bits)
    }
}

/// Error returned when parsing a chromosome from a bit string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseChromosomeError {
    #[error("expected 40 bits, got {0}")]
    Length(usize),

    #[error("invalid bit {ch:?} at position {pos}")]
    InvalidBit { ch: char, pos: usize },
}

impl FromStr for Chromosome {
    type Err = ParseChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CHROMOSOME_BITS {
            return Err(ParseChromosomeError::Length(len));
        }
        let mut bits = 0u64;
        for (pos, ch) in s.chars().enumerate() {
            let b = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(ParseChromosomeError::InvalidBit { ch, pos }),
            };
            bits = (bits << 1) | b;
        }
        Ok(Self { bits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_genes_round_trip() {
        let genes: [Gene; GENE_COUNT] = std::array::from_fn(|i| Gene::new(i as u8 + 3));
        let c = Chromosome::from_genes(genes);
        assert_eq!(c.genes(), genes);
        assert_eq!(c.gene(0).value(), 3);
        assert_eq!(c.gene(9).value(), 12);
    }

    #[test]
    fn test_bit_order_matches_text() {
        let c = Chromosome::from_genes([Gene::new(0b1000); GENE_COUNT]);
        let text = c.to_string();
        for (i, ch) in text.chars().enumerate() {
            assert_eq!(c.bit(i), ch == '1', "bit {i}");
        }
        assert!(c.bit(0));
        assert!(!c.bit(1));
        assert!(c.bit(4));
    }

    #[test]
    fn test_parse_and_display() {
        let text = "0101101001010000000000000000000011111111";
        let c: Chromosome = text.parse().expect("valid bits");
        assert_eq!(c.to_string(), text);
        assert_eq!(c.gene(0).value(), 0b0101);
        assert_eq!(c.gene(1).value(), 0b1010);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "0101".parse::<Chromosome>(),
            Err(ParseChromosomeError::Length(4))
        );
        let bad = format!("{}2", "0".repeat(39));
        assert_eq!(
            bad.parse::<Chromosome>(),
            Err(ParseChromosomeError::InvalidBit { ch: '2', pos: 39 })
        );
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        let c = Chromosome::from_bits(u64::MAX);
        assert_eq!(c.bits(), MASK);
        assert_eq!(c.to_string(), "1".repeat(40));
    }

    #[test]
    fn test_from_expression_pads_with_unassigned() {
        let c = Chromosome::from_expression("5+5").expect("encodable");
        assert_eq!(c.gene(0).value(), 5);
        assert_eq!(c.gene(1).value(), 10);
        assert_eq!(c.gene(2).value(), 5);
        for i in 3..GENE_COUNT {
            assert!(!c.gene(i).is_assigned());
        }
    }

    #[test]
    fn test_from_expression_rejects_bad_input() {
        assert!(Chromosome::from_expression("5+5x").is_none());
        assert!(Chromosome::from_expression("1+2+3+4+5+6").is_none());
    }

    #[test]
    fn test_random_uses_assigned_codes() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let c = Chromosome::random(&mut rng);
            assert!(c.genes().iter().all(|g| g.is_assigned()));
        }
    }

    #[test]
    fn test_masks() {
        assert_eq!(Chromosome::tail_mask(0), MASK);
        assert_eq!(Chromosome::tail_mask(CHROMOSOME_BITS), 0);
        assert_eq!(Chromosome::tail_mask(39), 1);
        assert_eq!(Chromosome::bit_mask(39), 1);
        assert_eq!(Chromosome::bit_mask(0), 1 << 39);
    }
}
