//! Genetic representation: symbols, genes, chromosomes, and decoding.
//!
//! A [`Chromosome`] is 10 four-bit [`Gene`]s. Each gene maps through the
//! [`codec`] to one of 14 [`Symbol`]s (digits `0`–`9` and `+ - * /`) or to
//! nothing. [`decode`] turns a chromosome into a well-formed flat
//! expression such as `"5+4*2"`.
//!
//! # Key Types
//!
//! - [`Symbol`]: a digit or operator
//! - [`Gene`]: a 4-bit code
//! - [`Chromosome`]: the 40-bit genome
//!
//! # Submodules
//!
//! - [`codec`]: symbol ↔ code bijection

mod chromosome;
pub mod codec;
mod decode;
mod symbol;

pub use chromosome::{Chromosome, ParseChromosomeError, CHROMOSOME_BITS, GENE_BITS, GENE_COUNT};
pub use decode::decode;
pub use symbol::{Gene, Symbol};
