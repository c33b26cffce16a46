//! Gene codec: the bijection between symbols and 4-bit codes.
//!
//! Codes are assigned by position in [`Symbol::ALL`]: `'0'` is `0000`,
//! `'9'` is `1001`, `'+'` is `1010`, and `'/'` is `1101`. Codes `1110` and
//! `1111` are unassigned.

use super::symbol::{Gene, Symbol};

/// Returns the gene code for `symbol`.
pub fn encode(symbol: Symbol) -> Gene {
    Gene::new(symbol.index() as u8)
}

/// Returns the symbol for `gene`, or `None` for an unassigned code.
pub fn decode(gene: Gene) -> Option<Symbol> {
    Symbol::ALL.get(gene.value() as usize).copied()
}
