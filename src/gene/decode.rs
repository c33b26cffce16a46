//! Chromosome → expression decoding.

use super::chromosome::{Chromosome, GENE_COUNT};
use super::codec;

/// Decodes a chromosome into a well-formed flat expression.
///
/// Genes are mapped through the codec in order; unassigned codes are
/// skipped. The remaining symbols are filtered so that digits and operators
/// strictly alternate, starting with a digit: a symbol of the wrong kind is
/// dropped and the expectation stays as it was. A trailing operator is
/// removed. The result is either empty or matches `digit (op digit)*`.
///
/// # Examples
///
/// ```
/// use u_exprga::gene::{decode, Chromosome};
///
/// // "+ 5 5 * 3 -" filters to "5*3"
/// let c = Chromosome::from_expression("+55*3-").unwrap();
/// assert_eq!(decode(&c), "5*3");
/// ```
pub fn decode(chromosome: &Chromosome) -> String {
    let mut expr = String::with_capacity(GENE_COUNT);
    let mut expect_digit = true;
    let mut last_is_operator = false;

    for symbol in chromosome.genes().into_iter().filter_map(codec::decode) {
        if symbol.is_digit() == expect_digit {
            expr.push(symbol.as_char());
            last_is_operator = !expect_digit;
            expect_digit = !expect_digit;
        }
    }

    if last_is_operator {
        expr.pop();
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::Gene;

    fn decode_str(symbols: &str) -> String {
        decode(&Chromosome::from_expression(symbols).expect("encodable"))
    }

    #[test]
    fn test_valid_expression_passes_through() {
        assert_eq!(decode_str("5+5"), "5+5");
        assert_eq!(decode_str("1+2*3-4/5"), "1+2*3-4/5");
    }

    #[test]
    fn test_leading_operator_dropped() {
        assert_eq!(decode_str("*+5"), "5");
    }

    #[test]
    fn test_consecutive_digits_keep_first() {
        assert_eq!(decode_str("123+45"), "1+4");
    }

    #[test]
    fn test_consecutive_operators_keep_first() {
        assert_eq!(decode_str("7+-*2"), "7+2");
    }

    #[test]
    fn test_trailing_operator_dropped() {
        assert_eq!(decode_str("9-"), "9");
        assert_eq!(decode_str("9-8*"), "9-8");
    }

    #[test]
    fn test_unassigned_codes_do_not_terminate() {
        // 5, <14>, +, <15>, 4
        let genes = [5, 14, 10, 15, 4, 15, 15, 15, 15, 15].map(Gene::new);
        assert_eq!(decode(&Chromosome::from_genes(genes)), "5+4");
    }

    #[test]
    fn test_all_unassigned_is_empty() {
        let c = Chromosome::from_genes([Gene::new(15); GENE_COUNT]);
        assert_eq!(decode(&c), "");
        assert_eq!(decode(&Chromosome::from_bits(u64::MAX)), "");
    }

    #[test]
    fn test_operators_only_is_empty() {
        assert_eq!(decode_str("+-*/"), "");
    }

    #[test]
    fn test_decode_is_pure() {
        let c = Chromosome::from_expression("3*3").expect("encodable");
        assert_eq!(decode(&c), decode(&c));
    }
}
