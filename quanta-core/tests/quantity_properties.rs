use proptest::prelude::*;
use quanta_core::{QuantityErrorKind, Suffix, parse_quantity};

const DECIMAL: [(&str, u32); 5] = [("k", 3), ("M", 6), ("G", 9), ("T", 12), ("P", 15)];
const BINARY: [(&str, u32); 5] = [("Ki", 10), ("Mi", 20), ("Gi", 30), ("Ti", 40), ("Pi", 50)];

proptest! {
    #[test]
    fn decimal_suffix_is_exact(whole in 0_i64..1_000, frac in 0_i64..1_000, idx in 0_usize..DECIMAL.len()) {
        let (symbol, exp) = DECIMAL[idx];
        let input = format!("{whole}.{frac:03}{symbol}");
        let want = (whole * 1_000 + frac) * 10_i64.pow(exp - 3);
        prop_assert_eq!(parse_quantity(&input).unwrap(), want);
    }

    #[test]
    fn binary_suffix_is_exact(value in 0_i64..8_192, idx in 0_usize..BINARY.len()) {
        let (symbol, exp) = BINARY[idx];
        let input = format!("{value}{symbol}");
        prop_assert_eq!(parse_quantity(&input).unwrap(), value << exp);
    }

    #[test]
    fn binary_halves_are_exact(value in 0_i64..8_192, idx in 0_usize..BINARY.len()) {
        let (symbol, exp) = BINARY[idx];
        let input = format!("{value}.5{symbol}");
        prop_assert_eq!(parse_quantity(&input).unwrap(), (value << exp) + (1 << (exp - 1)));
    }

    #[test]
    fn parsing_is_idempotent(input in "[+-]?[0-9]{0,4}(\\.[0-9]{0,3})?(m|k|M|Ki|Mi|Q|e2)?") {
        prop_assert_eq!(parse_quantity(&input), parse_quantity(&input));
    }

    #[test]
    fn sign_is_symmetric(input in "[0-9]{1,6}(\\.[0-9]{1,3})?(k|M|G|Ki|Mi|Gi)?") {
        if let Ok(value) = parse_quantity(&input) {
            let negated = format!("-{input}");
            prop_assert_eq!(parse_quantity(&negated).unwrap(), -value);
            let plus = format!("+{input}");
            prop_assert_eq!(parse_quantity(&plus).unwrap(), value);
        }
    }

    #[test]
    fn leading_zeros_do_not_change_value(zeros in 0_usize..20, value in 0_i64..1_000_000) {
        let input = format!("{}{value}", "0".repeat(zeros));
        prop_assert_eq!(parse_quantity(&input).unwrap(), value);
    }

    #[test]
    fn milli_rejects_instead_of_rounding(value in 1_i64..1_000_000) {
        prop_assume!(value % 1_000 != 0);
        let input = format!("{value}m");
        prop_assert_eq!(
            parse_quantity(&input).unwrap_err().kind(),
            QuantityErrorKind::NonIntegralResult
        );
    }

    #[test]
    fn unknown_suffix_is_rejected(value in 0_i64..1_000, suffix in "[A-Za-z]{1,3}") {
        prop_assume!(Suffix::from_symbol(&suffix).is_none());
        let input = format!("{value}{suffix}");
        prop_assert_eq!(
            parse_quantity(&input).unwrap_err().kind(),
            QuantityErrorKind::UnrecognizedSuffix
        );
    }
}
