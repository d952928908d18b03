//! Unit tests for the Money module
//!
//! Tests cover creation, currency rounding, checked arithmetic and
//! discount rates.

use core_kernel::{Currency, Money, MoneyError, Rate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents() {
        assert_eq!(Money::from_minor(10050, Currency::USD).amount(), dec!(100.50));
        assert_eq!(Money::from_minor(10000, Currency::JPY).amount(), dec!(10000));
    }

    #[test]
    fn test_zero_is_zero_and_not_negative() {
        let m = Money::zero(Currency::INR);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::INR);
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        let up = Money::new(dec!(12.345), Currency::USD).round_to_currency();
        let down = Money::new(dec!(-12.345), Currency::USD).round_to_currency();
        assert_eq!(up.amount(), dec!(12.35));
        assert_eq!(down.amount(), dec!(-12.35));
    }

    #[test]
    fn test_round_respects_currency_places() {
        let yen = Money::new(dec!(1250.5), Currency::JPY).round_to_currency();
        assert_eq!(yen.amount(), dec!(1251));
    }

    #[test]
    fn test_multiply_rounded() {
        let m = Money::new(dec!(33.335), Currency::USD);
        assert_eq!(m.multiply_rounded(Decimal::ONE).amount(), dec!(33.34));

        let m = Money::new(dec!(99.99), Currency::USD);
        assert_eq!(m.multiply_rounded(dec!(0.875)).amount(), dec!(87.49));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(50.25), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::new(dec!(100), Currency::USD);
        let eur = Money::new(dec!(100), Currency::EUR);
        assert_eq!(
            usd.checked_add(&eur),
            Err(MoneyError::CurrencyMismatch("USD".into(), "EUR".into()))
        );
    }

    #[test]
    fn test_checked_add_overflow_is_an_error() {
        let big = Money::new(Decimal::MAX, Currency::USD);
        let result = big.checked_add(&Money::new(dec!(1), Currency::USD));
        assert!(matches!(result, Err(MoneyError::Overflow(_, _))));
    }

    #[test]
    fn test_checked_sum_empty_is_zero() {
        let total = Money::checked_sum(&[], Currency::GBP).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::GBP);
    }

    #[test]
    fn test_checked_sum_rejects_foreign_amount() {
        let amounts = [
            Money::new(dec!(10), Currency::USD),
            Money::new(dec!(10), Currency::SGD),
        ];
        assert!(Money::checked_sum(&amounts, Currency::USD).is_err());
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("INR".parse::<Currency>().unwrap(), Currency::INR);
    }

    #[test]
    fn test_parse_unknown_currency() {
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(MoneyError::UnknownCurrency("XYZ".into()))
        );
    }

    #[test]
    fn test_display_uses_symbol_and_places() {
        assert_eq!(Money::new(dec!(1234.5), Currency::USD).to_string(), "$ 1234.50");
        assert_eq!(Money::new(dec!(500), Currency::JPY).to_string(), "¥ 500");
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(12.5));
        assert_eq!(rate.as_decimal(), dec!(0.125));
        assert_eq!(rate.to_string(), "12.5%");
    }

    #[test]
    fn test_discount_takes_rate_off() {
        let premium = Money::new(dec!(1200), Currency::USD);
        assert_eq!(Rate::from_percentage(dec!(10)).discount(&premium).amount(), dec!(1080));
        assert!(Rate::from_percentage(dec!(100)).discount(&premium).is_zero());
        assert_eq!(Rate::new(Decimal::ZERO).discount(&premium), premium);
    }
}

proptest! {
    #[test]
    fn prop_addition_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let x = Money::from_minor(a, Currency::USD);
        let y = Money::from_minor(b, Currency::USD);
        prop_assert_eq!(x.checked_add(&y).unwrap(), y.checked_add(&x).unwrap());
    }

    #[test]
    fn prop_discount_never_exceeds_premium(cents in 0i64..10_000_000, pct in 0u32..=100) {
        let premium = Money::from_minor(cents, Currency::USD);
        let net = Rate::from_percentage(Decimal::from(pct)).discount(&premium);
        prop_assert!(net.amount() <= premium.amount());
        prop_assert!(!net.is_negative());
    }
}
