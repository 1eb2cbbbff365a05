//! Value objects
//!
//! Immutable, self-validating wrappers around primitives. Every constructor
//! checks its invariant and fails with `DomainError::InvalidArgument`.

pub mod email;
pub mod interest_rate;
pub mod money;
pub mod name;
pub mod term;

pub use email::Email;
pub use interest_rate::InterestRate;
pub use money::Money;
pub use name::Name;
pub use term::Term;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round half-up (away from zero on ties) to `dp` places and pin the scale
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_half_up_ties_go_up() {
        let value = Decimal::from_str("2.345").unwrap();
        assert_eq!(round_half_up(value, 2).to_string(), "2.35");
    }

    #[test]
    fn round_half_up_pads_scale() {
        assert_eq!(round_half_up(Decimal::from(7), 2).to_string(), "7.00");
    }

    #[test]
    fn round_half_up_six_places() {
        let value = Decimal::from_str("1.2916666").unwrap();
        assert_eq!(round_half_up(value, 6).to_string(), "1.291667");
    }
}
