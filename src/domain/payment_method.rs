use crate::error::PaymentMethodError;
use std::fmt;

/// The closed set of payment methods the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethodKind {
    Cash,
    DebitCard,
}

impl PaymentMethodKind {
    pub const ALL: [Self; 2] = [Self::Cash, Self::DebitCard];

    /// The numeric identifier callers pass to the factory.
    pub fn code(self) -> i64 {
        match self {
            Self::Cash => 1,
            Self::DebitCard => 2,
        }
    }
}

impl TryFrom<i64> for PaymentMethodKind {
    type Error = PaymentMethodError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Cash),
            2 => Ok(Self::DebitCard),
            other => Err(PaymentMethodError::UnrecognizedPaymentMethod(other)),
        }
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => f.write_str("cash"),
            Self::DebitCard => f.write_str("debit card"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_through_try_from() {
        for kind in PaymentMethodKind::ALL {
            assert_eq!(PaymentMethodKind::try_from(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [0, 3, -1, 20, i64::MIN, i64::MAX] {
            assert_eq!(
                PaymentMethodKind::try_from(code),
                Err(PaymentMethodError::UnrecognizedPaymentMethod(code))
            );
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PaymentMethodKind::Cash.to_string(), "cash");
        assert_eq!(PaymentMethodKind::DebitCard.to_string(), "debit card");
    }
}
