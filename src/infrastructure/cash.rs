use crate::domain::payment_method::PaymentMethodKind;
use crate::domain::ports::PaymentMethod;

/// Pays in cash. Holds no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct CashPM;

impl PaymentMethod for CashPM {
    fn pay(&self, amount: f64) -> String {
        format!("{amount:.2} payed using cash")
    }

    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Cash
    }
}
