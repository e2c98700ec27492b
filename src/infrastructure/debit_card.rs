use crate::domain::payment_method::PaymentMethodKind;
use crate::domain::ports::PaymentMethod;

#[derive(Debug, Default, Clone, Copy)]
pub struct DebitCardPM;

impl PaymentMethod for DebitCardPM {
    fn pay(&self, amount: f64) -> String {
        format!("{amount:.2} payed using debit card")
    }

    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::DebitCard
    }
}
