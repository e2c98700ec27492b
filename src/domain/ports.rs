use super::payment_method::PaymentMethodKind;

/// Something that can render a payment confirmation for an amount.
///
/// Implementations are stateless formatters; `Send + Sync` lets an instance
/// produced by the factory move freely between threads or tasks.
pub trait PaymentMethod: Send + Sync {
    /// Renders a confirmation for `amount` with two decimal digits.
    ///
    /// The amount is not validated: negative values and NaN are formatted as-is.
    fn pay(&self, amount: f64) -> String;

    /// Which variant of the closed set this instance is.
    fn kind(&self) -> PaymentMethodKind;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;
