use crate::domain::payment_method::PaymentMethodKind;
use crate::domain::ports::PaymentMethodBox;
use crate::error::Result;
use crate::infrastructure::cash::CashPM;
use crate::infrastructure::debit_card::DebitCardPM;

/// Builds payment methods from their numeric code.
///
/// The factory is stateless: every call constructs a fresh instance, and the
/// same code always yields the same kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentMethodFactory;

impl PaymentMethodFactory {
    /// Creates the payment method registered for `code`.
    ///
    /// # Errors
    ///
    /// Returns `PaymentMethodError::UnrecognizedPaymentMethod` carrying `code`
    /// when it is not one of the known identifiers.
    pub fn create(code: i64) -> Result<PaymentMethodBox> {
        let kind = PaymentMethodKind::try_from(code).inspect_err(|e| {
            tracing::warn!(code, "{}", e);
        })?;

        tracing::debug!(code, %kind, "creating payment method");
        let method: PaymentMethodBox = match kind {
            PaymentMethodKind::Cash => Box::new(CashPM),
            PaymentMethodKind::DebitCard => Box::new(DebitCardPM),
        };
        Ok(method)
    }
}

/// Free-function form of [`PaymentMethodFactory::create`].
pub fn get_payment_method(code: i64) -> Result<PaymentMethodBox> {
    PaymentMethodFactory::create(code)
}
