use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentMethodError {
    #[error("Payment method {0} not recognized")]
    UnrecognizedPaymentMethod(i64),
}

pub type Result<T> = std::result::Result<T, PaymentMethodError>;
