//! Concrete payment methods, one per variant of `PaymentMethodKind`.

pub mod cash;
pub mod debit_card;
