//! Application layer exposing the factory method.
//!
//! `PaymentMethodFactory` is the single entry point that turns a numeric code
//! into a boxed `PaymentMethod`. The set of codes is fixed at compile time.

pub mod factory;
