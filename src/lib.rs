pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::factory::{PaymentMethodFactory, get_payment_method};
pub use domain::payment_method::PaymentMethodKind;
pub use domain::ports::{PaymentMethod, PaymentMethodBox};
pub use error::{PaymentMethodError, Result};
