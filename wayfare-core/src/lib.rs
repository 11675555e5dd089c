pub mod request;
pub mod seat;
pub mod random;
pub mod payment;

pub use request::BookingRequest;
pub use seat::SeatPreference;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use payment::{PaymentAdapter, DEFAULT_CURRENCY, SimulatedPaymentAdapter, TransactionRecord};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
