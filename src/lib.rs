#[macro_use]
extern crate tracing;

pub mod booking;
pub mod schemas;

pub use booking::{BookingQuote, BookingService, compute_price, is_available};
pub use common::{BookingError, Error};
pub use primitive_interval::Interval;
