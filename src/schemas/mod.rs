//! Request and response bodies for callers embedding the booking flow

pub mod booking;
