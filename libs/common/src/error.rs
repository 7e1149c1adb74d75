//! Library-wide error types and [`From`] impls

use chrono::NaiveDateTime;
use thiserror::Error;

/// Top level application error
#[derive(Debug, Error)]
pub enum Error {
	/// Any error related to booking a room
	#[error(transparent)]
	BookingError(#[from] BookingError),
	/// Opaque internal server error
	#[error("internal server error")]
	InternalServerError,
	/// Resource not found
	#[error("not found - {0}")]
	NotFound(String),
	/// Resource could not be validated
	#[error("{0}")]
	ValidationError(String),
}

impl Error {
	/// Return a unique identifying code for this error
	///
	/// When modifying this function an error code should only ever be added,
	/// never reused, to avoid unexpectedly breaking API consumers
	#[must_use]
	pub fn code(&self) -> i32 {
		match self {
			Self::InternalServerError => 1,
			Self::NotFound(_) => 2,
			Self::ValidationError(_) => 3,
			Self::BookingError(e) => {
				match e {
					BookingError::RoomNotFound(_) => 4,
					BookingError::SlotUnavailable { .. } => 5,
					BookingError::InvalidHourlyRate(_) => 6,
				}
			},
		}
	}

	/// Return additional information about the error
	#[must_use]
	pub fn info(&self) -> Option<String> {
		match self {
			Self::NotFound(m) | Self::ValidationError(m) => Some(m.to_owned()),
			Self::BookingError(e) => {
				match e {
					BookingError::RoomNotFound(id) => {
						Some(serde_json::json!({ "roomId": id }).to_string())
					},
					BookingError::SlotUnavailable { start, end } => {
						Some(
							serde_json::json!({ "start": start, "end": end })
								.to_string(),
						)
					},
					BookingError::InvalidHourlyRate(rate) => {
						Some(serde_json::json!({ "rate": rate }).to_string())
					},
				}
			},
			Self::InternalServerError => None,
		}
	}
}

/// Any error related to booking a room
#[derive(Debug, Error)]
pub enum BookingError {
	/// The requested room does not exist
	#[error("no room with id {0} was found")]
	RoomNotFound(i32),
	/// The requested window overlaps an existing reservation
	#[error("the room is unavailable for the requested times")]
	SlotUnavailable { start: NaiveDateTime, end: NaiveDateTime },
	/// The room carries a negative hourly rate
	#[error("invalid hourly rate")]
	InvalidHourlyRate(f64),
}
