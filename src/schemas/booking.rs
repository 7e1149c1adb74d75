use chrono::NaiveDateTime;
use reservation::{Reservation, ReservationState};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::booking::BookingQuote;

/// Request body for booking a room
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
	pub room_id:    i32,
	pub start_time: NaiveDateTime,
	pub end_time:   NaiveDateTime,
}

/// A priced booking window, before anything is persisted
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuoteResponse {
	pub room_id:    i32,
	pub start_time: NaiveDateTime,
	pub end_time:   NaiveDateTime,
	pub price:      f64,
}

impl From<BookingQuote> for BookingQuoteResponse {
	fn from(quote: BookingQuote) -> Self {
		Self {
			room_id:    quote.room_id,
			start_time: quote.interval.start,
			end_time:   quote.interval.end,
			price:      quote.price,
		}
	}
}

/// A stored reservation as shown to callers
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
	pub id:           i32,
	pub room_id:      i32,
	pub state:        ReservationState,
	pub start_time:   NaiveDateTime,
	pub end_time:     NaiveDateTime,
	pub total_price:  f64,
	pub created_at:   NaiveDateTime,
	pub confirmed_at: Option<NaiveDateTime>,
}

impl From<Reservation> for ReservationResponse {
	fn from(reservation: Reservation) -> Self {
		Self {
			id:           reservation.id,
			room_id:      reservation.room_id,
			state:        reservation.state,
			start_time:   reservation.start_time,
			end_time:     reservation.end_time,
			total_price:  reservation.total_price,
			created_at:   reservation.created_at,
			confirmed_at: reservation.confirmed_at,
		}
	}
}
