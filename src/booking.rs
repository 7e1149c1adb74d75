//! The booking flow: availability, pricing, and reservation creation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use common::{BookingError, Error};
use primitive_interval::Interval;
use reservation::{
	NewReservation,
	Reservation,
	ReservationState,
	ReservationStore,
};
use room::RoomDirectory;
use serde::{Deserialize, Serialize};

/// Check whether a candidate interval can be booked alongside the given
/// reservations
///
/// Cancelled reservations never block a room; every other reservation is
/// compared under the strict overlap test, so a candidate that merely
/// touches an existing reservation at an endpoint is allowed. An empty
/// reservation list is always available.
#[must_use]
pub fn is_available(candidate: &Interval, existing: &[Reservation]) -> bool {
	existing
		.iter()
		.filter(|r| r.is_active())
		.all(|r| !candidate.overlaps(&r.interval()))
}

/// Price a normalized interval at the given hourly rate
///
/// The price is the interval length in fractional hours times the rate,
/// carried at full precision. No rounding and no minimum charge are applied,
/// so a rate of zero prices every interval at zero.
pub fn compute_price(
	hourly_rate: f64,
	interval: &Interval,
) -> Result<f64, Error> {
	if hourly_rate < 0.0 {
		return Err(BookingError::InvalidHourlyRate(hourly_rate).into());
	}

	Ok(interval.duration_hours() * hourly_rate)
}

fn check_availability(
	candidate: &Interval,
	existing: &[Reservation],
) -> Result<(), Error> {
	if !is_available(candidate, existing) {
		warn!("requested window {candidate:?} conflicts with a reservation");

		return Err(BookingError::SlotUnavailable {
			start: candidate.start,
			end:   candidate.end,
		}
		.into());
	}

	Ok(())
}

/// A priced booking window for a single room
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
	pub room_id:  i32,
	pub interval: Interval,
	pub price:    f64,
}

/// Map of room ids to the mutex serializing bookings on that room
#[derive(Default)]
struct RoomLocks {
	inner: parking_lot::Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>,
}

impl RoomLocks {
	fn for_room(&self, room_id: i32) -> Arc<tokio::sync::Mutex<()>> {
		let mut inner = self.inner.lock();

		inner.entry(room_id).or_default().clone()
	}
}

/// The booking flow over a [`RoomDirectory`] and a [`ReservationStore`]
pub struct BookingService<D, S> {
	directory: D,
	store:     S,
	locks:     RoomLocks,
}

impl<D, S> BookingService<D, S>
where
	D: RoomDirectory,
	S: ReservationStore,
{
	pub fn new(directory: D, store: S) -> Self {
		Self { directory, store, locks: RoomLocks::default() }
	}

	/// Price a booking request without persisting anything
	///
	/// Normalizes the requested window, resolves the room, and checks the
	/// window against the room's active reservations. Returns the normalized
	/// window and its price for the caller to persist.
	#[instrument(skip(self))]
	pub async fn quote(
		&self,
		room_id: i32,
		start: NaiveDateTime,
		end: NaiveDateTime,
	) -> Result<BookingQuote, Error> {
		let interval = Interval::normalized(start, end);

		let room = self
			.directory
			.get_by_id(room_id)
			.await?
			.ok_or(BookingError::RoomNotFound(room_id))?;

		let existing = self.store.active_for_room(room_id).await?;

		check_availability(&interval, &existing)?;

		let price = compute_price(room.hourly_rate, &interval)?;

		Ok(BookingQuote { room_id, interval, price })
	}

	/// Book a room
	///
	/// The availability check and the insert run under a per-room lock, so
	/// two concurrent requests for the same room cannot both claim
	/// overlapping windows. Requests for distinct rooms do not contend.
	#[instrument(skip(self))]
	pub async fn create_booking(
		&self,
		room_id: i32,
		start: NaiveDateTime,
		end: NaiveDateTime,
	) -> Result<Reservation, Error> {
		let lock = self.locks.for_room(room_id);
		let _guard = lock.lock().await;

		let quote = self.quote(room_id, start, end).await?;

		let reservation = self
			.store
			.insert(NewReservation {
				room_id,
				start_time:  quote.interval.start,
				end_time:    quote.interval.end,
				total_price: quote.price,
			})
			.await?;

		Ok(reservation)
	}

	/// Get a [`Reservation`] by its id
	#[instrument(skip(self))]
	pub async fn get_reservation(
		&self,
		r_id: i32,
	) -> Result<Reservation, Error> {
		self.store.get_by_id(r_id).await
	}

	/// Confirm a pending reservation
	#[instrument(skip(self))]
	pub async fn confirm_reservation(
		&self,
		r_id: i32,
	) -> Result<Reservation, Error> {
		self.store.set_state(r_id, ReservationState::Confirmed).await
	}

	/// Cancel a reservation, freeing its window for future bookings
	#[instrument(skip(self))]
	pub async fn cancel_reservation(
		&self,
		r_id: i32,
	) -> Result<Reservation, Error> {
		self.store.set_state(r_id, ReservationState::Cancelled).await
	}
}
