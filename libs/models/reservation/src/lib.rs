#[macro_use]
extern crate tracing;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use common::Error;
use parking_lot::Mutex;
use primitive_interval::Interval;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Reservation`]
///
/// A reservation starts out [`Pending`](ReservationState::Pending) and is
/// confirmed or cancelled by an owner or administrator afterwards. A
/// cancelled reservation keeps its record but no longer blocks the room.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ReservationState {
	#[default]
	Pending,
	Confirmed,
	Cancelled,
}

/// A booked slice of time on a single room
///
/// `total_price` is fixed when the reservation is created and never
/// recomputed, even if the room's hourly rate changes later.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
	pub id:           i32,
	pub room_id:      i32,
	pub state:        ReservationState,
	pub start_time:   NaiveDateTime,
	pub end_time:     NaiveDateTime,
	pub total_price:  f64,
	pub created_at:   NaiveDateTime,
	pub confirmed_at: Option<NaiveDateTime>,
}

impl Reservation {
	/// The occupancy window of this reservation
	///
	/// Stored pairs go through the same rollover rule as candidate bookings
	/// so both sides of an overlap comparison are normalized.
	#[must_use]
	pub fn interval(&self) -> Interval {
		Interval::normalized(self.start_time, self.end_time)
	}

	/// Whether this reservation still blocks its room
	#[must_use]
	pub fn is_active(&self) -> bool {
		self.state != ReservationState::Cancelled
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
	pub room_id:     i32,
	pub start_time:  NaiveDateTime,
	pub end_time:    NaiveDateTime,
	pub total_price: f64,
}

/// Persistence seam for reservations
#[async_trait]
pub trait ReservationStore: Send + Sync {
	/// Get all reservations for a room that still block it
	async fn active_for_room(
		&self,
		room_id: i32,
	) -> Result<Vec<Reservation>, Error>;

	/// Get a [`Reservation`] by its id
	async fn get_by_id(&self, r_id: i32) -> Result<Reservation, Error>;

	/// Persist a new reservation in state [`ReservationState::Pending`]
	async fn insert(&self, new: NewReservation) -> Result<Reservation, Error>;

	/// Move a reservation to a new state
	async fn set_state(
		&self,
		r_id: i32,
		state: ReservationState,
	) -> Result<Reservation, Error>;
}

/// A [`ReservationStore`] backed by process memory
#[derive(Default)]
pub struct InMemoryReservationStore {
	inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
	next_id:      i32,
	reservations: Vec<Reservation>,
}

impl InMemoryReservationStore {
	#[must_use]
	pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
	#[instrument(skip(self))]
	async fn active_for_room(
		&self,
		room_id: i32,
	) -> Result<Vec<Reservation>, Error> {
		let inner = self.inner.lock();

		let reservations = inner
			.reservations
			.iter()
			.filter(|r| r.room_id == room_id && r.is_active())
			.cloned()
			.collect();

		Ok(reservations)
	}

	#[instrument(skip(self))]
	async fn get_by_id(&self, r_id: i32) -> Result<Reservation, Error> {
		let inner = self.inner.lock();

		inner.reservations.iter().find(|r| r.id == r_id).cloned().ok_or_else(
			|| Error::NotFound(format!("no reservation with id {r_id}")),
		)
	}

	#[instrument(skip(self))]
	async fn insert(&self, new: NewReservation) -> Result<Reservation, Error> {
		let mut inner = self.inner.lock();

		inner.next_id += 1;

		let reservation = Reservation {
			id:           inner.next_id,
			room_id:      new.room_id,
			state:        ReservationState::Pending,
			start_time:   new.start_time,
			end_time:     new.end_time,
			total_price:  new.total_price,
			created_at:   Utc::now().naive_utc(),
			confirmed_at: None,
		};

		inner.reservations.push(reservation.clone());

		info!(
			"created reservation {} for room {}",
			reservation.id, reservation.room_id
		);

		Ok(reservation)
	}

	#[instrument(skip(self))]
	async fn set_state(
		&self,
		r_id: i32,
		state: ReservationState,
	) -> Result<Reservation, Error> {
		let mut inner = self.inner.lock();

		let Some(reservation) =
			inner.reservations.iter_mut().find(|r| r.id == r_id)
		else {
			return Err(Error::NotFound(format!(
				"no reservation with id {r_id}"
			)));
		};

		reservation.state = state;

		if state == ReservationState::Confirmed {
			reservation.confirmed_at = Some(Utc::now().naive_utc());
		}

		info!("moved reservation {r_id} to state {state:?}");

		Ok(reservation.clone())
	}
}
