use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A half-open slice of time claimed by a booking
///
/// The end instant itself is not occupied, so two intervals may share it as
/// a boundary without conflict.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
	pub start: NaiveDateTime,
	pub end:   NaiveDateTime,
}

impl Interval {
	/// Build an [`Interval`] from a raw start/end pair
	///
	/// An end on or before the start means the booking runs past midnight
	/// and ends the next day, so 24 hours are added to it. A pair with
	/// `end > start` is returned unchanged, which makes normalizing an
	/// already-normalized pair a no-op.
	///
	/// An accidentally swapped pair is indistinguishable from an overnight
	/// booking and gets the same treatment.
	#[must_use]
	pub fn normalized(start: NaiveDateTime, end: NaiveDateTime) -> Self {
		let end = if end <= start { end + TimeDelta::hours(24) } else { end };

		Self { start, end }
	}

	/// Check whether this interval shares any instant with another
	///
	/// Intervals that merely touch at an endpoint do not overlap, so
	/// back-to-back bookings on the same room are allowed. Full containment
	/// counts as overlap in both directions.
	#[must_use]
	pub fn overlaps(&self, other: &Self) -> bool {
		self.start < other.end && self.end > other.start
	}

	/// The length of this interval
	#[must_use]
	pub fn duration(&self) -> TimeDelta { self.end - self.start }

	/// The length of this interval in fractional hours
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn duration_hours(&self) -> f64 {
		self.duration().num_seconds() as f64 / 3600.0
	}
}
