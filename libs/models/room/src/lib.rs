#[macro_use]
extern crate tracing;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use common::Error;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A bookable room listed on the marketplace
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
	pub id:          i32,
	pub name:        String,
	pub hourly_rate: f64,
	pub created_at:  NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
	pub name:        String,
	pub hourly_rate: f64,
}

/// Source of room listings for the booking flow
///
/// `None` means no room with the given id exists.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
	async fn get_by_id(&self, room_id: i32) -> Result<Option<Room>, Error>;
}

/// A [`RoomDirectory`] backed by process memory
#[derive(Default)]
pub struct InMemoryRoomDirectory {
	inner: Mutex<DirectoryInner>,
}

#[derive(Default)]
struct DirectoryInner {
	next_id: i32,
	rooms:   Vec<Room>,
}

impl InMemoryRoomDirectory {
	#[must_use]
	pub fn new() -> Self { Self::default() }

	/// Add a [`Room`] to the directory
	pub fn insert(&self, new: NewRoom) -> Room {
		let mut inner = self.inner.lock();

		inner.next_id += 1;

		let room = Room {
			id:          inner.next_id,
			name:        new.name,
			hourly_rate: new.hourly_rate,
			created_at:  Utc::now().naive_utc(),
		};

		inner.rooms.push(room.clone());

		info!("created room {} ({})", room.id, room.name);

		room
	}
}

#[async_trait]
impl RoomDirectory for InMemoryRoomDirectory {
	async fn get_by_id(&self, room_id: i32) -> Result<Option<Room>, Error> {
		let inner = self.inner.lock();

		Ok(inner.rooms.iter().find(|r| r.id == room_id).cloned())
	}
}
