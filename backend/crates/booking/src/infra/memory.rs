//! In-memory Repository

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{BookingId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::booking::{Booking, NewBooking};
use crate::domain::repository::BookingRepository;
use crate::error::{BookingError, BookingResult};

#[derive(Default)]
struct Bookings {
    by_id: BTreeMap<BookingId, Booking>,
    last_id: i64,
}

/// Bookings ordered by id behind an async lock. Clones share the map.
#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Bookings>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> BookingResult<BookingId> {
        let mut bookings = self.bookings.write().await;

        bookings.last_id += 1;
        let id = BookingId::new(bookings.last_id);
        bookings
            .by_id
            .insert(id, Booking::from_new(id, booking.clone()));

        Ok(id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> BookingResult<Option<Booking>> {
        Ok(self.bookings.read().await.by_id.get(&booking_id).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> BookingResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .by_id
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, booking: &Booking) -> BookingResult<()> {
        let mut bookings = self.bookings.write().await;

        match bookings.by_id.get_mut(&booking.id) {
            Some(slot) => {
                *slot = booking.clone();
                Ok(())
            }
            None => Err(BookingError::NotFound),
        }
    }

    async fn delete(&self, booking_id: BookingId) -> BookingResult<bool> {
        Ok(self
            .bookings
            .write()
            .await
            .by_id
            .remove(&booking_id)
            .is_some())
    }
}
