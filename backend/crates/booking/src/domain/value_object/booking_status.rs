use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// Booking lifecycle: `Pending -> Accepted | Declined`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl BookingStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use BookingStatus::*;
        match self {
            Pending => "Pending",
            Accepted => "Accepted",
            Declined => "Declined",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use BookingStatus::*;
        match code {
            "Pending" => Some(Pending),
            "Accepted" => Some(Accepted),
            "Declined" => Some(Declined),
            _ => None,
        }
    }

    /// Validate a move to `to`. The only legal moves leave `Pending`.
    pub fn transition_to(self, to: BookingStatus) -> BookingResult<BookingStatus> {
        match (self, to) {
            (BookingStatus::Pending, BookingStatus::Accepted | BookingStatus::Declined) => Ok(to),
            (from, to) => Err(BookingError::InvalidTransition { from, to }),
        }
    }
}
