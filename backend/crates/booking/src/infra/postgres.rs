//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{BookingId, CarId, UserId};
use sqlx::PgPool;

use crate::domain::entity::booking::{Booking, NewBooking};
use crate::domain::repository::BookingRepository;
use crate::domain::value_object::booking_status::BookingStatus;
use crate::error::{BookingError, BookingResult};

/// PostgreSQL-backed booking store
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BOOKING_COLUMNS: &str = r#"
    id,
    user_id,
    car_id,
    start_date,
    end_date,
    total_amount,
    status,
    payment_method,
    created_at,
    updated_at
"#;

impl BookingRepository for PgBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> BookingResult<BookingId> {
        let details = &booking.details;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO bookings (
                user_id,
                car_id,
                start_date,
                end_date,
                total_amount,
                status,
                payment_method,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id
            "#,
        )
        .bind(details.user_id.get())
        .bind(details.car_id.get())
        .bind(details.start_date)
        .bind(details.end_date)
        .bind(details.total_amount)
        .bind(BookingStatus::Pending.code())
        .bind(&details.payment_method)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(BookingId::new(id))
    }

    async fn find_by_id(&self, booking_id: BookingId) -> BookingResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BookingRow::into_booking).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> BookingResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    async fn update(&self, booking: &Booking) -> BookingResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE bookings SET
                user_id = $2,
                car_id = $3,
                start_date = $4,
                end_date = $5,
                total_amount = $6,
                status = $7,
                payment_method = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(booking.id.get())
        .bind(booking.user_id.get())
        .bind(booking.car_id.get())
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_amount)
        .bind(booking.status.code())
        .bind(&booking.payment_method)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, booking_id: BookingId) -> BookingResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking_id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    car_id: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    total_amount: f64,
    status: String,
    payment_method: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookingRow {
    fn into_booking(self) -> BookingResult<Booking> {
        let status = BookingStatus::from_code(&self.status).ok_or_else(|| {
            BookingError::Internal(format!("Invalid status in database: {}", self.status))
        })?;

        Ok(Booking {
            id: BookingId::new(self.id),
            user_id: UserId::new(self.user_id),
            car_id: CarId::new(self.car_id),
            start_date: self.start_date,
            end_date: self.end_date,
            total_amount: self.total_amount,
            status,
            payment_method: self.payment_method,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
