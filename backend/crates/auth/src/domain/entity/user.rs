//! User Entity
//!
//! The credential record plus the renter profile kept alongside it.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::UserId;
use serde::Serialize;

use crate::domain::value_object::{email::Email, user_password::UserPassword, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Calendar date wire format (`YYYY-MM-DD`, no timezone)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` field, naming the field in the error.
pub fn parse_date(field: &'static str, raw: &str) -> AuthResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| AuthError::InvalidDate(field))
}

/// Contact, address, license and preference fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub other_name: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
    pub drivers_license_number: String,
    pub drivers_license_state: String,
    pub drivers_license_expiration: Option<NaiveDate>,
    pub payment_method: String,
    pub preferred_vehicle_type: String,
}

/// A user about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub profile: UserProfile,
    pub accepted_terms_of_service: bool,
    pub registration_date: DateTime<Utc>,
}

impl NewUser {
    /// Registration defaults: customer role, unverified, active.
    pub fn register(
        email: Email,
        password: UserPassword,
        profile: UserProfile,
        accepted_terms_of_service: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            password,
            role: UserRole::Customer,
            is_verified: false,
            is_active: true,
            profile,
            accepted_terms_of_service,
            registration_date: now,
        }
    }
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique across users, compared exactly
    pub email: Email,
    /// Always a hash once persisted
    pub password: UserPassword,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub profile: UserProfile,
    pub registration_date: DateTime<Utc>,
    pub last_login_date: Option<DateTime<Utc>>,
    pub has_outstanding_balance: bool,
    pub account_credit: f64,
    pub total_rentals: i32,
    pub current_rental_count: i32,
    pub accepted_terms_of_service: bool,
    pub terms_accepted_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a freshly inserted user
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        let now = new.registration_date;
        Self {
            id,
            email: new.email,
            password: new.password,
            role: new.role,
            is_verified: new.is_verified,
            is_active: new.is_active,
            profile: new.profile,
            registration_date: now,
            last_login_date: None,
            has_outstanding_balance: false,
            account_credit: 0.0,
            total_rentals: 0,
            current_rental_count: 0,
            accepted_terms_of_service: new.accepted_terms_of_service,
            terms_accepted_date: new.accepted_terms_of_service.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login_date = Some(now);
        self.updated_at = now;
    }

    /// Record a token refresh. Only the modification time moves.
    pub fn record_refresh(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn public_view(&self) -> UserPublicView {
        UserPublicView {
            id: self.id,
            first_name: self.profile.first_name.clone(),
            last_name: self.profile.last_name.clone(),
            other_name: self.profile.other_name.clone(),
            email: self.email.as_str().to_string(),
            role: self.role,
        }
    }
}

/// What callers get back; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPublicView {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub other_name: String,
    pub email: String,
    pub role: UserRole,
}
