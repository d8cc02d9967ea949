//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User, UserProfile, UserPublicView, parse_date};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
#[derive(Debug, Default)]
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub other_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
    pub drivers_license_number: String,
    pub drivers_license_state: String,
    /// `YYYY-MM-DD`
    pub drivers_license_expiration: Option<String>,
    pub payment_method: String,
    pub preferred_vehicle_type: String,
    pub accepted_terms_of_service: bool,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<UserPublicView> {
        for (field, value) in [
            ("first_name", &input.first_name),
            ("last_name", &input.last_name),
            ("email", &input.email),
            ("password", &input.password),
            ("phone_number", &input.phone_number),
        ] {
            if value.is_empty() {
                return Err(AuthError::MissingField(field));
            }
        }

        let email = Email::new(input.email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let profile = UserProfile {
            first_name: input.first_name,
            last_name: input.last_name,
            other_name: input.other_name,
            phone_number: input.phone_number,
            date_of_birth: optional_date("date of birth", input.date_of_birth)?,
            address: input.address,
            city: input.city,
            region: input.region,
            country: input.country,
            postal_code: input.postal_code,
            drivers_license_number: input.drivers_license_number,
            drivers_license_state: input.drivers_license_state,
            drivers_license_expiration: optional_date(
                "drivers license expiration",
                input.drivers_license_expiration,
            )?,
            payment_method: input.payment_method,
            preferred_vehicle_type: input.preferred_vehicle_type,
        };

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let new_user = NewUser::register(
            email,
            password,
            profile,
            input.accepted_terms_of_service,
            Utc::now(),
        );

        // Duplicate inserts racing past the lookup surface as EmailTaken here.
        let user_id = self.user_repo.insert(&new_user).await?;
        let user = User::from_new(user_id, new_user);

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(user.public_view())
    }
}

/// Empty strings count as "not supplied".
fn optional_date(
    field: &'static str,
    raw: Option<String>,
) -> AuthResult<Option<chrono::NaiveDate>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| parse_date(field, &s))
        .transpose()
}
