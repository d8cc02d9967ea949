//! Profile Use Case
//!
//! Read and partially update the authenticated user's own record.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{UserPublicView, parse_date};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    patch::Patch,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Fields a user may change. Everything else is fixed after sign up.
#[derive(Debug, Default)]
pub struct UpdateProfileInput {
    pub email: Patch<String>,
    pub password: Patch<String>,
    pub phone_number: Patch<String>,
    pub address: Patch<String>,
    pub city: Patch<String>,
    pub region: Patch<String>,
    pub country: Patch<String>,
    pub postal_code: Patch<String>,
    /// `YYYY-MM-DD`
    pub drivers_license_expiration: Patch<String>,
    pub payment_method: Patch<String>,
    pub preferred_vehicle_type: Patch<String>,
}

pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn get(&self, user_id: UserId) -> AuthResult<UserPublicView> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|user| user.public_view())
            .ok_or(AuthError::UserNotFound)
    }

    /// Apply every supplied field, then persist the merged record.
    ///
    /// Nothing is written unless all supplied fields are valid.
    pub async fn update(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> AuthResult<UserPublicView> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let email = input.email.try_map(Email::new)?;
        if let Patch::Set(email) = &email {
            // Keeping one's own address is not a collision
            if let Some(owner) = self.user_repo.find_by_email(email).await? {
                if owner.id != user.id {
                    return Err(AuthError::EmailTaken);
                }
            }
        }

        let license_expiration = input
            .drivers_license_expiration
            .try_map(|raw| parse_date("drivers license expiration", &raw))?;

        let password = input.password.try_map(|raw| {
            let raw = RawPassword::new(raw)?;
            UserPassword::from_raw(&raw, self.config.pepper())
        })?;
        let password_changed = password.is_set();

        email.apply_to(&mut user.email);
        password.apply_to(&mut user.password);

        let profile = &mut user.profile;
        input.phone_number.apply_to(&mut profile.phone_number);
        input.address.apply_to(&mut profile.address);
        input.city.apply_to(&mut profile.city);
        input.region.apply_to(&mut profile.region);
        input.country.apply_to(&mut profile.country);
        input.postal_code.apply_to(&mut profile.postal_code);
        input.payment_method.apply_to(&mut profile.payment_method);
        input
            .preferred_vehicle_type
            .apply_to(&mut profile.preferred_vehicle_type);
        if let Patch::Set(date) = license_expiration {
            profile.drivers_license_expiration = Some(date);
        }

        user.updated_at = Utc::now();
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.id, password_changed, "Profile updated");

        Ok(user.public_view())
    }
}
