//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{SignUpInput, TokenPair, UpdateProfileInput};
use crate::domain::value_object::patch::Patch;

// ============================================================================
// Register
// ============================================================================

/// Register request. Missing fields default to empty and are caught by
/// the required-field check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub other_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: Option<String>,
    pub address: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
    pub drivers_license_number: String,
    pub drivers_license_state: String,
    pub drivers_license_expiration: Option<String>,
    pub payment_method: String,
    pub preferred_vehicle_type: String,
    pub accepted_terms_of_service: bool,
}

impl From<RegisterRequest> for SignUpInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            other_name: req.other_name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            date_of_birth: req.date_of_birth,
            address: req.address,
            city: req.city,
            region: req.region,
            country: req.country,
            postal_code: req.postal_code,
            drivers_license_number: req.drivers_license_number,
            drivers_license_state: req.drivers_license_state,
            drivers_license_expiration: req.drivers_license_expiration,
            payment_method: req.payment_method,
            preferred_vehicle_type: req.preferred_vehicle_type,
            accepted_terms_of_service: req.accepted_terms_of_service,
        }
    }
}

// ============================================================================
// Login / Refresh
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Partial update; absent or null fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub email: Patch<String>,
    pub password: Patch<String>,
    pub phone_number: Patch<String>,
    pub address: Patch<String>,
    pub city: Patch<String>,
    pub region: Patch<String>,
    pub country: Patch<String>,
    pub postal_code: Patch<String>,
    pub drivers_license_expiration: Patch<String>,
    pub payment_method: Patch<String>,
    pub preferred_vehicle_type: Patch<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileInput {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            address: req.address,
            city: req.city,
            region: req.region,
            country: req.country,
            postal_code: req.postal_code,
            drivers_license_expiration: req.drivers_license_expiration,
            payment_method: req.payment_method,
            preferred_vehicle_type: req.preferred_vehicle_type,
        }
    }
}
