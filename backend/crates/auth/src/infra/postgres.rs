//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = r#"
    id,
    email,
    password_hash,
    role,
    is_verified,
    is_active,
    first_name,
    last_name,
    other_name,
    phone_number,
    date_of_birth,
    address,
    city,
    region,
    country,
    postal_code,
    drivers_license_number,
    drivers_license_state,
    drivers_license_expiration,
    payment_method,
    preferred_vehicle_type,
    registration_date,
    last_login_date,
    has_outstanding_balance,
    account_credit,
    total_rentals,
    current_rental_count,
    accepted_terms_of_service,
    terms_accepted_date,
    created_at,
    updated_at
"#;

/// The unique index on `users.email` is the last line of defence.
fn map_write_error(err: sqlx::Error) -> AuthError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AuthError::EmailTaken,
        _ => AuthError::Database(err),
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, user: &NewUser) -> AuthResult<UserId> {
        let profile = &user.profile;
        let terms_accepted_date = user
            .accepted_terms_of_service
            .then_some(user.registration_date);

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (
                email,
                password_hash,
                role,
                is_verified,
                is_active,
                first_name,
                last_name,
                other_name,
                phone_number,
                date_of_birth,
                address,
                city,
                region,
                country,
                postal_code,
                drivers_license_number,
                drivers_license_state,
                drivers_license_expiration,
                payment_method,
                preferred_vehicle_type,
                registration_date,
                accepted_terms_of_service,
                terms_accepted_date,
                created_at,
                updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $21, $21
            )
            RETURNING id
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.role.code())
        .bind(user.is_verified)
        .bind(user.is_active)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.other_name)
        .bind(&profile.phone_number)
        .bind(profile.date_of_birth)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.region)
        .bind(&profile.country)
        .bind(&profile.postal_code)
        .bind(&profile.drivers_license_number)
        .bind(&profile.drivers_license_state)
        .bind(profile.drivers_license_expiration)
        .bind(&profile.payment_method)
        .bind(&profile.preferred_vehicle_type)
        .bind(user.registration_date)
        .bind(user.accepted_terms_of_service)
        .bind(terms_accepted_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(UserId::new(id))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let profile = &user.profile;

        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                password_hash = $3,
                role = $4,
                is_verified = $5,
                is_active = $6,
                first_name = $7,
                last_name = $8,
                other_name = $9,
                phone_number = $10,
                date_of_birth = $11,
                address = $12,
                city = $13,
                region = $14,
                country = $15,
                postal_code = $16,
                drivers_license_number = $17,
                drivers_license_state = $18,
                drivers_license_expiration = $19,
                payment_method = $20,
                preferred_vehicle_type = $21,
                last_login_date = $22,
                has_outstanding_balance = $23,
                account_credit = $24,
                total_rentals = $25,
                current_rental_count = $26,
                accepted_terms_of_service = $27,
                terms_accepted_date = $28,
                updated_at = $29
            WHERE id = $1
            "#,
        )
        .bind(user.id.get())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.role.code())
        .bind(user.is_verified)
        .bind(user.is_active)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.other_name)
        .bind(&profile.phone_number)
        .bind(profile.date_of_birth)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.region)
        .bind(&profile.country)
        .bind(&profile.postal_code)
        .bind(&profile.drivers_license_number)
        .bind(&profile.drivers_license_state)
        .bind(profile.drivers_license_expiration)
        .bind(&profile.payment_method)
        .bind(&profile.preferred_vehicle_type)
        .bind(user.last_login_date)
        .bind(user.has_outstanding_balance)
        .bind(user.account_credit)
        .bind(user.total_rentals)
        .bind(user.current_rental_count)
        .bind(user.accepted_terms_of_service)
        .bind(user.terms_accepted_date)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
    is_verified: bool,
    is_active: bool,
    first_name: String,
    last_name: String,
    other_name: String,
    phone_number: String,
    date_of_birth: Option<NaiveDate>,
    address: String,
    city: String,
    region: String,
    country: String,
    postal_code: String,
    drivers_license_number: String,
    drivers_license_state: String,
    drivers_license_expiration: Option<NaiveDate>,
    payment_method: String,
    preferred_vehicle_type: String,
    registration_date: DateTime<Utc>,
    last_login_date: Option<DateTime<Utc>>,
    has_outstanding_balance: bool,
    account_credit: f64,
    total_rentals: i32,
    current_rental_count: i32,
    accepted_terms_of_service: bool,
    terms_accepted_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let role = UserRole::from_code(&self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role in database: {}", self.role)))?;

        Ok(User {
            id: UserId::new(self.id),
            email: Email::from_db(self.email),
            password: UserPassword::from_phc_string(self.password_hash)?,
            role,
            is_verified: self.is_verified,
            is_active: self.is_active,
            profile: UserProfile {
                first_name: self.first_name,
                last_name: self.last_name,
                other_name: self.other_name,
                phone_number: self.phone_number,
                date_of_birth: self.date_of_birth,
                address: self.address,
                city: self.city,
                region: self.region,
                country: self.country,
                postal_code: self.postal_code,
                drivers_license_number: self.drivers_license_number,
                drivers_license_state: self.drivers_license_state,
                drivers_license_expiration: self.drivers_license_expiration,
                payment_method: self.payment_method,
                preferred_vehicle_type: self.preferred_vehicle_type,
            },
            registration_date: self.registration_date,
            last_login_date: self.last_login_date,
            has_outstanding_balance: self.has_outstanding_balance,
            account_credit: self.account_credit,
            total_rentals: self.total_rentals,
            current_rental_count: self.current_rental_count,
            accepted_terms_of_service: self.accepted_terms_of_service,
            terms_accepted_date: self.terms_accepted_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
