//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use roombook_auth::password::PasswordHasher;
use roombook_auth::{AuthorizationGate, JwtDecoder, JwtEncoder};
use roombook_core::config::AppConfig;
use roombook_database::repositories::booking::BookingRepository;
use roombook_database::repositories::reset_token::ResetTokenRepository;
use roombook_database::repositories::room::RoomRepository;
use roombook_database::repositories::user::UserRepository;
use roombook_service::auth::AuthService;
use roombook_service::booking::BookingService;
use roombook_service::reset::PasswordResetService;
use roombook_service::room::RoomService;
use roombook_service::user::AdminUserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Sign-in service.
    pub auth_service: Arc<AuthService>,
    /// Administrative user management service.
    pub admin_user_service: Arc<AdminUserService>,
    /// Password-reset flow service.
    pub reset_service: Arc<PasswordResetService>,
    /// Room browsing service.
    pub room_service: Arc<RoomService>,
    /// Booking service.
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wires up repositories and services from the pool and configuration.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let token_repo = Arc::new(ResetTokenRepository::new(db_pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let gate = AuthorizationGate::new();
        let auth_config = Arc::new(config.auth.clone());

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            hasher.clone(),
            encoder,
        ));
        let admin_user_service = Arc::new(AdminUserService::new(
            user_repo.clone(),
            hasher.clone(),
            gate,
            auth_config.clone(),
        ));
        let reset_service = Arc::new(PasswordResetService::new(
            user_repo,
            token_repo,
            hasher,
            gate,
            auth_config,
        ));
        let room_service = Arc::new(RoomService::new(room_repo.clone()));
        let booking_service = Arc::new(BookingService::new(booking_repo, room_repo));

        Self {
            config,
            db_pool,
            jwt_decoder: decoder,
            auth_service,
            admin_user_service,
            reset_service,
            room_service,
            booking_service,
        }
    }
}
