use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest, TokenConfig,
        TokenResponse},
    error::AppError,
    store,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account. No token is issued at registration; clients
/// log in separately.
#[post("/register")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if username already exists
    let existing_user = store::users::find_by_username(&pool, &register_data.username).await?;
    if existing_user.is_some() {
        return Err(AppError::Conflict("Username already taken".into()));
    }

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user
    let user = store::users::insert(&pool, &register_data.username, &password_hash).await?;
    log::info!("registered user {} (id {})", user.username, user.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully"
    })))
}

/// Login user
///
/// Authenticates a user and returns an access token. Unknown usernames and
/// wrong passwords produce the same response.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    tokens: web::Data<TokenConfig>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let user = store::users::find_by_username(&pool, &login_data.username).await?;

    match user {
        Some(user) if verify_password(&login_data.password, &user.password_hash) => {
            let access_token = tokens.issue(user.id)?;
            Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
        }
        _ => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
