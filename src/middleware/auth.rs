use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::entities::user::UserRole;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{verify_token, Claims};
use crate::AppState;

/// Core operations a caller may be gated on. Role gating lives entirely in
/// this gateway layer; handlers and services never look at the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Screen, movie, show and price writes.
    ManageCatalog,
    /// Booking seats and reading catalog/booking data.
    Book,
}

/// Whether `role` may invoke `operation`.
pub fn can_perform(role: &UserRole, operation: Operation) -> bool {
    match operation {
        Operation::ManageCatalog => matches!(role, UserRole::Owner | UserRole::Manager),
        Operation::Book => true,
    }
}

/// Extract and validate JWT token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let claims = verify_token(auth.token(), &state.config.jwt_secret)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Require a staff role (owner or manager)
pub async fn require_staff(request: Request, next: Next) -> AppResult<Response> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::Unauthorized("No authentication found".to_string()))?;

    if !can_perform(&claims.role, Operation::ManageCatalog) {
        return Err(AppError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
