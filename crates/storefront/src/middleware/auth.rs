use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynAuthService, errors::HttpError};
use tracing::warn;

/// Resolves the caller's bearer token to a user id and stores it as an `i64`
/// request extension.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(auth): Extension<DynAuthService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err(HttpError::Unauthorized(
            "You are not logged in, please provide token".to_string(),
        ));
    };

    let user_id = auth.authenticate(&token).await.map_err(|e| {
        warn!("🔒 Rejected bearer token: {e}");
        HttpError::from(e)
    })?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
