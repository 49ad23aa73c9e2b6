//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::infrastructure::crypto::jwt::{verify_token, AuthError, Claims, JwtConfig};

/// Authentication state containing the JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        }
    }

    pub fn is_hotel_owner(&self) -> bool {
        self.role == "hotel-owner"
    }
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires valid token
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    // Verify JWT token
    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }

            // Add authenticated user to request extensions
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);

            next.run(request).await
        }
        Err(_) => auth_error_response(AuthError::InvalidToken),
    }
}

/// Hotel-owner-only middleware - must be used after auth_middleware
pub async fn hotel_owner_middleware(request: Request<Body>, next: Next) -> Response {
    let user = request.extensions().get::<AuthenticatedUser>();

    match user {
        Some(user) if user.is_hotel_owner() => next.run(request).await,
        Some(_) => auth_error_response(AuthError::InsufficientPermissions),
        None => auth_error_response(AuthError::MissingToken),
    }
}

/// Create an authentication error response
fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
        AuthError::InsufficientPermissions => {
            (StatusCode::FORBIDDEN, "Insufficient permissions")
        }
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (status, body).into_response()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    use crate::infrastructure::crypto::jwt::create_token;

    async fn whoami(user: axum::Extension<AuthenticatedUser>) -> String {
        user.username.clone()
    }

    fn app(jwt_config: JwtConfig) -> Router {
        let guarded = Router::new()
            .route("/owner", get(whoami))
            .layer(middleware::from_fn(hotel_owner_middleware));

        Router::new()
            .route("/me", get(whoami))
            .merge(guarded)
            .layer(middleware::from_fn_with_state(
                AuthState {
                    jwt_config: jwt_config.clone(),
                },
                auth_middleware,
            ))
    }

    async fn send(app: Router, uri: &str, token: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let config = JwtConfig::default();
        assert_eq!(
            send(app(config), "/me", None).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let config = JwtConfig::default();
        assert_eq!(
            send(app(config), "/me", Some("not-a-token")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn valid_token_passes_auth() {
        let config = JwtConfig::default();
        let token = create_token("u1", "alice", Some("alice@x.com"), "guest", &config).unwrap();
        assert_eq!(
            send(app(config), "/me", Some(&token)).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn guest_is_forbidden_on_owner_route() {
        let config = JwtConfig::default();
        let token = create_token("u1", "alice", Some("alice@x.com"), "guest", &config).unwrap();
        assert_eq!(
            send(app(config), "/owner", Some(&token)).await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn owner_passes_owner_route() {
        let config = JwtConfig::default();
        let token = create_token("u2", "olga", Some("olga@x.com"), "hotel-owner", &config).unwrap();
        assert_eq!(
            send(app(config), "/owner", Some(&token)).await,
            StatusCode::OK
        );
    }
}
