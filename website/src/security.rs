use crate::AppResult;
use common::User;
use leptos::server;

/// Identity of the visitor, as asserted by the authenticating proxy.
#[server]
pub async fn get_user() -> AppResult<Option<User>> {
    let server_vars = crate::ssr::server_vars()?;
    let parts = ssr::request_parts()?;
    Ok(ssr::user_from_headers(&parts.headers, &server_vars.email_header))
}

/// Expires the proxy session cookie so the next request is anonymous.
#[server]
pub async fn sign_out() -> AppResult<()> {
    use http::header::SET_COOKIE;
    use http::HeaderValue;
    use leptos::prelude::use_context;
    use leptos_axum::ResponseOptions;
    use crate::AppError;

    let server_vars = crate::ssr::server_vars()?;
    let cookie = ssr::expired_cookie(&server_vars.session_cookie);
    let response = use_context::<ResponseOptions>()
        .ok_or_else(|| AppError::Custom("Response options not found".to_string()))?;
    response.insert_header(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).map_err(|e| AppError::Custom(e.to_string()))?,
    );
    tracing::debug!("Session cookie {} expired", server_vars.session_cookie);
    Ok(())
}

#[server]
pub async fn sign_in_url() -> AppResult<String> {
    let server_vars = crate::ssr::server_vars()?;
    Ok(server_vars.sign_in_url.to_string())
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use crate::{AppError, AppResult};
    use common::User;
    use http::header::CONTENT_TYPE;
    use http::request::Parts;
    use http::{HeaderMap, HeaderValue};
    use leptos::prelude::use_context;

    pub fn request_parts() -> AppResult<Parts> {
        use_context::<Parts>().ok_or(AppError::RequestPartsNotFound)
    }

    pub fn user_from_headers(headers: &HeaderMap, email_header: &str) -> Option<User> {
        let email = headers.get(email_header)?.to_str().ok()?.trim();
        (!email.is_empty()).then(|| User::new(email))
    }

    /// Current user, or `UnauthorizedAuthAccess` for anonymous requests.
    pub fn auth() -> AppResult<User> {
        let server_vars = crate::ssr::server_vars()?;
        let parts = request_parts()?;
        user_from_headers(&parts.headers, &server_vars.email_header).ok_or_else(|| {
            tracing::warn!("Anonymous request to {}", parts.uri.path());
            AppError::UnauthorizedAuthAccess
        })
    }

    pub fn expired_cookie(name: &str) -> String {
        format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=Lax")
    }

    pub fn set_headers() {
        let response = match use_context::<leptos_axum::ResponseOptions>() {
            Some(ro) => ro,
            None => return, // building routes in main.rs
        };
        response.insert_header(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        response.insert_header(
            http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        );
        response.insert_header(
            http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, private"),
        );
        response.insert_header(
            http::header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000"),
        )
    }

}
