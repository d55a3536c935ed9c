#![recursion_limit = "256"]

use leptos::prelude::{FromServerFnError, ServerFnErrorErr};
use leptos::server_fn::codec::JsonEncoding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod api;
pub mod app;
pub mod security;
#[cfg(feature = "ssr")]
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error, Serialize, Deserialize, Clone)]
pub enum AppError {
    #[cfg(feature = "ssr")]
    #[error("DotEnv error: {0}")]
    DotEnv(String),
    #[cfg(feature = "ssr")]
    #[error("Io error: {0}")]
    Io(String),
    #[cfg(feature = "ssr")]
    #[error("Json error: {0}")]
    Json(String),
    #[error("Validation Errors {0}")]
    Validation(String),
    #[error("Server vars not found")]
    ServerVarsNotFound,
    #[error("Project store not found")]
    StoreNotFound,
    #[error("Request parts not found")]
    RequestPartsNotFound,
    #[error("Unauthorized Auth Access")]
    UnauthorizedAuthAccess,
    #[error("Project not found")]
    ProjectNotFound,
    #[error("ServerFnError {0}")]
    ServerFnError(#[from] ServerFnErrorErr),
    #[error("Custom: {0}")]
    Custom(String),
}

#[cfg(feature = "ssr")]
macro_rules! impl_from_to_string {
    ($res:path, $from:ty) => {
        impl From<$from> for AppError {
            fn from(value: $from) -> Self {
                $res(value.to_string())
            }
        }
    };
}

#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::DotEnv, dotenvy::Error);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Io, std::io::Error);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Json, serde_json::Error);
#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Validation, validator::ValidationErrors);

impl FromServerFnError for AppError {
    type Encoder = JsonEncoding;
    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        value.into()
    }
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use crate::app::shell;
    use crate::store::ProjectStore;
    use crate::{AppError, AppResult};
    use axum::{
        body::Body as AxumBody,
        extract::{FromRef, State},
        http::Request,
        response::{IntoResponse, Response},
    };
    use leptos::config::LeptosOptions;
    use leptos::context::{provide_context, use_context};
    use leptos_axum::{handle_server_fns_with_context, AxumRouteListing};
    use std::sync::Arc;

    pub const DEFAULT_EMAIL_HEADER: &str = "x-forwarded-email";
    pub const DEFAULT_SESSION_COOKIE: &str = "_oauth2_proxy";
    pub const DEFAULT_SIGN_IN_URL: &str = "/oauth2/start?rd=/dashboard";

    #[derive(Clone, FromRef)]
    pub struct AppState {
        pub leptos_options: LeptosOptions,
        pub routes: Vec<AxumRouteListing>,
        pub server_vars: ServerVars,
        pub store: ProjectStore,
    }

    /// Settings of the authenticating proxy in front of the site.
    #[derive(Debug, Clone)]
    pub struct ServerVars {
        pub email_header: Arc<String>,
        pub session_cookie: Arc<String>,
        pub sign_in_url: Arc<String>,
    }

    impl ServerVars {
        pub fn new(email_header: String, session_cookie: String, sign_in_url: String) -> Self {
            Self {
                email_header: Arc::new(email_header.to_ascii_lowercase()),
                session_cookie: Arc::new(session_cookie),
                sign_in_url: Arc::new(sign_in_url),
            }
        }

        pub fn from_env() -> Self {
            let var = |key: &str, default: &str| {
                dotenvy::var(key).unwrap_or_else(|_| default.to_string())
            };
            Self::new(
                var("AUTH_EMAIL_HEADER", DEFAULT_EMAIL_HEADER),
                var("AUTH_SESSION_COOKIE", DEFAULT_SESSION_COOKIE),
                var("AUTH_SIGN_IN_URL", DEFAULT_SIGN_IN_URL),
            )
        }
    }

    pub fn server_vars() -> AppResult<ServerVars> {
        use_context::<ServerVars>().ok_or(AppError::ServerVarsNotFound)
    }

    pub fn store() -> AppResult<ProjectStore> {
        use_context::<ProjectStore>().ok_or(AppError::StoreNotFound)
    }

    pub async fn server_fn_handler(
        State(app_state): State<AppState>,
        request: Request<AxumBody>,
    ) -> impl IntoResponse {
        handle_server_fns_with_context(
            move || {
                provide_context(app_state.server_vars.clone());
                provide_context(app_state.store.clone());
            },
            request,
        )
        .await
    }

    pub async fn leptos_routes_handler(state: State<AppState>, req: Request<AxumBody>) -> Response {
        let State(app_state) = state.clone();
        let options = app_state.leptos_options.clone();
        let handler = leptos_axum::render_route_with_context(
            app_state.routes.clone(),
            move || {
                provide_context(app_state.server_vars.clone());
                provide_context(app_state.store.clone());
            },
            move || shell(app_state.leptos_options.clone()),
        );
        handler(State(options), req).await.into_response()
    }

}
