#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> website::AppResult<()> {
    use axum::{routing::get, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::net::SocketAddr;
    use tower_http::compression::CompressionLayer;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use website::app::*;
    use website::ssr::{leptos_routes_handler, server_fn_handler, AppState, ServerVars};
    use website::store::ProjectStore;
    use website::AppError;

    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).map_err(|e| AppError::Custom(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let store = match dotenvy::var("PROJECTS_SEED_FILE") {
        Ok(path) => ProjectStore::from_seed_file(path).await?,
        Err(_) => ProjectStore::default(),
    };

    let app_state = AppState {
        leptos_options: leptos_options.clone(),
        routes: routes.clone(),
        server_vars: ServerVars::from_env(),
        store,
    };

    let app = Router::<AppState>::new()
        .route(
            "/api/{*wildcard}",
            get(server_fn_handler).post(server_fn_handler),
        )
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .with_state(app_state);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
