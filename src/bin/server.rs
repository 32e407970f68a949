use axum::{Router, middleware, routing::post};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courseboard::admin;
use courseboard::config::AppConfig;
use courseboard::db::connection::DbConnection;
use courseboard::web::{
    mw_auth::{mw_ctx_resolver, mw_require_auth},
    routes_admin, routes_courses, routes_users,
    state::ApiState,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let db = DbConnection::new(&config.database_url).setup();
    admin::db::seed_from_config(&config, &db).expect("Failed to seed bootstrap admin");

    let state = ApiState::new(&config, db);

    let admin_protected = Router::new()
        .route("/logout", post(routes_admin::logout))
        .nest("/courses", routes_courses::routes())
        .route_layer(middleware::from_fn(mw_require_auth));

    let admin_routes = Router::new()
        .route("/login", post(routes_admin::login))
        .merge(admin_protected)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            mw_ctx_resolver,
        ));

    let app = Router::new()
        .nest("/users", routes_users::routes())
        .nest("/admin", admin_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(CookieManagerLayer::new())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Server error");
}
