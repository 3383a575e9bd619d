#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use textile_showroom::app::*;
    use textile_showroom::core::config::Config;
    use textile_showroom::core::leads::{LeadApiState, LeadInbox, lead_api_router};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: lead_inbox={}, inbox_token={}, images_dir={}",
        config.has_lead_inbox(),
        config.has_lead_inbox_token(),
        config.images_dir()
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets (.br / .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Catalog imagery from the configured directory
    let images_service = ServeDir::new(config.images_dir());

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .nest_service("/images", images_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Lead capture API
    let lead_api = lead_api_router(LeadApiState {
        inbox: LeadInbox::from_config(&config),
    });

    let app = Router::new()
        .merge(lead_api)
        .merge(leptos_router)
        // Brotli first, gzip as fallback
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Lead API: POST http://{}/api/leads", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
