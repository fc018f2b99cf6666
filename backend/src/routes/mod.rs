//! Route definitions for the LuneStock API

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (login/register/refresh public, me/logout protected)
        .nest("/auth", auth_routes())
        // Protected routes - product management
        .nest("/products", product_routes())
        // Protected routes - inventory
        .nest("/inventory", inventory_routes())
        // Protected routes - sales
        .nest("/sales", sale_routes())
        // Protected routes - size/color settings
        .nest("/settings", settings_routes())
        // Protected routes - dashboard
        .nest("/dashboard", dashboard_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route("/logout", post(handlers::logout))
        .route_layer(middleware::from_fn(auth_middleware));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
        .merge(protected)
}

/// Product management routes (protected)
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/:product_id/variants", post(handlers::add_variant))
        .route(
            "/:product_id/variants/:variant_id",
            put(handlers::update_variant).delete(handlers::delete_variant),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Inventory routes (protected)
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_inventory))
        .route("/low-stock", get(handlers::low_stock))
        .route("/by-product", get(handlers::stock_by_product))
        .route("/:variant_id/adjust", post(handlers::adjust_stock))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Sales routes (protected)
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::register_sale))
        .route("/export", get(handlers::export_sales))
        .route(
            "/:sale_id",
            put(handlers::update_sale).delete(handlers::delete_sale),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Size and color settings routes (protected)
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sizes",
            get(handlers::list_sizes).post(handlers::create_size),
        )
        .route(
            "/sizes/:size_id",
            put(handlers::update_size).delete(handlers::delete_size),
        )
        .route(
            "/colors",
            get(handlers::list_colors).post(handlers::create_color),
        )
        .route(
            "/colors/:color_id",
            put(handlers::update_color).delete(handlers::delete_color),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::dashboard_stats))
        .route("/sales-chart", get(handlers::sales_chart))
        .route("/stock-chart", get(handlers::stock_chart))
        .route_layer(middleware::from_fn(auth_middleware))
}
