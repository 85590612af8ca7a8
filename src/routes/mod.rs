use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, auth, booking, catalog};
use crate::middleware::auth::{auth_middleware, require_staff};
use crate::middleware::rate_limit::create_public_governor;
use crate::middleware::role_rate_limit::create_customer_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Per-user governor for the booking endpoints; IP-based governor for
    // everything unauthenticated.
    let customer_governor = create_customer_governor();
    let public_governor = create_public_governor();

    // Public routes (IP rate limited)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .layer(public_governor);

    // Catalog reads (requires auth, any role)
    let catalog_routes = Router::new()
        .route("/screens", get(catalog::list_screens))
        .route("/movies", get(catalog::list_movies))
        .route("/shows", get(catalog::list_shows))
        .route("/shows/{id}", get(catalog::get_show))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Staff routes (requires auth + owner/manager role)
    let admin_routes = Router::new()
        // Screen management
        .route("/screens", post(admin::create_screen))
        .route("/screens/{id}", delete(admin::delete_screen))
        // Movie management
        .route("/movies", post(admin::create_movie))
        .route("/movies/{id}", put(admin::update_movie))
        .route("/movies/{id}", delete(admin::delete_movie))
        // Show management
        .route("/shows", post(admin::create_show))
        .route("/shows/{id}", put(admin::update_show))
        .route("/shows/{id}", delete(admin::delete_show))
        .route("/shows/{show_id}/price/{price_id}", put(admin::update_price))
        .layer(middleware::from_fn(require_staff))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Booking routes (requires auth, any role can book)
    let booking_routes = Router::new()
        .route("/", get(booking::my_bookings))
        .route("/{booked_show_id}", post(booking::book_seats))
        .layer(customer_governor)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api", catalog_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/bookings", booking_routes)
        .with_state(state)
}
