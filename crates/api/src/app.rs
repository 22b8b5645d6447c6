use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, require_admin, trace_id};
use crate::routes::{admin_cms, auth, bookings, clubs, cms, events, health, map_config};
use crate::services::email::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub email: EmailService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let email = EmailService::new(config.email.clone());
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        email,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes plus session-authenticated routes (the SessionUser
    // extractor rejects unauthenticated requests on the routes that need it)
    let api_routes = Router::new()
        // Health and metrics
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        // Auth and profile
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::current_user))
        .route(
            "/api/auth/user",
            get(auth::current_user).put(auth::update_profile),
        )
        // Clubs and memberships
        .route("/api/clubs", get(clubs::list_clubs).post(clubs::create_club))
        .route(
            "/api/clubs/:id",
            get(clubs::get_club)
                .put(clubs::update_club)
                .delete(clubs::delete_club),
        )
        .route("/api/clubs/:id/join", post(clubs::join_club))
        .route("/api/clubs/:id/leave", post(clubs::leave_club))
        .route("/api/clubs/:id/membership", get(clubs::membership_status))
        .route("/api/clubs/:id/members", get(clubs::list_members))
        .route("/api/clubs/:id/events", get(clubs::club_events))
        .route(
            "/api/clubs/:id/events/upcoming",
            get(clubs::upcoming_club_events),
        )
        .route("/api/user/clubs", get(clubs::user_clubs))
        // Events
        .route("/api/events", get(events::list_association_events))
        .route("/api/events/:id", get(events::get_event))
        // Bookings
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/:reference", get(bookings::get_booking))
        .route("/api/booking/settings", get(bookings::get_booking_settings))
        // Public CMS reads
        .route("/api/cms/hero", get(cms::get_hero))
        .route("/api/cms/navbar", get(cms::get_navbar))
        .route("/api/cms/theme", get(cms::get_theme))
        .route("/api/cms/contact", get(cms::get_contact))
        .route("/api/cms/footer", get(cms::get_footer))
        .route("/api/cms/seo", get(cms::get_seo))
        .route("/api/cms/about", get(cms::get_about))
        .route("/api/cms/president-message", get(cms::get_president_message))
        .route("/api/cms/partner-settings", get(cms::get_partner_settings))
        .route("/api/cms/sections", get(cms::list_sections))
        .route("/api/cms/sections/:id/blocks", get(cms::list_section_blocks))
        .route("/api/cms/focus-items", get(cms::list_focus_items))
        .route("/api/cms/team-members", get(cms::list_team_members))
        .route("/api/cms/testimonials", get(cms::list_testimonials))
        .route("/api/cms/stats", get(cms::list_stats))
        .route("/api/cms/partners", get(cms::list_partners))
        .route("/api/cms/media", get(cms::list_media))
        // Map style proxy
        .route("/api/config/map-style", get(map_config::map_style));

    // Admin routes (require an admin session)
    let admin_routes = Router::new()
        // Event management
        .route(
            "/api/admin/events",
            get(events::admin_list_events).post(events::create_event),
        )
        .route(
            "/api/admin/events/:id",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/api/admin/events/:id/gallery", post(events::add_gallery_image))
        .route(
            "/api/admin/events/:id/gallery/:image_id",
            delete(events::delete_gallery_image),
        )
        .route("/api/admin/events/:id/schedule", post(events::add_schedule_day))
        .route(
            "/api/admin/events/:id/schedule/:day_id",
            delete(events::delete_schedule_day),
        )
        .route("/api/admin/events/:id/reviews", post(events::add_review))
        .route(
            "/api/admin/events/:id/reviews/:review_id",
            delete(events::delete_review),
        )
        .route("/api/admin/events/:id/prices", post(events::add_price_tier))
        .route(
            "/api/admin/events/:id/prices/:tier_id",
            delete(events::delete_price_tier),
        )
        // Booking management
        .route("/api/admin/bookings", get(bookings::admin_list_bookings))
        .route(
            "/api/admin/bookings/:reference/status",
            put(bookings::update_booking_status),
        )
        .route(
            "/api/admin/booking/settings",
            put(bookings::update_booking_settings),
        )
        // Singleton CMS settings
        .route("/api/admin/cms/hero", put(admin_cms::update_hero))
        .route("/api/admin/cms/navbar", put(admin_cms::update_navbar))
        .route("/api/admin/cms/theme", put(admin_cms::update_theme))
        .route("/api/admin/cms/contact", put(admin_cms::update_contact))
        .route("/api/admin/cms/footer", put(admin_cms::update_footer))
        .route("/api/admin/cms/seo", put(admin_cms::update_seo))
        .route("/api/admin/cms/about", put(admin_cms::update_about))
        .route(
            "/api/admin/cms/president-message",
            put(admin_cms::update_president_message),
        )
        .route(
            "/api/admin/cms/partner-settings",
            put(admin_cms::update_partner_settings),
        )
        // CMS collections
        .route("/api/admin/cms/sections", post(admin_cms::create_section))
        .route(
            "/api/admin/cms/sections/:id",
            put(admin_cms::update_section).delete(admin_cms::delete_section),
        )
        .route("/api/admin/cms/blocks", post(admin_cms::create_block))
        .route(
            "/api/admin/cms/blocks/:id",
            put(admin_cms::update_block).delete(admin_cms::delete_block),
        )
        .route("/api/admin/cms/focus-items", post(admin_cms::create_focus_item))
        .route(
            "/api/admin/cms/focus-items/:id",
            put(admin_cms::update_focus_item).delete(admin_cms::delete_focus_item),
        )
        .route(
            "/api/admin/cms/team-members",
            post(admin_cms::create_team_member),
        )
        .route(
            "/api/admin/cms/team-members/:id",
            put(admin_cms::update_team_member).delete(admin_cms::delete_team_member),
        )
        .route(
            "/api/admin/cms/testimonials",
            get(admin_cms::admin_list_testimonials).post(admin_cms::create_testimonial),
        )
        .route(
            "/api/admin/cms/testimonials/:id",
            put(admin_cms::update_testimonial).delete(admin_cms::delete_testimonial),
        )
        .route("/api/admin/cms/stats", post(admin_cms::create_stat))
        .route(
            "/api/admin/cms/stats/:id",
            put(admin_cms::update_stat).delete(admin_cms::delete_stat),
        )
        .route("/api/admin/cms/partners", post(admin_cms::create_partner))
        .route(
            "/api/admin/cms/partners/:id",
            put(admin_cms::update_partner).delete(admin_cms::delete_partner),
        )
        .route("/api/admin/cms/media", post(admin_cms::create_media_asset))
        .route(
            "/api/admin/cms/media/:id",
            delete(admin_cms::delete_media_asset),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(api_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
