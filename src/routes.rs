// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{questions, scores, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (users, questions, scores).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool, Config, credential verifier).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Only the one configured client origin is allowed through.
    let cors = match HeaderValue::from_str(&state.config.allowed_origin) {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                "Invalid ALLOWED_ORIGIN {:?} ({}); cross-origin requests will be rejected",
                state.config.allowed_origin,
                e
            );
            cors
        }
    };

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/login", post(users::login))
        .route("/students", get(users::list_students));

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/count", get(questions::count_questions))
        .route("/{id}", delete(questions::delete_question));

    let score_routes = Router::new()
        .route("/", post(scores::submit_score))
        .route("/all", get(scores::all_scores))
        .route("/user/{user_id}", get(scores::user_history))
        .route("/user/{user_id}/best", get(scores::user_best_score))
        .route("/user/{user_id}/top", get(scores::user_top_scores));

    Router::new()
        .nest("/api/users", user_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/scores", score_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
