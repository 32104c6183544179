use crate::handlers;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Every path and method is answered with the policy; restricting requests to
/// `/.well-known/mta-sts.txt` is left to the edge in front of the listener.
pub fn create_policy_routes(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::serve_policy)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
