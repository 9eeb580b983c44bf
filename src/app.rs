use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/analysis", get(handlers::get_analysis))
        .route("/api/meals", post(handlers::add_meal))
        .route("/api/water", post(handlers::adjust_water))
        .route("/api/mood", post(handlers::set_mood))
        .route("/api/goal", post(handlers::set_goal))
        .route("/api/foods", get(handlers::search_foods))
        .route("/api/foods/add", post(handlers::add_food))
        .route("/api/messages", get(handlers::get_messages))
        .route("/api/chat", post(handlers::chat))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%status, ?latency, "response");
                        } else {
                            tracing::info!(%status, ?latency, "response");
                        }
                    },
                ),
        )
}
