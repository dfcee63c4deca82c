use axum::{extract::Extension, response::Html};

use crate::server::app::AppState;

/// `GET /` - liveness page. Never touches the database.
pub async fn root_handler(Extension(state): Extension<AppState>) -> Html<String> {
    Html(format!("<h1>Server is ok at {}</h1>", state.port))
}
