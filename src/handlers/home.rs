use axum::response::Html;

const HOME_PAGE: &str = include_str!("../../templates/home.html");

/// GET / handler - render the home page.
pub async fn home_handler() -> Html<&'static str> {
    tracing::debug!("Rendering home page");
    Html(HOME_PAGE)
}
