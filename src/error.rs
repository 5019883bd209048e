use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const UNAUTHORIZED_PAGE: &str = include_str!("../templates/errors/401.html");
const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");
const SERVER_FAULT_PAGE: &str = include_str!("../templates/errors/500.html");

/// Error categories with a dedicated status page.
///
/// This is the closed set of faults the application renders for the
/// client. Every kind maps to exactly one embedded template; codes
/// outside the mapped set carry their number in `Other` but render as
/// a server fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request needs credentials it did not present.
    Unauthorized,
    /// No registered route or static asset matches the request.
    NotFound,
    /// Anything the application cannot express more precisely.
    ServerFault,
    /// A status code with no page of its own.
    Other(u16),
}

impl ErrorKind {
    /// Map a status code to its kind. Absent or unmapped codes are
    /// server faults.
    pub fn from_status(code: Option<u16>) -> Self {
        match code {
            Some(401) => ErrorKind::Unauthorized,
            Some(404) => ErrorKind::NotFound,
            Some(500) | None => ErrorKind::ServerFault,
            Some(other) => ErrorKind::Other(other),
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::ServerFault | ErrorKind::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => UNAUTHORIZED_PAGE,
            ErrorKind::NotFound => NOT_FOUND_PAGE,
            ErrorKind::ServerFault | ErrorKind::Other(_) => SERVER_FAULT_PAGE,
        }
    }
}

impl IntoResponse for ErrorKind {
    fn into_response(self) -> Response {
        (self.status(), Html(self.page())).into_response()
    }
}

/// Fallback handler: any request nothing else claimed renders the 404
/// page.
pub async fn not_found() -> ErrorKind {
    ErrorKind::NotFound
}
