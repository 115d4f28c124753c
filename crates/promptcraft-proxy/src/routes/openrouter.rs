//! OpenRouter forwarding route

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use promptcraft::{ProxyResponse, PROXY_PATH};

use crate::models::ProxyRequest;
use crate::AppState;

/// Forward a chat-completion request with the server-held key
#[utoipa::path(
    post,
    path = "/api/openrouter",
    request_body = ProxyRequest,
    responses(
        (status = 200, description = "Upstream response relayed verbatim (any upstream status is passed through)"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Missing server key, malformed body or network failure")
    ),
    tag = "Proxy"
)]
pub async fn forward_completion(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let reply = state.adapter.forward(&body, host).await;
    to_response(reply)
}

async fn method_not_allowed(State(state): State<AppState>) -> Response {
    to_response(state.adapter.method_not_allowed())
}

fn to_response(reply: ProxyResponse) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, reply.body).into_response();

    for (name, value) in reply.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!("Dropping invalid header {}", name),
        }
    }

    response
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        PROXY_PATH,
        post(forward_completion).fallback(method_not_allowed),
    )
}
