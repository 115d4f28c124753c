//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{ErrorBody, HealthCheck, ProxyRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::openrouter::forward_completion,
        crate::health_check,
    ),
    components(schemas(ProxyRequest, ErrorBody, HealthCheck)),
    tags(
        (name = "Proxy", description = "Chat-completion forwarding with a server-held key"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Promptcraft Proxy",
        description = "Forwards chat-completion requests to OpenRouter"
    )
)]
pub struct ApiDoc;
