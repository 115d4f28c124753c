use promptcraft_proxy::{build_adapter, router, AppState, ProxyConfig};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛰️  Promptcraft proxy initializing...");

    // Local runs may keep the key in .env instead of Secrets.toml
    dotenvy::dotenv().ok();

    let config =
        ProxyConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()));

    if config.api_key.is_some() {
        tracing::info!("🔐 OPENROUTER_API_KEY loaded");
    } else {
        tracing::warn!("⚠️  No OPENROUTER_API_KEY set - every forward will answer 500");
    }

    let adapter = build_adapter(&config);
    tracing::info!("🔀 Proxy variant: {}", adapter.variant_name());
    tracing::info!("📚 Swagger UI: /swagger-ui");

    let router = router(AppState::new(adapter));

    tracing::info!("✅ Promptcraft proxy ready - forwarding to {}", config.upstream_url);

    Ok(router.into())
}
