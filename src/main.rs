#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use portfolio_site::{config::SiteConfig, server, telemetry};

    let config = SiteConfig::from_env()?;
    telemetry::init_tracing(&config.log_level, config.json_logs)?;

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let state = server::AppState::new(conf.leptos_options, &config.mail)?;
    let app = server::router(state);

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
