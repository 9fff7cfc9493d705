pub mod admin;
pub mod app;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    let config = shared::config::load_config()?;
    system::tracing::initialize(std::path::Path::new(&config.logging.dir))?;
    tracing::info!(
        "Configuration loaded (admin page '{}', core REST base '{}')",
        config.admin.slug,
        config.core.rest_base
    );

    // Panels are registered here, before the listener accepts any request
    let state = app::bootstrap(config, &usecases::builtin_modules());

    let server = &state.config.server;
    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;
    let app = routes::configure_routes(state.clone());

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!(
                "Admin page available at http://{}{}?page={}",
                addr,
                state.config.admin.admin_url,
                state.config.admin.slug
            );
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
