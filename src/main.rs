use cotchel_admin_notifier::application::{self, ApplicationEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    tracing::info!("creating application state");
    let (state, state_to_close) = application::create_state(&env).await?;

    tracing::info!("application started");
    application::shutdown_signal().await;

    application::close(state, state_to_close).await;

    tracing::info!("application stopped");

    Ok(())
}
