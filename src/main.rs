use anyhow::Context;
use restaurant::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}};

#[actix_web::main]
async fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("restaurant".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get().context("Failed to read configuration")?;

    let application = Application::new(config).await?;
    tracing::info!("Listening on {}:{}", application.host, application.port);
    application.run_until_stopped().await?;
    Ok(())
}
