use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use anyhow::Result;
use tracing::info;

use courses::{
    application::Application, config::Config, http, postgres, repository::PgCourseRepository,
    telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let config = Config::from_env()?;
    let pool = postgres::connect(&config).await?;
    postgres::setup(&pool).await?;

    let app = Data::new(Application::new(PgCourseRepository::new(pool)));

    info!(
        host = %config.http_host,
        port = config.http_port,
        "starting course service"
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app.clone())
            .configure(http::configure::<PgCourseRepository>)
    })
    .bind((config.http_host.as_str(), config.http_port))?
    .run()
    .await?;
    Ok(())
}
