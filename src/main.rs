use actix_web::{App, HttpServer, web};

use wavesight::db::establish_connection_pool;
use wavesight::domain::earnings::EarningsConfig;
use wavesight::domain::policy::ValidationPolicy;
use wavesight::models::config::ServerConfig;
use wavesight::repository::DieselRepository;
use wavesight::routes::categories::show_categories;
use wavesight::routes::trends::{list_trends, show_trend, submit_trend};
use wavesight::routes::validations::submit_vote;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let policy = ValidationPolicy::default();
    let earnings = EarningsConfig::default();

    log::info!(
        "Starting wavesight on {}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(policy.clone()))
            .app_data(web::Data::new(earnings.clone()))
            .service(submit_trend)
            .service(list_trends)
            .service(show_trend)
            .service(submit_vote)
            .service(show_categories)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
