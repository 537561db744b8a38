use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};

use taskpad::auth::TokenConfig;
use taskpad::config::Config;
use taskpad::error;
use taskpad::routes;
use taskpad::store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let tokens = TokenConfig::from_config(&config);

    let pool = store::connect(&config)
        .await
        .expect("Failed to connect to database");
    store::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    log::info!("Starting Taskpad server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(routes::health::health)
            .configure(routes::config(tokens.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
