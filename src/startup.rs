use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::{auth::{AuthGate, Tokenizer}, configuration::Settings, response::ApiError, routes::{food, health_check, invoice, menu, order, order_item, table, user}, utils::Database};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let db = Database::connect(&settings.database)
            .context("Failed to connect to the database")?;
        db.run_migrations().await?;

        let tokenizer = Tokenizer::new(&settings.jwt);

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind listener")?;
        let port = listener.local_addr()?.port();

        let server = get_server(listener, db, tokenizer)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn get_server(
    listener: TcpListener,
    db: Database,
    tokenizer: Tokenizer
) -> Result<Server, anyhow::Error>{
    let db = web::Data::new(db);
    let tokenizer = web::Data::new(tokenizer);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db.clone())
            .app_data(tokenizer.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Malformed bodies, paths and query strings answer with the error envelope
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| ApiError::from(err).into()))
        .app_data(web::PathConfig::default().error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()));
}

/// Every route of the service. Everything except health, signup, login and
/// token refresh sits behind [`AuthGate`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/user")
                .route("/signup", web::post().to(user::signup))
                .route("/login", web::post().to(user::login))
                .route("/refresh-token", web::post().to(user::refresh_token))
                .service(
                    web::scope("")
                        .wrap(AuthGate)
                        .route("/logout", web::get().to(user::logout))
                        .route("/all", web::get().to(user::get_all_users))
                        .route("/{user_id}", web::get().to(user::get_user))
                )
        )
        .service(
            web::scope("/table")
                .wrap(AuthGate)
                .route("/create", web::post().to(table::create_table))
                .route("/all", web::get().to(table::get_all_tables))
                .service(
                    web::resource("/{table_id}")
                        .route(web::get().to(table::get_table))
                        .route(web::put().to(table::update_table))
                        .route(web::delete().to(table::delete_table))
                )
        )
        .service(
            web::scope("/menu")
                .wrap(AuthGate)
                .route("/create", web::post().to(menu::create_menu))
                .route("/all", web::get().to(menu::get_all_menus))
                .service(
                    web::resource("/{menu_id}")
                        .route(web::get().to(menu::get_menu))
                        .route(web::put().to(menu::update_menu))
                        .route(web::delete().to(menu::delete_menu))
                )
        )
        .service(
            web::scope("/food")
                .wrap(AuthGate)
                .route("/create", web::post().to(food::create_food))
                .route("/all", web::get().to(food::get_all_foods))
                .service(
                    web::resource("/{food_id}")
                        .route(web::get().to(food::get_food))
                        .route(web::put().to(food::update_food))
                        .route(web::delete().to(food::delete_food))
                )
        )
        .service(
            web::scope("/order-item")
                .wrap(AuthGate)
                .route("/create", web::post().to(order_item::create_order_items))
                .route("/all", web::get().to(order_item::get_all_order_items))
                .route("/order/{order_id}", web::get().to(order_item::get_order_items_by_order))
                .service(
                    web::resource("/{order_item_id}")
                        .route(web::get().to(order_item::get_order_item))
                        .route(web::put().to(order_item::update_order_item))
                        .route(web::delete().to(order_item::delete_order_item))
                )
        )
        .service(
            web::scope("/order")
                .wrap(AuthGate)
                .route("/create", web::post().to(order::create_order))
                .route("/all", web::get().to(order::get_all_orders))
                .service(
                    web::resource("/{order_id}")
                        .route(web::get().to(order::get_order))
                        .route(web::put().to(order::update_order))
                        .route(web::delete().to(order::delete_order))
                )
        )
        .service(
            web::scope("/invoice")
                .wrap(AuthGate)
                .route("/create", web::post().to(invoice::create_invoice))
                .route("/all", web::get().to(invoice::get_all_invoices))
                .service(
                    web::resource("/{invoice_id}")
                        .route(web::get().to(invoice::get_invoice))
                        .route(web::put().to(invoice::update_invoice))
                        .route(web::delete().to(invoice::delete_invoice))
                )
        );
}
