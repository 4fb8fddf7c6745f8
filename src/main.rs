use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use scholarhub::config::AppConfig;
use scholarhub::notifications::{NotificationHub, scheduler};
use scholarhub::routes;

const SWEEP_INTERVAL: Duration = Duration::from_secs(30);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let secret_key = config.session_key();
    let hub = NotificationHub::new(config.toast_ttl);

    // Queues of visitors who never come back are dropped here.
    scheduler::spawn_sweeper(hub.clone(), SWEEP_INTERVAL);

    let bind_addr = config.bind_addr.clone();
    let cookie_secure = config.cookie_secure;
    log::info!("Starting {} at http://{bind_addr}", config.app_name);

    let config = web::Data::new(config);
    let hub = web::Data::new(hub);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(hub.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
