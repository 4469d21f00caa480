use actix::Actor;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};

use feedboard::prelude::*;
use feedboard::routes;
use feedboard::updater::Updater;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::from_env(
            env_logger::Env::default().default_filter_or("actix_web=info,feedboard=debug")
        )
        .init();

    let cfg = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let data = AppData::new(cfg.clone());

    // Fetches the board now and keeps it fresh afterwards
    let _updater = Updater::new(data.feeds.clone()).start();

    let server = HttpServer::new(move || {
        App::new()
            .data(data.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(routes::service())
            .default_service(web::route().to(|req: HttpRequest| async move {
                log::debug!("No route for {} {}", req.method(), req.path());
                HttpResponse::NotFound()
            }))
    });

    #[cfg(feature = "dev")]
    let server = {
        let mut listenfd = listenfd::ListenFd::from_env();
        match listenfd.take_tcp_listener(0)? {
            Some(listener) => server.listen(listener)?,
            None => server.bind((cfg.http_host.as_str(), cfg.http_port))?,
        }
    };
    #[cfg(not(feature = "dev"))]
    let server = server.bind((cfg.http_host.as_str(), cfg.http_port))?;

    log::info!("Listening on http://{}:{}", cfg.http_host, cfg.http_port);

    server.run().await
}
