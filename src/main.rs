mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web::Data, App, HttpServer};
use leptos::config::get_configuration;
use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};

use blockpress::config::SiteConfig;
use blockpress::frontend::{shell, App as SiteApp};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = get_configuration(None)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let addr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| conf.leptos_options.site_addr.to_string());

    let site = SiteConfig::global();
    log::info!(
        "Serving pages from {} (default page '{}') on {}",
        site.content_dir.display(),
        site.default_page,
        addr
    );

    let routes = generate_route_list(SiteApp);

    HttpServer::new(move || {
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .wrap(Logger::default())
            .wrap(web::middleware::SecurityHeaders)
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{}/pkg", site_root)))
            .leptos_routes(routes.clone(), {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options))
    })
    .bind(addr)?
    .run()
    .await
}
