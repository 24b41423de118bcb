use dotenvy::dotenv;
use order_api::infrastructure::customer_repo::DieselCustomerRepository;
use order_api::infrastructure::seed::seed_demo_data;
use order_api::{build_app_service, build_server, create_pool, run_migrations};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    let pool = create_pool(&database_url);
    run_migrations(&pool);

    let seed_requested = env::var("SEED_DEMO_DATA")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed_requested {
        let customers = DieselCustomerRepository::new(pool.clone());
        let service = build_app_service(pool.clone());
        if let Err(e) = seed_demo_data(&customers, &service) {
            log::error!("Failed to seed demo data: {}", e);
        }
    }

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(pool, &host, port)?.await
}
