use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tarefa_api::{
    auth::TokenIssuer,
    config::Config,
    db,
    repository::{PgTaskRepository, PgUserRepository},
    routes,
    usecase::{AuthUseCase, TaskUseCase, UserUseCase},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let pool = db::connect(&config).await.map_err(|e| {
        log::error!("failed to connect to database: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
    })?;

    if config.ensure_schema {
        db::ensure_schema(&pool)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let tasks = Arc::new(PgTaskRepository::new(pool));

    let user_usecase = web::Data::new(UserUseCase::new(users.clone()));
    let task_usecase = web::Data::new(TaskUseCase::new(tasks));
    let auth_usecase = web::Data::new(AuthUseCase::new(
        users,
        TokenIssuer::new(&config.jwt_secret),
    ));

    log::info!("Starting server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(user_usecase.clone())
            .app_data(task_usecase.clone())
            .app_data(auth_usecase.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
