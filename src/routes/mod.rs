pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::error::AppError;

/// Registers every endpoint plus the JSON extractor configuration.
///
/// Handlers expect `web::Data<UserUseCase>`, `web::Data<TaskUseCase>` and
/// `web::Data<AuthUseCase>` to be registered on the `App`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::ping)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(tasks::list_tasks)
        .service(tasks::create_task)
        .service(tasks::get_task)
        .service(tasks::list_tasks_by_user)
        .service(tasks::update_task)
        .service(tasks::delete_task)
        .service(
            web::scope("/auth")
                .service(auth::login)
                .service(auth::logout),
        );
}

/// Malformed bodies become `400 {"message": ...}` instead of actix's plain
/// text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Messages used when a path identifier is rejected.
pub(crate) struct IdMessages {
    pub empty: &'static str,
    pub not_a_number: &'static str,
}

/// Parses a numeric path identifier before any business logic runs.
pub(crate) fn parse_id(raw: &str, messages: &IdMessages) -> Result<i32, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest(messages.empty.to_string()));
    }
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(messages.not_a_number.to_string()))
}
