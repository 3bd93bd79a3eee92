use crate::{
    error::{AppError, MessageResponse},
    models::{User, UserInput},
    routes::{parse_id, IdMessages},
    usecase::UserUseCase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

const USER_ID: IdMessages = IdMessages {
    empty: "Id do Usuario nao pode ser nulo",
    not_a_number: "Id do Usuario precisa ser um numero",
};

/// Lists every user, including soft-deleted ones.
///
/// ## Responses:
/// - `200 OK`: JSON array of users.
/// - `500 Internal Server Error`: store failure.
#[get("/usuarios")]
pub async fn list_users(usecase: web::Data<UserUseCase>) -> Result<impl Responder, AppError> {
    let users = usecase.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Creates a user.
///
/// ## Request Body:
/// `{"nome", "login", "senha"}`, all required, nothing else allowed.
///
/// ## Responses:
/// - `201 Created`: the stored user including its new `id`.
/// - `400 Bad Request`: malformed JSON, missing or unknown fields.
/// - `422 Unprocessable Entity`: a field is empty or too long.
/// - `500 Internal Server Error`: store failure.
#[post("/usuario")]
pub async fn create_user(
    usecase: web::Data<UserUseCase>,
    user_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    user_data.validate()?;

    let user = usecase.create(User::from_input(user_data.into_inner())).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Retrieves a user by id.
///
/// ## Responses:
/// - `200 OK`: the user.
/// - `400 Bad Request`: id is empty or not a number.
/// - `404 Not Found`: no user with this id.
/// - `500 Internal Server Error`: store failure.
#[get("/usuario/{id}")]
pub async fn get_user(
    usecase: web::Data<UserUseCase>,
    user_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&user_id, &USER_ID)?;

    match usecase.get_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound(
            "Usuario nao foi encontrado na base de dados".into(),
        )),
    }
}

/// Overwrites nome, login and senha of a user.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` confirmation.
/// - `400 Bad Request`: bad id or body.
/// - `404 Not Found`: no user with this id.
/// - `422 Unprocessable Entity`: a field failed validation.
/// - `500 Internal Server Error`: store failure.
#[put("/usuario/{id}")]
pub async fn update_user(
    usecase: web::Data<UserUseCase>,
    user_id: web::Path<String>,
    user_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&user_id, &USER_ID)?;
    user_data.validate()?;

    let user = User::from_input(user_data.into_inner());
    usecase
        .update_by_id(id, &user)
        .await
        .map_err(|e| AppError::from_repo(e, "Usuario não encontrado"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Usuario atualizado com sucesso")))
}

/// Soft-deletes a user.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` confirmation.
/// - `400 Bad Request`: bad id.
/// - `404 Not Found`: no such user, or already deleted.
/// - `500 Internal Server Error`: store failure.
#[delete("/usuario/{id}")]
pub async fn delete_user(
    usecase: web::Data<UserUseCase>,
    user_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&user_id, &USER_ID)?;

    usecase
        .soft_delete_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(e, "Usuário não encontrado ou já deletado"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Usuário deletado com sucesso")))
}
