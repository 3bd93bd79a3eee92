use crate::{
    error::{AppError, MessageResponse},
    models::{Task, TaskInput},
    routes::{parse_id, IdMessages},
    usecase::TaskUseCase,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

const TASK_ID: IdMessages = IdMessages {
    empty: "Id da Tarefa não pode ser nulo",
    not_a_number: "Id da Tarefa precisa ser um número",
};

/// Retrieves every task, including soft-deleted ones.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects in store order.
/// - `500 Internal Server Error`: store failure.
#[get("/tarefas")]
pub async fn list_tasks(usecase: web::Data<TaskUseCase>) -> Result<impl Responder, AppError> {
    let tasks = usecase.list().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// ## Request Body:
/// A JSON object matching `TaskInput`:
/// - `nome_tarefa`: title (required, non-empty).
/// - `conteudo_tarefa`: description (required, may be empty).
/// - `usuario_responsavel_tarefa`: responsible-user reference (required).
/// - `finalizado`: `"S"` or `"N"`.
///
/// ## Responses:
/// - `201 Created`: the newly created `Task` including `id_tarefa`.
/// - `400 Bad Request`: malformed JSON, missing or unknown fields.
/// - `422 Unprocessable Entity`: a field failed validation.
/// - `500 Internal Server Error`: store failure.
#[post("/tarefa")]
pub async fn create_task(
    usecase: web::Data<TaskUseCase>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = usecase.create(Task::from_input(task_data.into_inner())).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// Soft-deleted tasks are still returned.
///
/// ## Responses:
/// - `200 OK`: the `Task`.
/// - `400 Bad Request`: id is empty or not a number.
/// - `404 Not Found`: no task with this id.
/// - `500 Internal Server Error`: store failure.
#[get("/tarefa/{id}")]
pub async fn get_task(
    usecase: web::Data<TaskUseCase>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id, &TASK_ID)?;

    match usecase.get_by_id(id).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Tarefa não encontrada".into())),
    }
}

/// Lists the active tasks whose responsible-user reference equals the path
/// segment. The reference is matched verbatim, it is not parsed as a number.
///
/// ## Responses:
/// - `200 OK`: JSON array, possibly empty.
/// - `400 Bad Request`: empty reference.
/// - `500 Internal Server Error`: store failure.
#[get("/tarefausuario/{user_ref}")]
pub async fn list_tasks_by_user(
    usecase: web::Data<TaskUseCase>,
    user_ref: web::Path<String>,
) -> Result<impl Responder, AppError> {
    if user_ref.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Id do Usuário não pode ser nulo".into(),
        ));
    }

    let tasks = usecase.list_by_responsible_user(&user_ref).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Updates an existing task.
///
/// ## Request Body:
/// Same shape as `create_task`.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` confirmation.
/// - `400 Bad Request`: bad id or body.
/// - `404 Not Found`: no task with this id.
/// - `422 Unprocessable Entity`: a field failed validation.
/// - `500 Internal Server Error`: store failure.
#[put("/tarefa/{id}")]
pub async fn update_task(
    usecase: web::Data<TaskUseCase>,
    task_id: web::Path<String>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id, &TASK_ID)?;
    task_data.validate()?;

    let task = Task::from_input(task_data.into_inner());
    usecase
        .update_by_id(id, &task)
        .await
        .map_err(|e| AppError::from_repo(e, "Tarefa não encontrada"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Tarefa atualizada com sucesso")))
}

/// Soft-deletes a task by its ID.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` confirmation.
/// - `400 Bad Request`: bad id.
/// - `404 Not Found`: no such task, or already deleted.
/// - `500 Internal Server Error`: store failure.
#[delete("/tarefa/{id}")]
pub async fn delete_task(
    usecase: web::Data<TaskUseCase>,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_id(&task_id, &TASK_ID)?;

    usecase
        .soft_delete_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(e, "Tarefa não encontrada ou já deletada"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Tarefa deletada com sucesso")))
}
