use crate::{
    auth::{LoginRequest, TokenResponse},
    error::{AppError, MessageResponse},
    usecase::AuthUseCase,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Login user
///
/// Checks the credentials and returns a signed token. Unknown login and
/// wrong password produce the same `401` response.
#[post("/login")]
pub async fn login(
    usecase: web::Data<AuthUseCase>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let token = usecase.login(&login_data.login, &login_data.senha).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Logout user
///
/// The server keeps no session, so this only acknowledges the request.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("Logout efetuado com sucesso"))
}
