//! Users API handlers.
//!
//! ```text
//! POST   /api/usuarios      {"email":"a@b.com","nombre":"Ana","apellidos":"Lopez"}
//! GET    /api/usuarios
//! GET    /api/usuarios/{id}
//! PUT    /api/usuarios/{id} {"email":"a@b.com","nombre":"Ana","apellidos":"Lopez"}
//! DELETE /api/usuarios/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, USER_NOT_FOUND_MESSAGE, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_draft, parse_user_id};

/// Request body for create and update.
///
/// Every field is optional at the JSON layer so that an absent field is
/// reported as a validation failure naming that field.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    /// Contact email.
    #[serde(default)]
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    /// Given name.
    #[serde(default)]
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    /// Surname(s).
    #[serde(default)]
    #[schema(example = "Lopez")]
    pub apellidos: Option<String>,
}

/// Confirmation message wrapping the affected record.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserEnvelope {
    /// Human-readable confirmation.
    #[schema(example = "Usuario creado exitosamente.")]
    pub message: String,
    /// Record after the operation.
    pub usuario: User,
}

/// Bare confirmation message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[schema(example = "Usuario con ID 1 eliminado exitosamente.")]
    pub message: String,
}

fn known_id(raw: &str) -> Result<UserId, Error> {
    parse_user_id(raw).ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
}

/// Create a user with the next identifier.
#[utoipa::path(
    post,
    path = "/api/usuarios",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing field or malformed body", body = Error),
        (status = 500, description = "Record store failure", body = Error)
    ),
    tags = ["usuarios"],
    operation_id = "createUser"
)]
#[post("/usuarios")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let UserPayload {
        email,
        nombre,
        apellidos,
    } = payload.into_inner();
    let draft = parse_draft(email, nombre, apellidos)?;
    let usuario = state.users_command.create_user(draft).await?;
    Ok(HttpResponse::Created().json(UserEnvelope {
        message: "Usuario creado exitosamente.".to_owned(),
        usuario,
    }))
}

/// List every user in storage order.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use usuarios::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/usuarios",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Record store failure", body = Error)
    ),
    tags = ["usuarios"],
    operation_id = "listUsers"
)]
#[get("/usuarios")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "Unknown or non-numeric identifier", body = Error),
        (status = 500, description = "Record store failure", body = Error)
    ),
    tags = ["usuarios"],
    operation_id = "getUser"
)]
#[get("/usuarios/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = known_id(&path.into_inner())?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Missing field or malformed body", body = Error),
        (status = 404, description = "Unknown or non-numeric identifier", body = Error),
        (status = 500, description = "Record store failure", body = Error)
    ),
    tags = ["usuarios"],
    operation_id = "updateUser"
)]
#[put("/usuarios/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let UserPayload {
        email,
        nombre,
        apellidos,
    } = payload.into_inner();
    let draft = parse_draft(email, nombre, apellidos)?;
    let id = known_id(&path.into_inner())?;
    let usuario = state.users_command.update_user(id, draft).await?;
    Ok(web::Json(UserEnvelope {
        message: "Usuario actualizado exitosamente.".to_owned(),
        usuario,
    }))
}

/// Delete every user with the identifier; unknown identifiers still succeed.
///
/// A non-numeric identifier matches no record, so the store is left alone.
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Delete applied", body = MessageResponse),
        (status = 500, description = "Record store failure", body = Error)
    ),
    tags = ["usuarios"],
    operation_id = "deleteUser"
)]
#[delete("/usuarios/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let raw = path.into_inner();
    if let Some(id) = parse_user_id(&raw) {
        state.users_command.delete_user(id).await?;
    }
    Ok(web::Json(MessageResponse {
        message: format!("Usuario con ID {raw} eliminado exitosamente."),
    }))
}
