//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every users endpoint, the health probes and the
//! schemas they reference. The document backs Swagger UI in debug builds and
//! is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User, UserId};
use crate::inbound::http::users::{MessageResponse, UserEnvelope, UserPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios API",
        description = "CRUD interface over a flat-file user registry, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserId,
        UserPayload,
        UserEnvelope,
        MessageResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "usuarios", description = "User registry operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
