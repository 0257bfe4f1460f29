//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

use self::error::json_error_handler;
use self::users::{create_user, delete_user, get_user, list_users, update_user};

/// Register the `/api` scope and the JSON extractor configuration.
///
/// Callers supply [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use usuarios::inbound::http::{configure, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(create_user)
                .service(list_users)
                .service(get_user)
                .service(update_user)
                .service(delete_user),
        );
}
