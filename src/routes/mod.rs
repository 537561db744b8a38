pub mod auth;
pub mod health;
pub mod tasks;

use crate::auth::{AuthMiddleware, TokenConfig};
use actix_web::web;

/// Wires up the HTTP surface. The auth middleware wraps the `/tasks` scope
/// only; `/auth` and `/health` stay open.
pub fn config(tokens: TokenConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login),
        )
        .service(
            web::scope("/tasks")
                .wrap(AuthMiddleware::new(tokens))
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
    }
}
