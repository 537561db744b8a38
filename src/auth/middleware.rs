use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::auth::token::TokenConfig;
use crate::error::AppError;

/// Bearer-token gate for protected scopes.
///
/// Wrapped around the `/tasks` scope only, so no path matching is needed here:
/// every request that reaches this middleware requires a valid token. On
/// success the authenticated user id is inserted into request extensions for
/// handlers to extract; otherwise the request is short-circuited with 401 and
/// the handler never runs.
pub struct AuthMiddleware {
    tokens: Rc<TokenConfig>,
}

impl AuthMiddleware {
    pub fn new(tokens: TokenConfig) -> Self {
        Self {
            tokens: Rc::new(tokens),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            tokens: Rc::clone(&self.tokens),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    tokens: Rc<TokenConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match auth_header {
            Some(token) => match self.tokens.verify(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims.sub);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    fn test_tokens() -> TokenConfig {
        TokenConfig::new("middleware-test-secret", chrono::Duration::hours(1))
    }

    async fn protected() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn test_valid_token_passes_through() {
        let tokens = test_tokens();
        let app = test::init_service(
            App::new().service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let token = tokens.issue(7).unwrap();
        let req = test::TestRequest::get()
            .uri("/tasks")
            .append_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(test_tokens()))
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/tasks").to_request();
        let resp = test::try_call_service(&app, req).await;
        let err = resp.expect_err("request without a token should be rejected");
        assert_eq!(
            err.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_rt::test]
    async fn test_garbled_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(test_tokens()))
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/tasks")
            .append_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        let err = resp.expect_err("request with a garbled token should be rejected");
        assert_eq!(
            err.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
