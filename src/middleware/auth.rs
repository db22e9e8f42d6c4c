// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::auth::UserModel};

// Roda uma vez por requisição, antes do dispatch das rotas.
// Sem header Authorization (ou com outro esquema) a requisição segue
// não autenticada; quem exige um principal é o extractor lá na rota.
// Um token presente mas inválido interrompe aqui com 401.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(token) = extract_bearer(request.headers()) {
        let login = app_state.token_service.token_validation(token)?;

        // Subject sem usuário correspondente é 401, não 500
        let user = app_state
            .user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| {
                AppError::TokenValidation("user not found for token subject".into())
            })?;

        // Insere o principal nos "extensions" da requisição (escopo da
        // requisição, nada compartilhado entre requisições)
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}

pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

// Extrator para obter o usuário autenticado diretamente nos handlers
pub struct AuthenticatedUser(pub UserModel);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserModel>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extrai_token_do_esquema_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn sem_header_nao_ha_token() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn outro_esquema_nao_e_token() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_bearer(&headers), None);
    }
}
