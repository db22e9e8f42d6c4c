// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, models::auth::{UserModel, UserRole}};

// O trait que define qual papel uma rota exige
pub trait RoleDef: Send + Sync + 'static {
    fn required() -> UserRole;
}

pub struct AdminOnly;
impl RoleDef for AdminOnly {
    fn required() -> UserRole {
        UserRole::Admin
    }
}

// A decisão em si, separada do extractor: sem principal é 401,
// papel insuficiente é 403. ADMIN satisfaz qualquer exigência.
pub fn check_role(user: Option<&UserModel>, required: UserRole) -> Result<(), AppError> {
    let Some(user) = user else {
        return Err(AppError::Unauthenticated);
    };

    if user.role == required || user.role == UserRole::Admin {
        Ok(())
    } else {
        Err(AppError::AccessDenied(required))
    }
}

// O extractor (guardião): declarar `RequireRole<AdminOnly>` no handler
// basta para fechar a rota
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<UserModel>();
        check_role(user, T::required())?;
        Ok(RequireRole(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(role: UserRole) -> UserModel {
        UserModel {
            id: 1,
            login: "Draven22".into(),
            password_hash: "hash".into(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn sem_principal_e_401() {
        let result = check_role(None, UserRole::Admin);
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[test]
    fn papel_insuficiente_e_403() {
        let user = user(UserRole::User);
        let result = check_role(Some(&user), UserRole::Admin);
        assert!(matches!(result, Err(AppError::AccessDenied(UserRole::Admin))));
    }

    #[test]
    fn papel_exato_e_permitido() {
        let user = user(UserRole::User);
        assert!(check_role(Some(&user), UserRole::User).is_ok());
    }

    #[test]
    fn admin_satisfaz_qualquer_exigencia() {
        let admin = user(UserRole::Admin);
        assert!(check_role(Some(&admin), UserRole::User).is_ok());
        assert!(check_role(Some(&admin), UserRole::Admin).is_ok());
    }
}
