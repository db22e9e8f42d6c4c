// src/services/token.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{common::error::AppError, models::auth::Claims};

// Emite e valida os tokens JWT (HMAC-SHA256). O segredo, o issuer e o TTL
// são configuração imutável do processo, lidos uma vez no startup.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    issuer: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, issuer: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            issuer,
            expiration_minutes,
        }
    }

    // =============================
    // CREATE TOKEN
    // =============================
    pub fn create_token(&self, login: &str) -> Result<String, AppError> {
        let expires_at = Utc::now() + Duration::minutes(self.expiration_minutes);

        let claims = Claims {
            sub: login.to_owned(),
            iss: self.issuer.clone(),
            exp: expires_at.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(AppError::TokenGeneration)
    }

    // =============================
    // TOKEN VALIDATION
    // =============================
    // Verifica assinatura, issuer e expiração; devolve o subject (login).
    // Nunca é retentado: falha aqui sempre vira requisição não autenticada.
    pub fn token_validation(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| AppError::TokenValidation(e.to_string()))?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("segredo-de-teste".into(), "suport-api".into(), 60)
    }

    #[test]
    fn token_emitido_valida_e_devolve_o_login() {
        let service = service();
        let token = service.create_token("Draven22").unwrap();
        assert!(!token.is_empty());

        let subject = service.token_validation(&token).unwrap();
        assert_eq!(subject, "Draven22");
    }

    #[test]
    fn token_expirado_e_rejeitado() {
        // TTL negativo simula um token emitido além do prazo no passado
        let expired =
            TokenService::new("segredo-de-teste".into(), "suport-api".into(), -5);
        let token = expired.create_token("Draven22").unwrap();

        let result = service().token_validation(&token);
        assert!(matches!(result, Err(AppError::TokenValidation(_))));
    }

    #[test]
    fn issuer_diferente_e_rejeitado() {
        let other =
            TokenService::new("segredo-de-teste".into(), "outra-api".into(), 60);
        let token = other.create_token("Draven22").unwrap();

        let result = service().token_validation(&token);
        assert!(matches!(result, Err(AppError::TokenValidation(_))));
    }

    #[test]
    fn assinatura_com_outro_segredo_e_rejeitada() {
        let other = TokenService::new("outro-segredo".into(), "suport-api".into(), 60);
        let token = other.create_token("Draven22").unwrap();

        let result = service().token_validation(&token);
        assert!(matches!(result, Err(AppError::TokenValidation(_))));
    }
}
