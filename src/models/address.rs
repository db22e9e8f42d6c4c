// src/models/address.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// Representa um endereço vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de endereço (também embutido no cliente)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[validate(length(min = 3, message = "Street must have at least 3 characters"))]
    #[schema(example = "Main Street")]
    pub street: String,

    #[validate(length(min = 1, message = "Number cannot be null or empty"))]
    #[schema(example = "123")]
    pub number: String,

    #[schema(example = "Apt 101")]
    pub complement: Option<String>,

    #[schema(example = "Downtown")]
    pub district: Option<String>,

    #[validate(length(min = 3, message = "City must have at least 3 characters"))]
    #[schema(example = "Los Angeles")]
    pub city: String,

    #[validate(length(min = 2, message = "State must have at least 2 characters"))]
    #[schema(example = "SP")]
    pub state: String,

    #[validate(custom(function = "validate_postal_code"))]
    #[schema(example = "01000-000")]
    pub postal_code: String,
}

// Resposta de endereço (sem carregar o cliente dono, evitando ciclos)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            number: address.number,
            complement: address.complement,
            district: address.district,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
        }
    }
}

// CEP no formato 00000-000
pub fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 9
        && bytes[5] == b'-'
        && bytes[..5].iter().all(u8::is_ascii_digit)
        && bytes[6..].iter().all(u8::is_ascii_digit);

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("postal_code");
        error.message = Some("Postal code must be in format 00000-000".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AddressPayload {
        AddressPayload {
            street: "Main Street".into(),
            number: "123".into(),
            complement: None,
            district: Some("Downtown".into()),
            city: "Los Angeles".into(),
            state: "SP".into(),
            postal_code: "01000-000".into(),
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn cep_fora_do_formato_e_rejeitado() {
        for invalid in ["01000000", "0100-0000", "abcde-fgh", "01000-00"] {
            let mut p = payload();
            p.postal_code = invalid.into();
            let errors = p.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("postal_code"),
                "esperava erro para {invalid}"
            );
        }
    }
}
