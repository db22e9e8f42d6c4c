// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::address::{AddressPayload, AddressResponse};

// Tipo de cliente, mapeia o CREATE TYPE client_type do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "client_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientType {
    Individual,
    Business,
}

// Representa um cliente vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub phone: Option<String>,
    #[sqlx(rename = "type")]
    pub client_type: ClientType,
    pub address_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de cliente
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 3, message = "Name must have at least 3 characters."))]
    #[schema(example = "Google")]
    pub name: String,

    #[validate(email(message = "Email format is not valid."))]
    #[schema(example = "example@gmail.com")]
    pub email: String,

    #[validate(length(min = 9, message = "TaxId must have at least 9 characters."))]
    #[schema(example = "12.345.678/0001-00")]
    pub tax_id: String,

    #[schema(example = "(00) 0000-0000")]
    pub phone: Option<String>,

    #[serde(rename = "type")]
    #[schema(example = "BUSINESS")]
    pub client_type: ClientType,

    // Endereço embutido: pertence exclusivamente a este cliente
    #[validate(nested)]
    pub address: Option<AddressPayload>,
}

// Resposta de cliente: endereço achatado e tasks expostas só por ID
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub address: Option<AddressResponse>,
    #[schema(example = json!([101, 102]))]
    pub tasks_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::address::AddressPayload;

    fn payload() -> ClientPayload {
        ClientPayload {
            name: "Google".into(),
            email: "contact@google.com".into(),
            tax_id: "12.345.678/0001-00".into(),
            phone: Some("(00) 0000-0000".into()),
            client_type: ClientType::Business,
            address: None,
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn email_invalido_e_rejeitado() {
        let mut p = payload();
        p.email = "not-an-email".into();
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn endereco_embutido_tambem_e_validado() {
        let mut p = payload();
        p.address = Some(AddressPayload {
            street: "ab".into(), // curto demais
            number: "1".into(),
            complement: None,
            district: None,
            city: "São Paulo".into(),
            state: "SP".into(),
            postal_code: "01000-000".into(),
        });
        assert!(p.validate().is_err());
    }

    #[test]
    fn client_type_usa_nomes_do_dominio() {
        assert_eq!(
            serde_json::to_string(&ClientType::Business).unwrap(),
            "\"BUSINESS\""
        );
    }
}
