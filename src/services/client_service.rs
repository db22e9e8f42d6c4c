// src/services/client_service.rs

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{AddressRepository, ClientRepository},
    models::{
        address::{Address, AddressResponse},
        client::{Client, ClientPayload, ClientResponse},
    },
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
    address_repo: AddressRepository,
    pool: PgPool,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository, address_repo: AddressRepository, pool: PgPool) -> Self {
        Self {
            client_repo,
            address_repo,
            pool,
        }
    }

    // =============================
    // CREATE
    // =============================
    // Endereço embutido é criado junto, na mesma transação: o cliente é o
    // dono exclusivo do endereço, nunca compartilhado.
    pub async fn save(&self, payload: ClientPayload) -> Result<ClientResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let address = match &payload.address {
            Some(data) => Some(self.address_repo.insert(&mut *tx, data).await?),
            None => None,
        };

        let client = self
            .client_repo
            .insert(
                &mut *tx,
                &payload.name,
                &payload.email,
                &payload.tax_id,
                payload.phone.as_deref(),
                payload.client_type,
                address.as_ref().map(|a| a.id),
            )
            .await?;

        tx.commit().await?;

        Ok(ClientResponse {
            id: client.id,
            name: client.name,
            email: client.email,
            tax_id: client.tax_id,
            phone: client.phone,
            client_type: client.client_type,
            address: address.map(Into::into),
            tasks_ids: Vec::new(),
        })
    }

    // =============================
    // READ
    // =============================
    pub async fn find_by_id_or_fail(&self, id: i64) -> Result<Client, AppError> {
        self.client_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Client", id })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<ClientResponse, AppError> {
        let client = self.find_by_id_or_fail(id).await?;
        self.to_response(client).await
    }

    pub async fn find_all(&self) -> Result<Vec<ClientResponse>, AppError> {
        let clients = self.client_repo.find_all().await?;

        // Endereços e IDs de task carregados de uma vez, sem uma consulta
        // extra por cliente da listagem
        let mut addresses: HashMap<i64, Address> = self
            .address_repo
            .find_all()
            .await?
            .into_iter()
            .map(|address| (address.id, address))
            .collect();

        let mut tasks_by_client: HashMap<i64, Vec<i64>> = HashMap::new();
        for (client_id, task_id) in self.client_repo.task_ids_for_all().await? {
            tasks_by_client.entry(client_id).or_default().push(task_id);
        }

        let mut responses = Vec::with_capacity(clients.len());
        for client in clients {
            let address = client
                .address_id
                .and_then(|address_id| addresses.remove(&address_id))
                .map(Into::into);
            let tasks_ids = tasks_by_client.remove(&client.id).unwrap_or_default();

            responses.push(ClientResponse {
                id: client.id,
                name: client.name,
                email: client.email,
                tax_id: client.tax_id,
                phone: client.phone,
                client_type: client.client_type,
                address,
                tasks_ids,
            });
        }
        Ok(responses)
    }

    // =============================
    // UPDATE
    // =============================
    // Sobrescreve os campos escalares; dados de endereço sobrescrevem o
    // endereço existente (ou criam um novo se o cliente ainda não tinha).
    pub async fn update(&self, payload: ClientPayload, id: i64) -> Result<ClientResponse, AppError> {
        let current = self.find_by_id_or_fail(id).await?;

        let mut tx = self.pool.begin().await?;

        let address_id = match &payload.address {
            Some(data) => match current.address_id {
                Some(address_id) => {
                    self.address_repo.update(&mut *tx, address_id, data).await?;
                    Some(address_id)
                }
                None => Some(self.address_repo.insert(&mut *tx, data).await?.id),
            },
            // Sem dados de endereço no payload, o endereço atual é mantido
            None => current.address_id,
        };

        let client = self
            .client_repo
            .update(
                &mut *tx,
                id,
                &payload.name,
                &payload.email,
                &payload.tax_id,
                payload.phone.as_deref(),
                payload.client_type,
                address_id,
            )
            .await?;

        tx.commit().await?;

        self.to_response(client).await
    }

    // =============================
    // DELETE
    // =============================
    // O endereço não é removido: seu ciclo de vida é independente e as
    // tasks do cliente continuam referenciando-o apenas por FK.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.find_by_id_or_fail(id).await?;
        self.client_repo.delete(id).await
    }

    // Achata o endereço e expõe as tasks apenas como IDs (calculados por
    // consulta), evitando ciclos de serialização.
    async fn to_response(&self, client: Client) -> Result<ClientResponse, AppError> {
        let address: Option<AddressResponse> = match client.address_id {
            Some(address_id) => self
                .address_repo
                .find_by_id(address_id)
                .await?
                .map(Into::into),
            None => None,
        };

        let tasks_ids = self.client_repo.task_ids(client.id).await?;

        Ok(ClientResponse {
            id: client.id,
            name: client.name,
            email: client.email,
            tax_id: client.tax_id,
            phone: client.phone,
            client_type: client.client_type,
            address,
            tasks_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{address::AddressPayload, client::ClientType};

    fn service(pool: &PgPool) -> ClientService {
        ClientService::new(
            ClientRepository::new(pool.clone()),
            AddressRepository::new(pool.clone()),
            pool.clone(),
        )
    }

    fn payload(address: Option<AddressPayload>) -> ClientPayload {
        ClientPayload {
            name: "Google".into(),
            email: "contact@google.com".into(),
            tax_id: "12.345.678/0001-00".into(),
            phone: None,
            client_type: ClientType::Business,
            address,
        }
    }

    #[sqlx::test]
    async fn cliente_com_endereco_embutido_grava_os_dois(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);

        let created = service
            .save(payload(Some(AddressPayload {
                street: "Main Street".into(),
                number: "123".into(),
                complement: None,
                district: None,
                city: "Los Angeles".into(),
                state: "SP".into(),
                postal_code: "01000-000".into(),
            })))
            .await?;
        let address = created.address.expect("a resposta deveria trazer o endereço");

        let found = service.find_by_id(created.id).await?;
        assert_eq!(found.address.map(|a| a.id), Some(address.id));
        Ok(())
    }

    #[sqlx::test]
    async fn segundo_delete_do_mesmo_cliente_falha_not_found(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);
        let created = service.save(payload(None)).await?;

        service.delete(created.id).await?;

        let result = service.delete(created.id).await;
        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Client", .. })
        ));
        Ok(())
    }
}
