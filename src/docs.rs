// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::register,

        // --- Addresses ---
        handlers::address::create_address,
        handlers::address::get_all_addresses,
        handlers::address::get_address_by_id,
        handlers::address::update_address,
        handlers::address::delete_address,

        // --- Clients ---
        handlers::client::create_client,
        handlers::client::get_all_clients,
        handlers::client::get_client_by_id,
        handlers::client::update_client,
        handlers::client::delete_client,

        // --- Technicians ---
        handlers::technician::create_technician,
        handlers::technician::get_all_technicians,
        handlers::technician::get_technician_by_id,
        handlers::technician::update_technician,
        handlers::technician::delete_technician,

        // --- Tasks ---
        handlers::task::create_task,
        handlers::task::get_all_tasks,
        handlers::task::get_task_by_id,
        handlers::task::update_task,
        handlers::task::delete_task,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::LoginPayload,
            models::auth::RegisterPayload,
            models::auth::LoginResponse,

            // --- Addresses ---
            models::address::AddressPayload,
            models::address::AddressResponse,

            // --- Clients ---
            models::client::ClientType,
            models::client::ClientPayload,
            models::client::ClientResponse,

            // --- Technicians ---
            models::technician::TechnicianPayload,
            models::technician::TechnicianResponse,

            // --- Tasks ---
            models::task::TaskStatus,
            models::task::TaskPriority,
            models::task::TaskPayload,
            models::task::TaskResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e registro de usuários"),
        (name = "Addresses", description = "CRUD de endereços"),
        (name = "Clients", description = "CRUD de clientes"),
        (name = "Technicians", description = "CRUD de técnicos"),
        (name = "Tasks", description = "CRUD de tasks (chamados de suporte)")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
