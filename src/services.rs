pub mod address_service;
pub mod auth;
pub mod client_service;
pub mod task_service;
pub mod technician_service;
pub mod token;
