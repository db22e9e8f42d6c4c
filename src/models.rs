pub mod address;
pub mod auth;
pub mod client;
pub mod task;
pub mod technician;
