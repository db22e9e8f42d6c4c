pub mod address_repo;
pub mod client_repo;
pub mod task_repo;
pub mod technician_repo;
pub mod user_repo;

pub use address_repo::AddressRepository;
pub use client_repo::ClientRepository;
pub use task_repo::TaskRepository;
pub use technician_repo::TechnicianRepository;
pub use user_repo::UserRepository;
