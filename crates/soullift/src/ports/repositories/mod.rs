//! Repository Ports

mod profile_repository;

pub use profile_repository::ProfileRepository;
