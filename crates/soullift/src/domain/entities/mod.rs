//! Domain Entities

mod profile;

pub use profile::Profile;
