//! User-agent signature database backed by uap-core rules.

mod uap_database;

pub use uap_database::{SignatureLoadError, UapSignatureDatabase};
