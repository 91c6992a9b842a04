//! Backend RPC client over gRPC.

mod backend_client;
pub mod proto;

pub use backend_client::BackendClient;
