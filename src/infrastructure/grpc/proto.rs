//! Protobuf messages and client for `shortener.v1.Shortener`, generated from
//! `proto/shortener/v1/shortener.proto` at build time.

tonic::include_proto!("shortener.v1");

pub use shortener_client::ShortenerClient;
