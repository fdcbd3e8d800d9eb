//! urus-http - HTTP-backed collection gateway.

mod client;
mod gateway;
mod wire;

pub use client::HttpClient;
pub use gateway::HttpGateway;
