// freightdesk-api: Async HTTP client for the FreightDesk back-office API

pub mod client;
pub mod error;
pub mod transport;

pub use client::{BackofficeClient, UserPayload};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
