/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod futures;
pub mod leveraged_tokens;
pub mod markets;
pub mod options;
pub mod orders;
pub mod request;
pub mod signature;
pub mod spot_margin;
pub mod subaccounts;
pub mod wallet;

pub use error::{FtxError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, FtxClient, DEFAULT_REST_ENDPOINT};
