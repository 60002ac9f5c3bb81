//! Upstream Client Library
//!
//! Provides the HTTP client the facade uses to reach the upstream vehicle
//! telemetry/command service.
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use vfacade_client::UpstreamClient;
//! use vfacade_core::{ResponseType, UpstreamRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UpstreamClient::new()?;
//!     let endpoint = Url::parse("http://gmapi.azurewebsites.net/getVehicleInfoService/")?;
//!
//!     let reply = client
//!         .post(
//!             &endpoint,
//!             &UpstreamRequest {
//!                 id: "1234".to_string(),
//!                 response_type: ResponseType::Json,
//!                 command: None,
//!             },
//!         )
//!         .await?;
//!     println!("success: {}", reply.is_success());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides a stub upstream server:
//!
//! ```rust,ignore
//! use vfacade_client::testing::StubUpstream;
//!
//! let stub = StubUpstream::gm().await?;
//! let endpoints = stub.endpoints()?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::{UpstreamClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
