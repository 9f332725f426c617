//! HTTP client for the nginx upstream check module's status endpoint.
//!
//! This crate provides a typed client for the JSON status page the upstream
//! check module serves, decoding it into [`CheckReport`].
//!
//! # Example
//!
//! ```no_run
//! use upcheck_client::{Result, StatusClient};
//!
//! # async fn example() -> Result<()> {
//! let client = StatusClient::new("http://localhost:80/nginx/check?format=json")?;
//!
//! let report = client.fetch().await?;
//! for server in report.servers() {
//!     println!("{} is {}", server.name, server.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, StatusClient};
pub use error::{Error, Result};
pub use types::{CheckReport, CheckSummary, ServerStatus};
