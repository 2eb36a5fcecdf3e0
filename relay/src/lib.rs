//! Lambda handlers that proxy record listing and creation to Airtable,
//! keeping the API token on the server side.
//!
//! Each function binary picks a [`Profile`], loads a [`Config`] for it at
//! cold start and serves every request through one [`Handler`].

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod upstream;

pub use config::{Config, Credentials, Missing, Profile};
pub use error::{Error, Result};
pub use handler::Handler;
pub use upstream::{AirtableClient, Records};
