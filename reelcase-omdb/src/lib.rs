//! OMDb metadata client.
//!
//! One blocking HTTP call per lookup, with a fixed short timeout and typed
//! error translation. The client returns metadata already normalized into
//! the collection's [`reelcase_catalog::NewMovie`] shape; the storage
//! layer never touches the network itself.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::OmdbClient;
pub use credentials::{
    CredentialSource, Credentials, api_key_source, config_path, save_to_file,
};
pub use error::OmdbError;
pub use types::OmdbPayload;
