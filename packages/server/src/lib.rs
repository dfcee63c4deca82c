// Remote Jobs Mirror - API Core
//
// Mirrors postings from the Remotive remote-jobs API into Postgres and
// serves them back over a small read-only HTTP API.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
