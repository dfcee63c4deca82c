// HTTP routes
pub mod jobs;
pub mod liveness;

pub use jobs::*;
pub use liveness::*;
