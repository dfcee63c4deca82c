//! Kernel module - server infrastructure and dependencies.

pub mod job_feed;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use job_feed::RemotiveJobFeed;
pub use traits::*;
