//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the components expect from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No reqwest/tokio-process types in any signature
//! - Transport failures are distinct from application-level rejections:
//!   the transport returns every HTTP status as data
//! - Collaborators are injected, never looked up from ambient state

pub mod command_runner;
pub mod job_worker;
pub mod signer;
pub mod transport;

pub use command_runner::{CommandRunner, ProcessError};
pub use job_worker::{JobFuture, JobHandler, JobWorker};
pub use signer::RequestSigner;
pub use transport::{HttpResponse, HttpTransport, TransportError};
