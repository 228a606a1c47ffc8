//! Domain value objects.
//!
//! Everything in here is a plain value type owned by the call that
//! creates it. Nothing is persisted and nothing is mutated after
//! construction.

mod command;
mod job;
mod network;
mod purge;

pub use command::CommandResult;
pub use job::JobOutcome;
pub use network::{Network, UnknownNetwork};
pub use purge::{PurgeReceipt, PurgeRequest};
