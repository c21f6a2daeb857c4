//! Durable per-node status reporting: the wire type, atomic save/load, the
//! channel-publishing tracer, and the single-consumer writer loop.

pub mod error;
pub mod fixtures;
pub mod publish;
pub mod status;
pub mod writer;

pub use error::{Result, StatusError};
pub use publish::TracingStatus;
pub use status::{load_node_status, save_node_status, NodeStatus, BASE_DIRECTORY};
pub use writer::run_forever;
