//! Session state for the planning front-end.
//!
//! One cached read (`refresh`) and one invalidating write (`logout`), plus
//! the transport seam the cache talks through.

pub mod cache;
pub mod transport;

pub use cache::SessionCache;
pub use transport::{HttpSessionTransport, SessionLookup, SessionTransport, TransportError};
