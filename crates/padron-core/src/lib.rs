//! Shared plumbing for padron services: health endpoint, request-id
//! middleware, pagination, serialization helpers, and tracing setup.

pub mod health;
pub mod middleware;
pub mod pagination;
pub mod serde;
pub mod tracing;
