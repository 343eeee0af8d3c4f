//! DNS provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod vercel;

pub use vercel::VercelProvider;
