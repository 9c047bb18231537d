//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, `tools`: the Beagle Security API
//! operations callable by MCP clients.

pub mod tools;
