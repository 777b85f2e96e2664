//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server. This server has a single domain: the tools callers may invoke.

pub mod tools;
