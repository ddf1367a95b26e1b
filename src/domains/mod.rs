//! Domains module containing business logic organized by bounded contexts.
//!
//! The service manages a single bounded context today - the resource
//! collection - but the layout keeps room for siblings.

pub mod resources;
