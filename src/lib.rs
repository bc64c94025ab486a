//! CMC Control - multi-store cost-of-goods tracking backend.
//!
//! Every business record belongs to a store; every store is reachable
//! only by its owner, by users holding an explicit access grant, or by
//! a master account. One access gate enforces that rule in front of
//! every store-scoped operation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
