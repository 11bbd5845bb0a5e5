//! Domain layer: BOM extraction and package URL resolution.
//!
//! Nothing in here performs I/O directly; documents are loaded through the
//! [`BomSource`](crate::ports::outbound::BomSource) port.

pub mod domain;
pub mod policies;
pub mod services;
