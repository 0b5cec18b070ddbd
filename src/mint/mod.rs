//! Mint form domain: draft state, validation, and the typed mint record.

pub mod form;
pub mod validate;
