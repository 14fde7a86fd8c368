//! Domain layer containing the workbook model and pure derivations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums)
//! - `workbook` - The negotiation state aggregate and its entities
//! - `analysis` - Pure derivation services (ZOPA, deal-vs-BATNA)
//! - `advice` - Session-scoped community advice board

pub mod advice;
pub mod analysis;
pub mod foundation;
pub mod workbook;
