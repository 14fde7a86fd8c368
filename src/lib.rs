//! Dealprep - Negotiation Preparation Workbook
//!
//! This crate implements a single-session workbook for structuring a
//! negotiation before it happens: BATNA alternatives, reservation price,
//! issue priorities, counterpart assumptions, and expected-value scenarios,
//! plus the derived numbers (weighted BATNA, deal EV, opening anchor, ZOPA)
//! and a printable battle card.

pub mod application;
pub mod config;
pub mod domain;
pub mod render;
