//! Entree - Venue admission backend
//!
//! Admits visitors using opaque passes, tracks current occupancy, and
//! reconciles confirmed payments into new passes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
