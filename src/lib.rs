//! Blue Horizon API - Water-quality trends service with hybrid mock fill
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod routes;
pub mod series;
