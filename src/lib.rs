//! Shipping rate simulation service.
//!
//! Given a shipment's weight, dimensions, and declared value, prices it
//! under every applicable pre-configured rate for a tenant and returns the
//! candidates ordered cheapest-first. The pricing pipeline itself is pure
//! ([`engine`]); rate configurations come from a [`repository`] that applies
//! tenant isolation, the active flag, and the validity window server-side.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;
