//! Core components of the `coreinsights` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`InsightsClient`] and its builder.
//! - The primary [`InsightsError`] type.
//! - The [`Lookup`] result every provider call resolves to.
//! - Internal networking and wire helpers.

/// The main client (`InsightsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`InsightsError`) for the crate.
pub mod error;
/// Tagged outcome of a single provider call.
pub mod lookup;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::InsightsClient`
pub use client::{InsightsClient, InsightsClientBuilder};
pub use error::InsightsError;
pub use lookup::Lookup;
