//! Core components of the `portal-results` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`PortalClient`], its builder, and the per-lookup [`Session`].
//! - The primary [`PortalError`] type and the public [`FailureKind`] taxonomy.
//! - Shared models like [`Identifier`] and [`LandingPage`].
//! - Internal networking helpers.

/// The client (`PortalClient`), builder, and session/login logic.
pub mod client;
/// The error type (`PortalError`) and failure taxonomy (`FailureKind`).
pub mod error;
/// Shared data models used by the session and the extractor.
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{PortalClient, PortalClientBuilder, Session};
pub use error::{FailureKind, PortalError};
pub use models::{IDENTIFIER_LEN, Identifier, LandingPage};
