//! Artifact bundling and checksums.
//!
//! This module provides the main [`ArtifactBundler`] that collects the
//! artifacts of a base build into an [`ArtifactSet`](crate::bundler::ArtifactSet).
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads coordinates from [`Settings`](crate::bundler::Settings)
//! 2. Finds the single application package in the build output directory
//! 3. Prefers the AndResGuard output when present
//! 4. Adds `mapping.txt` and `R.txt` when present, warning otherwise
//!
//! # Module Organization
//!
//! - [`checksum`] - MD5 / SHA-1 / SHA-256 calculation for artifacts
//! - [`locate`] - Discovery of the well-known files
//! - [`orchestrator`] - Main [`ArtifactBundler`] struct

pub mod checksum;
pub mod locate;
mod orchestrator;

pub use orchestrator::ArtifactBundler;
