//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the contact book operations.
//! - Keep CLI layers decoupled from storage details.

pub mod contact_service;
