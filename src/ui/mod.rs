//! ui
//!
//! User-facing diagnostics.
//!
//! # Design
//!
//! Stdout carries exactly one line, the double-encoded metadata. Errors go to
//! stderr through [`output`].

pub mod output;
