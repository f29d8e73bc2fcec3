//! # pumphub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered project dashboard** with **zero
//!   JavaScript** — pure HTML, forms, and redirects
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTML responses
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML; askama escapes
//!   all interpolated values, including backend-sourced strings.
//! - The destructive delete action is gated behind a confirmation page;
//!   the actual mutation is a `<form>` POST followed by a redirect back to
//!   the dashboard (PRG pattern).
//! - Success and error notices travel as query parameters on the redirect
//!   and render as a banner on the next page load.
//!
//! ## Dependency rule
//! Depends on `pumphub-app` (for port traits and services) and
//! `pumphub-domain` (for domain types used in rendering). Never leaks axum
//! types into the domain.

pub mod dashboard;
pub mod error;
pub mod flash;
pub mod router;
pub mod state;
