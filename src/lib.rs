//! Client library for the BUFU file server control interface.
//!
//! The BUFU file server sits on a CMS DAQ builder unit and hands out raw
//! data files to filter units over a small plain-text HTTP interface. This
//! crate provides the client side of that interface: three one-shot
//! command-line tools plus the shared [`FileServerClient`] they are built
//! on.
//!
//! # Endpoints
//!
//! - `GET /popfile?runnumber=N`: pop the next available file for a run
//! - `GET /restart?runnumber=N`: restart the run directory observer
//! - `GET /stats`: statistics for all known runs
//!
//! Responses are plain text in `key=value` lines; this crate does not
//! interpret them. Each tool prints the response status line followed by
//! the raw body and exits.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`client`]: HTTP client for the file server

pub mod client;
pub mod config;
pub mod error;

pub use client::{FileServerClient, ServerReply};
pub use config::Config;
pub use error::{ClientError, Result};
