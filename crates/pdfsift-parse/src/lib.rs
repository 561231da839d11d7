//! pdfsift-parse: PDF parsing backends.
//!
//! This crate turns PDF bytes into per-page plain text and document
//! metadata behind the [`PdfBackend`] trait. [`LopdfBackend`] is the
//! default implementation.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use pdfsift_core;
