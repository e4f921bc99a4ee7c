//! Output generation for the digest.
//!
//! One submodule today:
//!
//! - [`html`]: Renders the assembled [`crate::models::Digest`] into the
//!   email-ready HTML document

pub mod html;
