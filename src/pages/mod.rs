//! Page modules for route-level screens.
//!
//! Each page is an opaque, prop-less renderable; the shell in `crate::app`
//! decides which one is shown.

pub mod about;
pub mod landing;
