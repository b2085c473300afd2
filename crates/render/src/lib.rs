//! HTML rendering for the public site: block-array dispatch, rich-text
//! sanitization, page chrome, and the sitemap builder. Pure — every
//! function here is a function of its inputs; the one side-effecting
//! surface (contact form submission) lives behind the rendered form's
//! target endpoint, not here.

pub mod blocks;
pub mod icons;
pub mod layout;
pub mod sanitize;
pub mod sitemap;
pub mod video;

pub use blocks::{render_blocks, render_static_sections};
pub use layout::page_layout;
