//! Persistence layer. Block arrays and static content are opaque JSONB
//! columns read and written wholesale; there is no field-level patch path.

pub mod contact;
pub mod pages;
pub mod posts;
pub mod statics;
