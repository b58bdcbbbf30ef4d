//! Serializers for a populated [`Registry`](crate::Registry).
//!
//! - **VOWL JSON** ([`vowl`]): the graph document rendered by WebVOWL.

pub mod vowl;

pub use vowl::to_vowl_json;
