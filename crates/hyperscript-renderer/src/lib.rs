//! Internal library for the `hyperscript` crate for rendering HTML.
//!
//! This library holds the frozen element tree and turns it into markup.
//!
//! # Example
//!
//! ```rust
//! use hyperscript_renderer_internal::ast::{Node, NodeParts};
//! use hyperscript_renderer_internal::value::Value;
//!
//! let em = Node::new(
//!     NodeParts {
//!         tag: "em".into(),
//!         children: vec![Value::from("a & b").into()],
//!         ..Default::default()
//!     },
//!     true,
//!     false,
//! )
//! .unwrap();
//! let p = Node::new(
//!     NodeParts {
//!         tag: "p".into(),
//!         children: vec![em.into()],
//!         ..Default::default()
//!     },
//!     true,
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(p.to_string(), "<p><em>a &amp; b</em></p>");
//! ```
pub mod ast;
pub mod error;
pub mod html_utils;
pub mod value;
