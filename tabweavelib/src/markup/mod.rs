//! Markup construction: nodes and the templating collaborator.
//!
//! This module holds the last stage of the pipeline's vocabulary:
//!
//! - **Nodes** ([`node`]): the abstract markup tree (`Node`, `Content`) and
//!   HTML text serialization for the surrounding application
//! - **Templates** ([`template`]): the `Template` collaborator contract the
//!   presenter renders through, and the standard `HtmlTemplate`
//!
//! ## Example
//!
//! ```rust,ignore
//! use tabweavelib::markup::template::{HtmlTemplate, Template};
//!
//! let template = HtmlTemplate::new().with_translation("totals", "Total");
//! let node = template.build_tag("td", attrs, content);
//! ```

pub mod node;
pub mod template;
