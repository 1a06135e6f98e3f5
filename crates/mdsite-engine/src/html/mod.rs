//! # HTML Output
//!
//! - **`node`**: `HtmlNode`, the owned element tree and its serialization
//! - **`render`**: Block-to-element rules and the root `div`

pub mod node;
pub mod render;

pub use node::HtmlNode;
pub use render::{ROOT_TAG, render_block, render_document};
