//! # Block Parsing
//!
//! Two-phase block parsing over plain strings.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): The document is split into blocks on
//!    blank lines
//!
//! 2. **Classification** (`classify`): Each block is assigned a `BlockKind`
//!    by looking only at its own text
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned markers and tags
//! - **`segment`**: `segment()` splits raw text into block strings
//! - **`classify`**: `classify()` picks the kind of one block
//!
//! ## Key Invariants
//!
//! - No block is empty and no block contains a blank line
//! - Classification is total: paragraph is the fallback

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::{Block, BlockKind};
