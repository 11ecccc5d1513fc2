//! Test support utilities for ninepatch-fix.
//!
//! Provides mocks and synthetic nine-patch builders for testing the border
//! fixer without touching real assets.
//!
//! # Example
//!
//! ```
//! use ninepatch_test_support::{MockImageStore, NinePatchBuilder};
//!
//! let image = NinePatchBuilder::new(8, 8).red_guides(200).build();
//! let store = MockImageStore::new();
//! store.insert("button.9.png", image);
//! ```

mod builders;
mod mocks;

pub use builders::NinePatchBuilder;
pub use mocks::{MockImageStore, MockNinePatchSource, MockProgressSink};
