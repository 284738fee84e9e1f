//! # Data Loader Crate
//!
//! This crate loads the developer directory and prepares it for searching.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (DeveloperRecord, ProgrammingLanguage, DevStore)
//! - **parser**: Parse the `/devs` JSON array and compute search fields
//! - **store**: Build a DevStore from the HTTP endpoint or a local file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DevStore, DEFAULT_DEVS_URL};
//!
//! let store = DevStore::fetch(DEFAULT_DEVS_URL).await?;
//!
//! for dev in store.records() {
//!     println!("{} knows {:?}", dev.name, dev.known_languages());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::normalize_search_text;
pub use store::DEFAULT_DEVS_URL;
pub use types::{
    // Type aliases
    DevId,
    // Core types
    DeveloperRecord,
    DevStore,
    ProgrammingLanguage,
    RawDeveloper,
};
