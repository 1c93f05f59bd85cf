//! # ratiolens
//!
//! Multi-year financial ratio analytics for company comparison.
//!
//! This crate provides a unified interface to the ratiolens ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `utils`: Series alignment and normalization wrappers
//! - `math`: Numeric window operations
//! - `model`: DuPont identity checking and attribution
//! - `score`: Band-table scoring and comparative ranking
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use ratiolens::model;
//! use ratiolens::score;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // ratiolens = { version = "0.1", default-features = false, features = ["model"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use ratiolens_primitives as primitives;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use ratiolens_utils as utils;
#[cfg(feature = "math")]
#[doc(inline)]
pub use ratiolens_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use ratiolens_model as model;
#[cfg(feature = "score")]
#[doc(inline)]
pub use ratiolens_score as score;
