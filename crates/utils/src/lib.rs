#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratiolens/ratiolens-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod align;
pub use align::align_leading_gaps;

mod normalize;
pub use normalize::{normalize_group, normalize_series};

mod error;
pub use error::AlignError;
