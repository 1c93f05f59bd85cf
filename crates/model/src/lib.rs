#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratiolens/ratiolens-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod identity;
pub use identity::{DUPONT_3, DUPONT_5, DuPontIdentity, ROE_SERIES};

mod attribution;
pub use attribution::{AttributionStep, RoeAttribution, decompose, sequential_attribution};

mod consistency;
pub use consistency::{ConsistencyWarning, DEFAULT_TOLERANCE, check_identity};

mod error;
pub use error::ModelError;
