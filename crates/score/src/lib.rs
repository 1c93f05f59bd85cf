#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratiolens/ratiolens-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod bands;
pub use bands::{BandTable, ScoreBand};

mod weights;
pub use weights::{CategoryWeights, WEIGHT_EPSILON};

mod rank;
pub use rank::{Contender, Direction, Ranking, RuleTable};

mod error;
pub use error::ScoreError;
