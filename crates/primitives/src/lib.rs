#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratiolens/ratiolens-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod period;
pub use period::FiscalPeriod;

mod series;
pub use series::{RatioName, RatioSeries, Unit};

mod aligned;
pub use aligned::{AlignedGroup, AlignedSeries};

mod profile;
pub use profile::{Company, CompanyProfile, RatioCategory};

mod store;
pub use store::{SeriesStore, StoreError};
