//! # MDS Core
//!
//! Protocol translation between the gateway's flat operations and the
//! remote Master Data Services API.
//!
//! ```text
//! mds-core/src/
//! ├── mappers/    # pure request builders (members, changesets, search terms)
//! ├── upstream/   # MdsService trait + reqwest HTTP binding
//! ├── gateway/    # MdsGateway facade, one method per inbound operation
//! └── modules/    # config loading, logger
//! ```

#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)
)]

pub mod error;
pub mod gateway;
pub mod mappers;
pub mod modules;
pub mod upstream;

pub use error::{AppError, AppResult};
pub use gateway::{params, MdsGateway, HELLO_GREETING};
pub use upstream::{HttpMdsClient, MdsService};
