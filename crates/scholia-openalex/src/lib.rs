//! Scholia OpenAlex Adapter
//!
//! [`MetadataSource`](scholia_domain::MetadataSource) implementation over the
//! [OpenAlex](https://openalex.org) REST API: DOI and title lookup, plus
//! batched author and abstract fetches for referenced works.
//!
//! # Examples
//!
//! ```no_run
//! use scholia_openalex::{OpenAlexClient, OpenAlexConfig};
//! use scholia_domain::MetadataSource;
//!
//! let client = OpenAlexClient::new(&OpenAlexConfig::default()).unwrap();
//! if let Some(paper) = client.resolve_doi("10.1038/nature14539").unwrap() {
//!     println!("{} ({} citations)", paper.title, paper.cited_by_count);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod doi;
pub mod error;
pub mod work;

pub use client::{OfflineSource, OpenAlexClient, OpenAlexConfig};
pub use doi::normalize_doi;
pub use error::OpenAlexError;
pub use work::reconstruct_abstract;
