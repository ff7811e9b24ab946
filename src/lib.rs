//! # Entrez Client
//!
//! An async Rust client for the NCBI Entrez eUtils API. The crate covers
//! the request/normalization pipeline for the literature database and the
//! NLM journal catalog: paginated searches, rate-limited sequential
//! dispatch, batched record fetching, resolution of non-standard journal
//! identifiers, and XML-to-record extraction for the four response schemas
//! the API serves.
//!
//! ## Features
//!
//! - **Search with pagination**: one call materializes result sets larger
//!   than a single page
//! - **Batched fetching**: large id lists are split into service-sized
//!   chunks automatically
//! - **Rate limiting**: every request waits for a minimum inter-request
//!   interval, as the service's rate policy requires
//! - **Defensive parsing**: missing optional fields become unset values,
//!   unrecognizable records are skipped, batches return partial results
//!
//! ## Quick Start
//!
//! ```no_run
//! use entrez_client::EntrezClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EntrezClient::new();
//!
//!     // Search for matching record ids
//!     let options = client.options().with_retmax(100);
//!     let results = client.search("wishart matrices", &options).await?;
//!     println!("{} matches", results.count);
//!
//!     // Fetch the records themselves
//!     let papers = client.fetch_papers(&results.pmids).await?;
//!     for paper in &papers {
//!         println!("{}: {}", paper.pmid, paper.title);
//!         println!("  {}", paper.author_string());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Journal catalog
//!
//! ```no_run
//! use entrez_client::EntrezClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EntrezClient::new();
//!
//!     // Odd ids (with a non-numeric marker) are resolved automatically
//!     let ids = vec!["0401141".to_string(), "19620690R".to_string()];
//!     let journals = client.fetch_journals(&ids).await?;
//!     for journal in &journals {
//!         println!("{}: {}", journal.nlm_id, journal.title_long);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod options;
pub mod parser;
pub mod rate_limit;

mod fetcher;
mod template;
mod transport;

pub use client::EntrezClient;
pub use config::ClientConfig;
pub use error::{EntrezError, Result};
pub use models::{FullTextLink, Journal, Paper, PaperAuthor, PubDate, SearchResult};
pub use options::{Database, RequestOptions, Verb};
pub use rate_limit::RateLimiter;
