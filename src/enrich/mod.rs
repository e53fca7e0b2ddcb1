//! Optional content enrichment: fetch page text for candidate URLs before judging.
//!
//! Enrichment is best-effort. Every failure mode (transport error, HTTP error status, page
//! too short to carry signal) collapses to "no content" for that URL and never fails the run.

pub mod enricher;
pub mod error;
pub mod fetcher;
pub mod html;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use enricher::ContentEnricher;
pub use error::FetchError;
pub use fetcher::{BROWSER_USER_AGENT, ContentFetcher, HttpContentFetcher};
pub use html::{clean_page_text, strip_html};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentFetcher;
