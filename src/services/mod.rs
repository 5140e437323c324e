pub mod extractor;
pub mod google_scraper;
pub mod page_fetcher;
pub mod search_provider;
pub mod wiki_lookup;

pub use extractor::*;
pub use google_scraper::*;
pub use page_fetcher::*;
pub use search_provider::*;
pub use wiki_lookup::*;
