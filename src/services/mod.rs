pub mod clock;
pub mod holdings_source;
pub mod portfolio_tracker_service;
pub mod quote_fetcher;
pub mod scheduler;

pub use clock::{Clock, TokioClock};
pub use portfolio_tracker_service::PortfolioTrackerService;
pub use quote_fetcher::{PriceSource, QuoteFetcher};
pub use scheduler::RefreshScheduler;
