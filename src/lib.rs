pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod reports;
pub mod storage;
pub mod types;
pub mod use_cases;
pub mod utils;

pub use api::{DrawRef, DrawSource, HttpDrawSource};
pub use error::LotteryError;
pub use fetcher::{DrawFetcher, FetchFilter, FetchOutcome};
pub use storage::ResultStore;
pub use types::{DrawRecord, LotteryType, PrizeTier, WinnerCity};
pub use use_cases::{FetchRequest, ResultsUseCase, SaveOptions, SaveSummary};
