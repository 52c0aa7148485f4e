#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod http_fetcher;

pub use config::QuizConfig;
pub use controller::{LoadStatus, SessionController};
pub use error::FetchError;
pub use fetcher::{DataFetcher, StaticFetcher};
pub use http_fetcher::HttpFetcher;
