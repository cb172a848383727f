pub mod alert;
pub mod analysis;
pub mod holding;
pub mod settings;
pub mod state;
pub mod trade;
pub mod valuation;
pub mod verdict;
pub mod watchlist;
