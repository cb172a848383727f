pub mod analysis_service;
pub mod recommendation_service;
pub mod store_service;
pub mod valuation_service;
