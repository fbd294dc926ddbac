//! HTTP API module for the card ledger.
//!
//! This module provides the REST endpoints for grading quotes, card
//! registration, the portfolio dashboard and holiday lookups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PortfolioRequest, QuoteRequest};
pub use response::{ApiError, HolidaysResponse, PlansResponse, QuoteResponse};
pub use state::AppState;
