//! Request types for the card ledger API.
//!
//! `POST /cards` takes a [`CardRegistration`](crate::models::CardRegistration)
//! directly; the other request bodies are defined here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CardRecord;

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The date the card arrives at PSA.
    pub arrival_date: NaiveDate,
    /// The grading plan name (e.g., "Regular").
    pub plan: String,
}

/// Request body for the `/portfolio/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRequest {
    /// The cards to summarise.
    #[serde(default)]
    pub cards: Vec<CardRecord>,
}
