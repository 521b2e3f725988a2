//! Supplier suggestions for Everlake calls for tenders
//!
//! Generates synthetic candidate suppliers for a tender's criteria, scores
//! them against the sector, location, procurement type and certifications,
//! and ranks them. Also covers what the suggestions page does with the
//! ranked list: facet filtering, recipient selection and the hand-off to
//! outbound quote requests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod models;
pub mod reporting;
pub mod sampling;
pub mod scoring;
pub mod selection;

pub use error::MatcherError;
pub use generator::{generate_suppliers, generate_suppliers_with};
pub use models::{CandidateSupplier, CompanySize, MatchReason, MatchTier, TenderCriteria};
pub use scoring::compute_match_score;
