/// Data structures for tender criteria and generated supplier candidates

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MatcherError;

/// Criteria of a call for tenders, as entered by the buyer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderCriteria {
    pub title: String,
    /// Sector slug, e.g. "informatique-numerique"
    pub sector: String,
    /// Free text; only "services" / "produits" matter for matching
    pub procurement_type: String,
    /// "<department-code> - <department-name>"
    pub location: String,
    pub estimated_budget: String,
    pub description: String,
    pub specification: String,
}

impl Default for TenderCriteria {
    fn default() -> Self {
        TenderCriteria {
            title: "Appel d'offres par défaut".to_string(),
            sector: "informatique-numerique".to_string(),
            procurement_type: "services".to_string(),
            location: "75 - Paris".to_string(),
            estimated_budget: "50 000 €".to_string(),
            description: "Recherche de fournisseurs spécialisés".to_string(),
            specification: "Critères techniques standards".to_string(),
        }
    }
}

impl TenderCriteria {
    /// Department code used for location matching.
    /// Takes everything before the first " - ", or the whole location.
    pub fn department_token(&self) -> &str {
        match self.location.split_once(" - ") {
            Some((code, _)) => code,
            None => &self.location,
        }
    }
}

/// Company size bracket (TPE / PME / ETI)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Micro,
    SmallMedium,
    MidSize,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [CompanySize::Micro, CompanySize::SmallMedium, CompanySize::MidSize];

    pub fn annual_revenue(&self) -> &'static str {
        match self {
            CompanySize::Micro => "< 2M€",
            CompanySize::SmallMedium => "2-50M€",
            CompanySize::MidSize => "50-1500M€",
        }
    }

    pub fn employee_count(&self) -> &'static str {
        match self {
            CompanySize::Micro => "< 10",
            CompanySize::SmallMedium => "10-250",
            CompanySize::MidSize => "250-5000",
        }
    }

    /// Short French label shown on supplier cards
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Micro => "TPE",
            CompanySize::SmallMedium => "PME",
            CompanySize::MidSize => "ETI",
        }
    }
}

impl FromStr for CompanySize {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" | "tpe" => Ok(CompanySize::Micro),
            "small-medium" | "pme" => Ok(CompanySize::SmallMedium),
            "mid-size" | "eti" => Ok(CompanySize::MidSize),
            _ => Err(MatcherError::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a candidate scored the points it did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchReason {
    SectorMatch,
    LocationMatch,
    NearbyLocation,
    RelevantSpecialty,
    Certified,
}

impl MatchReason {
    pub fn label(&self) -> &'static str {
        match self {
            MatchReason::SectorMatch => "Secteur d'activité correspondant",
            MatchReason::LocationMatch => "Localisation géographique",
            MatchReason::NearbyLocation => "Proximité géographique",
            MatchReason::RelevantSpecialty => "Spécialité correspondante",
            MatchReason::Certified => "Certifications qualité",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Synthetic supplier suggested as a tender recipient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateSupplier {
    pub id: String,
    pub name: String,
    pub tax_id: String,
    pub street: String,
    pub city: String,
    pub department: String,
    pub postal_code: String,
    pub sector: String,
    pub specialties: Vec<String>,
    pub size: CompanySize,
    pub annual_revenue: String,
    pub employee_count: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub logo_url: Option<String>,
    pub certifications: Vec<String>,
    pub description: String,
    pub match_score: u8,
    pub match_reasons: Vec<MatchReason>,
    pub last_updated: DateTime<Utc>,
}

/// Colour band of a match score on the suggestions page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            MatchTier::High
        } else if score >= 50 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}
