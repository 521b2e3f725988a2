/// Match scoring between a tender's criteria and a candidate supplier
/// Additive heuristic: sector 40, location 30 (or proximity 20), specialty 20, certifications 10

use rand::Rng;

use crate::models::{CandidateSupplier, MatchReason, TenderCriteria};

pub const SECTOR_POINTS: u8 = 40;
pub const LOCATION_POINTS: u8 = 30;
pub const PROXIMITY_POINTS: u8 = 20;
pub const SPECIALTY_POINTS: u8 = 20;
pub const CERTIFICATION_POINTS: u8 = 10;

pub const MAX_SCORE: u8 = 100;
/// Lowest visible score after jitter
pub const SCORE_FLOOR: u8 = 15;
pub const JITTER: i32 = 7;

/// Score before jitter, with the reasons that contributed to it
#[derive(Clone, Debug, PartialEq)]
pub struct MatchScore {
    pub score: u8,
    pub reasons: Vec<MatchReason>,
}

/// Compute the unjittered match score of a candidate.
/// Uses the candidate's assigned sector, department and specialties.
pub fn compute_match_score(supplier: &CandidateSupplier, criteria: &TenderCriteria) -> MatchScore {
    let mut score: u8 = 0;
    let mut reasons = Vec::new();

    if supplier.sector == criteria.sector {
        score += SECTOR_POINTS;
        reasons.push(MatchReason::SectorMatch);
    }

    if supplier.department.contains(criteria.department_token()) {
        score += LOCATION_POINTS;
        reasons.push(MatchReason::LocationMatch);
    } else if supplier.department.contains("Île-de-France") && criteria.location.contains("75") {
        score += PROXIMITY_POINTS;
        reasons.push(MatchReason::NearbyLocation);
    }

    if has_relevant_specialty(&supplier.specialties, &criteria.procurement_type) {
        score += SPECIALTY_POINTS;
        reasons.push(MatchReason::RelevantSpecialty);
    }

    if !supplier.certifications.is_empty() {
        score += CERTIFICATION_POINTS;
        reasons.push(MatchReason::Certified);
    }

    MatchScore {
        score: score.min(MAX_SCORE),
        reasons,
    }
}

/// Goods/services keywords of the procurement type against the specialties
fn has_relevant_specialty(specialties: &[String], procurement_type: &str) -> bool {
    let procurement_type = procurement_type.to_lowercase();
    let wants_services = procurement_type.contains("services");
    let wants_products = procurement_type.contains("produits");

    specialties.iter().any(|specialty| {
        let specialty = specialty.to_lowercase();
        (wants_services && specialty.contains("service")) || (wants_products && specialty.contains("produit"))
    })
}

/// Perturb a base score by a uniform integer in [-7, +7], clamped to [15, 100]
pub fn apply_jitter<R: Rng + ?Sized>(score: u8, rng: &mut R) -> u8 {
    let jitter = rng.gen_range(-JITTER..=JITTER);
    (score as i32 + jitter).clamp(SCORE_FLOOR as i32, MAX_SCORE as i32) as u8
}
