/// Synthetic supplier generation for a tender's criteria
/// The first candidates are seeded with the tender's sector and location so
/// that every list contains some strong matches

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Uniform};
use tracing::{debug, info};

use crate::catalog::{
    certifications_for, sectors, specialties_for, CITIES, COMPANY_NAMES, DEFAULT_DEPARTMENT, DEPARTMENTS, LOGOS,
};
use crate::models::{CandidateSupplier, CompanySize, TenderCriteria};
use crate::scoring::{apply_jitter, compute_match_score};

/// Number of leading candidates forced onto the tender's sector and department
pub const SEEDED_CANDIDATES: usize = 6;
/// A uniform draw above this gets a logo (~15% of candidates)
pub const LOGO_THRESHOLD: f64 = 0.85;

const MAX_AGE_MS: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Generate `count` ranked candidates using the thread-local RNG and the current time
pub fn generate_suppliers(criteria: &TenderCriteria, count: usize) -> Vec<CandidateSupplier> {
    let mut rng = thread_rng();
    generate_suppliers_with(criteria, count, &mut rng, Utc::now())
}

/// Generate `count` candidates sorted by match score, highest first.
/// Ties keep generation order.
pub fn generate_suppliers_with<R: Rng + ?Sized>(
    criteria: &TenderCriteria,
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<CandidateSupplier> {
    let all_sectors: Vec<&str> = sectors().collect();
    let mut suppliers = Vec::with_capacity(count);

    for i in 0..count {
        let seeded = i < SEEDED_CANDIDATES;
        let sector = if seeded {
            criteria.sector.clone()
        } else {
            all_sectors[rng.gen_range(0..all_sectors.len())].to_string()
        };
        let department = if !seeded {
            DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())].to_string()
        } else if criteria.location.is_empty() {
            DEFAULT_DEPARTMENT.to_string()
        } else {
            criteria.location.clone()
        };

        let mut supplier = build_candidate(i, sector, department, rng, now);

        let base = compute_match_score(&supplier, criteria);
        supplier.match_score = apply_jitter(base.score, rng);
        supplier.match_reasons = base.reasons;

        debug!(
            id = %supplier.id,
            sector = %supplier.sector,
            department = %supplier.department,
            base_score = base.score,
            score = supplier.match_score,
            "generated candidate"
        );

        suppliers.push(supplier);
    }

    // Stable sort: equal scores keep generation order
    suppliers.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    info!(
        sector = %criteria.sector,
        location = %criteria.location,
        count,
        top_score = suppliers.first().map(|s| s.match_score),
        "generated supplier suggestions"
    );

    suppliers
}

/// Build an unscored candidate for slot `index`
fn build_candidate<R: Rng + ?Sized>(
    index: usize,
    sector: String,
    department: String,
    rng: &mut R,
    now: DateTime<Utc>,
) -> CandidateSupplier {
    let base_name = COMPANY_NAMES[index % COMPANY_NAMES.len()];
    let name = if index >= COMPANY_NAMES.len() {
        format!("{} {}", base_name, index)
    } else {
        base_name.to_string()
    };
    let slug: String = name.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    let city = CITIES[index % CITIES.len()].to_string();

    let size = CompanySize::ALL[rng.gen_range(0..CompanySize::ALL.len())];

    let sector_specialties = specialties_for(&sector);
    let sector_certifications = certifications_for(&sector);
    let specialty_count = (2 + rng.gen_range(0..3)).min(sector_specialties.len());
    let certification_count = (1 + rng.gen_range(0..2)).min(sector_certifications.len());

    let tax_id: String = (0..14).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect();
    let street = format!("{} rue de la République", rng.gen_range(0..200));
    let postal_code = rng.gen_range(10_000..=99_999).to_string();
    let phone = format!("+33 {}", rng.gen_range(100_000_000u32..=999_999_999));

    let logo_url = if rng.gen::<f64>() > LOGO_THRESHOLD {
        LOGOS.choose(rng).map(|logo| logo.to_string())
    } else {
        None
    };

    let years = Uniform::new_inclusive(5u32, 24).sample(rng);
    let lead_specialty = sector_specialties.first().copied().unwrap_or_default().to_lowercase();
    let description = format!(
        "Entreprise spécialisée dans {} avec {} ans d'expérience. Notre équipe d'experts vous accompagne sur vos projets les plus exigeants.",
        lead_specialty, years
    );

    let age_ms = Uniform::new(0.0, MAX_AGE_MS).sample(rng);
    let last_updated = now - Duration::milliseconds(age_ms as i64);

    CandidateSupplier {
        id: format!("supplier-{}", index + 1),
        email: format!("contact@{}.fr", slug),
        website: format!("https://www.{}.fr", slug),
        name,
        tax_id,
        street,
        city,
        department,
        postal_code,
        specialties: sector_specialties[..specialty_count].iter().map(|s| s.to_string()).collect(),
        certifications: sector_certifications[..certification_count].iter().map(|s| s.to_string()).collect(),
        sector,
        size,
        annual_revenue: size.annual_revenue().to_string(),
        employee_count: size.employee_count().to_string(),
        phone,
        logo_url,
        description,
        match_score: 0,
        match_reasons: Vec::new(),
        last_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::models::MatchReason;
    use crate::scoring::{SCORE_FLOOR, SECTOR_POINTS};

    fn paris_it_services() -> TenderCriteria {
        TenderCriteria {
            sector: "informatique-numerique".to_string(),
            location: "75 - Paris".to_string(),
            procurement_type: "services".to_string(),
            ..TenderCriteria::default()
        }
    }

    fn generate(criteria: &TenderCriteria, count: usize, seed: u64) -> Vec<CandidateSupplier> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_suppliers_with(criteria, count, &mut rng, Utc::now())
    }

    #[test]
    fn test_returns_requested_count() {
        for count in [0, 1, 6, 12, 40] {
            assert_eq!(generate(&paris_it_services(), count, 1).len(), count);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_suppliers(&paris_it_services(), 0).is_empty());
    }

    #[test]
    fn test_sorted_descending_and_bounded() {
        let suppliers = generate(&paris_it_services(), 50, 3);
        for pair in suppliers.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for s in &suppliers {
            assert!(s.match_score >= SCORE_FLOOR && s.match_score <= 100);
        }
    }

    #[test]
    fn test_seeded_candidates_carry_criteria_sector_and_location() {
        let criteria = paris_it_services();
        let suppliers = generate(&criteria, 12, 11);

        let seeded: Vec<_> = suppliers
            .iter()
            .filter(|s| {
                let n: usize = s.id.trim_start_matches("supplier-").parse().unwrap();
                n <= SEEDED_CANDIDATES
            })
            .collect();
        assert_eq!(seeded.len(), SEEDED_CANDIDATES);

        for s in seeded {
            assert_eq!(s.sector, criteria.sector);
            assert_eq!(s.department, criteria.location);
            let base = compute_match_score(s, &criteria);
            assert!(base.score >= SECTOR_POINTS + 30);
            assert_eq!(base.reasons[0], MatchReason::SectorMatch);
        }
    }

    #[test]
    fn test_empty_location_seeds_default_department() {
        let criteria = TenderCriteria {
            location: String::new(),
            ..paris_it_services()
        };
        let suppliers = generate(&criteria, 6, 5);
        assert!(suppliers.iter().all(|s| s.department == DEFAULT_DEPARTMENT));
    }

    #[test]
    fn test_unmapped_sector_uses_defaults() {
        let criteria = TenderCriteria {
            sector: "aeronautique".to_string(),
            ..paris_it_services()
        };
        let suppliers = generate(&criteria, 6, 9);
        for s in suppliers {
            assert_eq!(s.specialties, vec!["Services généraux".to_string()]);
            assert_eq!(s.certifications, vec!["ISO 9001".to_string()]);
            assert!(s.description.starts_with("Entreprise spécialisée dans services généraux"));
        }
    }

    #[test]
    fn test_names_cycle_with_suffix() {
        let suppliers = generate(&paris_it_services(), 17, 2);
        let by_id = |id: &str| suppliers.iter().find(|s| s.id == id).unwrap();

        assert_eq!(by_id("supplier-1").name, "Atelier Urbain");
        assert_eq!(by_id("supplier-15").name, "Zénith Technologies");
        assert_eq!(by_id("supplier-16").name, "Atelier Urbain 15");
        assert_eq!(by_id("supplier-16").email, "contact@atelierurbain15.fr");
        assert_eq!(by_id("supplier-2").website, "https://www.axiomebâtiment.fr");
        assert_eq!(by_id("supplier-16").city, "Grenoble");
    }

    #[test]
    fn test_field_shapes() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(21);
        let suppliers = generate_suppliers_with(&paris_it_services(), 30, &mut rng, now);

        for s in suppliers {
            assert_eq!(s.tax_id.len(), 14);
            assert!(s.tax_id.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(s.postal_code.len(), 5);
            assert!(s.phone.starts_with("+33 "));
            assert!((2..=4).contains(&s.specialties.len()) || s.specialties.len() == 1);
            assert!((1..=2).contains(&s.certifications.len()));
            assert_eq!(s.annual_revenue, s.size.annual_revenue());
            assert!(s.last_updated <= now);
            assert!(now - s.last_updated <= Duration::days(30));
            if let Some(logo) = &s.logo_url {
                assert!(LOGOS.contains(&logo.as_str()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let now = Utc::now();
        let a = generate_suppliers_with(&paris_it_services(), 12, &mut StdRng::seed_from_u64(42), now);
        let b = generate_suppliers_with(&paris_it_services(), 12, &mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_example_scenario() {
        let criteria = paris_it_services();
        let suppliers = generate(&criteria, 12, 1234);

        assert_eq!(suppliers.len(), 12);
        let strong = suppliers
            .iter()
            .filter(|s| s.sector == "informatique-numerique")
            .map(|s| compute_match_score(s, &criteria).score)
            .max()
            .unwrap();
        assert!(strong >= 40);
    }

    #[test]
    fn test_logo_share_is_roughly_fifteen_percent() {
        let suppliers = generate(&paris_it_services(), 2000, 99);
        let with_logo = suppliers.iter().filter(|s| s.logo_url.is_some()).count();
        assert!(with_logo > 200 && with_logo < 400, "with_logo = {}", with_logo);
    }
}
