/// Reporting and output formatting module
/// Handles all console output for suggestions, sampling and dispatches

use crate::catalog::sector_label;
use crate::models::{CandidateSupplier, MatchTier, TenderCriteria};
use crate::sampling::ScoreDistribution;
use crate::selection::Dispatch;

fn tier_marker(score: u8) -> &'static str {
    match MatchTier::from_score(score) {
        MatchTier::High => "[+]",
        MatchTier::Medium => "[~]",
        MatchTier::Low => "[-]",
    }
}

/// One line per supplier: rank, score, name, city, size, sector
pub fn format_supplier_line(rank: usize, supplier: &CandidateSupplier) -> String {
    format!(
        "{:>2}. {} {:>3}%  {} ({}, {}) - {}",
        rank,
        tier_marker(supplier.match_score),
        supplier.match_score,
        supplier.name,
        supplier.city,
        supplier.size,
        sector_label(&supplier.sector),
    )
}

/// Display the criteria the suggestions were generated for
pub fn display_criteria(criteria: &TenderCriteria) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                        FOURNISSEURS SUGGÉRÉS                                 ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!("Tender: {}", criteria.title);
    println!(
        "  Sector: {} | Location: {} | Type: {} | Budget: {}\n",
        sector_label(&criteria.sector),
        criteria.location,
        criteria.procurement_type,
        criteria.estimated_budget
    );
}

/// Display ranked suggestions with their match reasons
pub fn display_suggestions(suppliers: &[&CandidateSupplier]) {
    println!("{} fournisseur(s) trouvé(s)\n", suppliers.len());

    for (rank, supplier) in suppliers.iter().enumerate() {
        println!("{}", format_supplier_line(rank + 1, supplier));
        let reasons: Vec<&str> = supplier.match_reasons.iter().map(|r| r.label()).collect();
        if !reasons.is_empty() {
            println!("      {}", reasons.join(" · "));
        }
        println!("      {} | {}", supplier.specialties.join(", "), supplier.certifications.join(", "));
    }
}

/// Display the score distribution across sampled runs
pub fn display_distribution(dist: &ScoreDistribution) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                        MATCH SCORE DISTRIBUTION                              ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!(
        "{} runs x {} candidates = {} scores\n",
        dist.runs, dist.candidates_per_run, dist.samples
    );
    if dist.samples == 0 {
        println!("No scores sampled.");
        return;
    }

    println!("Mean: {:.1} ± {:.1} | Range: [{}, {}]", dist.mean_score, dist.std_dev_score, dist.min_score, dist.max_score);
    println!("\nPercentiles:");
    println!("  10th:  {}", dist.percentile_10);
    println!("  25th:  {}", dist.percentile_25);
    println!("  50th:  {}", dist.percentile_50);
    println!("  75th:  {}", dist.percentile_75);
    println!("  90th:  {}", dist.percentile_90);
    println!("\nTiers:");
    println!("  High (>= 70):   {}", dist.high_tier);
    println!("  Medium (>= 50): {}", dist.medium_tier);
    println!("  Low:            {}", dist.low_tier);
    println!("  At floor:       {:.1}%", dist.at_floor * 100.0);
}

/// Display the quote requests built for a tender
pub fn display_dispatch(dispatch: &Dispatch) {
    for request in &dispatch.requests {
        let origin = if request.sent_to.is_some() { "réseau" } else { "suggestion" };
        println!("  -> {} ({}) [{}]", request.company_name, request.location, origin);
    }
    println!("\n{}", dispatch.summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::generator::generate_suppliers_with;

    #[test]
    fn test_supplier_line_contents() {
        let mut rng = StdRng::seed_from_u64(3);
        let suppliers = generate_suppliers_with(&TenderCriteria::default(), 3, &mut rng, Utc::now());
        let line = format_supplier_line(1, &suppliers[0]);

        assert!(line.starts_with(" 1. "));
        assert!(line.contains(&suppliers[0].name));
        assert!(line.contains(&format!("{}%", suppliers[0].match_score)));
        assert!(line.contains("Informatique et numérique"));
    }

    #[test]
    fn test_tier_markers() {
        assert_eq!(tier_marker(85), "[+]");
        assert_eq!(tier_marker(55), "[~]");
        assert_eq!(tier_marker(15), "[-]");
    }
}
