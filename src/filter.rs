/// Filtering of generated suggestions by free-text search, size and city

use serde::{Deserialize, Serialize};

use crate::models::{CandidateSupplier, CompanySize};

/// Facets applied to a suggestion list. All facets must match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionFilter {
    /// Case-insensitive substring of name, city or any specialty
    pub search: String,
    /// `None` keeps every size
    pub size: Option<CompanySize>,
    /// `None` keeps every city, otherwise case-insensitive substring of the city
    pub city: Option<String>,
}

impl SuggestionFilter {
    pub fn matches(&self, supplier: &CandidateSupplier) -> bool {
        self.matches_search(supplier) && self.matches_size(supplier) && self.matches_city(supplier)
    }

    /// Keep matching suppliers in their original order
    pub fn apply<'a>(&self, suppliers: &'a [CandidateSupplier]) -> Vec<&'a CandidateSupplier> {
        suppliers.iter().filter(|s| self.matches(s)).collect()
    }

    fn matches_search(&self, supplier: &CandidateSupplier) -> bool {
        let term = self.search.to_lowercase();
        supplier.name.to_lowercase().contains(&term)
            || supplier.city.to_lowercase().contains(&term)
            || supplier.specialties.iter().any(|spec| spec.to_lowercase().contains(&term))
    }

    fn matches_size(&self, supplier: &CandidateSupplier) -> bool {
        self.size.map_or(true, |size| supplier.size == size)
    }

    fn matches_city(&self, supplier: &CandidateSupplier) -> bool {
        match &self.city {
            Some(city) => supplier.city.to_lowercase().contains(&city.to_lowercase()),
            None => true,
        }
    }
}
