/// Recipient selection over suggestions and hand-off to outbound quote requests

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MatcherError;
use crate::models::CandidateSupplier;

/// Ordered set of selected candidate ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it otherwise
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Replace the selection with every currently visible supplier
    pub fn select_all(&mut self, visible: &[&CandidateSupplier]) {
        self.ids = visible.iter().map(|s| s.id.clone()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Selected suppliers in list order
    pub fn resolve<'a>(&self, suppliers: &'a [CandidateSupplier]) -> Vec<&'a CandidateSupplier> {
        suppliers.iter().filter(|s| self.contains(&s.id)).collect()
    }

    /// Like `resolve`, but every selected id must exist in `suppliers`
    pub fn resolve_strict<'a>(
        &self,
        suppliers: &'a [CandidateSupplier],
    ) -> Result<Vec<&'a CandidateSupplier>, MatcherError> {
        if let Some(missing) = self.ids.iter().find(|id| !suppliers.iter().any(|s| &s.id == *id)) {
            return Err(MatcherError::UnknownSupplier(missing.clone()));
        }
        Ok(self.resolve(suppliers))
    }
}

/// The tender being sent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenderRef {
    pub id: String,
    pub title: String,
}

/// A company from the buyer's own contact book
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkContact {
    pub id: String,
    pub company_name: String,
    pub location: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    #[serde(rename = "Envoyé")]
    Sent,
}

/// Outbound quote request, one per recipient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub tender_id: String,
    pub tender_title: String,
    pub company_name: String,
    pub location: String,
    /// Contact id for network recipients, `None` for suggested suppliers
    pub sent_to: Option<String>,
    pub status: QuoteStatus,
}

/// Quote requests ready to be persisted by the caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub requests: Vec<QuoteRequest>,
    pub network_count: usize,
    pub suggestion_count: usize,
}

impl Dispatch {
    pub fn total_recipients(&self) -> usize {
        self.network_count + self.suggestion_count
    }

    pub fn summary(&self) -> String {
        format!(
            "L'appel d'offres a été envoyé à {} destinataire(s) ({} de votre réseau + {} suggestions).",
            self.total_recipients(),
            self.network_count,
            self.suggestion_count
        )
    }
}

/// Build the quote requests for a tender: network contacts first, then the selected suggestions
pub fn build_quote_requests(
    tender: Option<&TenderRef>,
    contacts: &[NetworkContact],
    selected: &[&CandidateSupplier],
) -> Result<Dispatch, MatcherError> {
    let tender = tender.ok_or(MatcherError::MissingTender)?;

    let from_network = contacts.iter().map(|contact| QuoteRequest {
        tender_id: tender.id.clone(),
        tender_title: tender.title.clone(),
        company_name: contact.company_name.clone(),
        location: contact.location.clone(),
        sent_to: Some(contact.id.clone()),
        status: QuoteStatus::Sent,
    });

    let from_suggestions = selected.iter().map(|supplier| QuoteRequest {
        tender_id: tender.id.clone(),
        tender_title: tender.title.clone(),
        company_name: supplier.name.clone(),
        location: supplier.city.clone(),
        sent_to: None,
        status: QuoteStatus::Sent,
    });

    let dispatch = Dispatch {
        requests: from_network.chain(from_suggestions).collect(),
        network_count: contacts.len(),
        suggestion_count: selected.len(),
    };

    info!(
        tender_id = %tender.id,
        network = dispatch.network_count,
        suggestions = dispatch.suggestion_count,
        "built quote requests"
    );

    Ok(dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::generator::generate_suppliers_with;
    use crate::models::TenderCriteria;

    fn suggestions() -> Vec<CandidateSupplier> {
        let mut rng = StdRng::seed_from_u64(4);
        generate_suppliers_with(&TenderCriteria::default(), 12, &mut rng, Utc::now())
    }

    fn tender() -> TenderRef {
        TenderRef {
            id: "ao-42".to_string(),
            title: "Refonte du SI".to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle("supplier-3");
        selection.toggle("supplier-1");
        assert_eq!(selection.ids(), &["supplier-3".to_string(), "supplier-1".to_string()]);

        selection.toggle("supplier-3");
        assert!(!selection.contains("supplier-3"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_select_all_replaces_and_deselect_clears() {
        let suppliers = suggestions();
        let visible: Vec<&CandidateSupplier> = suppliers.iter().take(4).collect();

        let mut selection = Selection::new();
        selection.toggle("supplier-12");
        selection.select_all(&visible);
        assert_eq!(selection.len(), 4);
        assert!(visible.iter().all(|s| selection.contains(&s.id)));

        selection.deselect_all();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_resolve_keeps_list_order() {
        let suppliers = suggestions();
        let mut selection = Selection::new();
        selection.toggle(&suppliers[5].id);
        selection.toggle(&suppliers[1].id);

        let resolved = selection.resolve(&suppliers);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].id, suppliers[1].id);
        assert_eq!(resolved[1].id, suppliers[5].id);
    }

    #[test]
    fn test_resolve_strict_rejects_unknown_ids() {
        let suppliers = suggestions();
        let mut selection = Selection::new();
        selection.toggle("supplier-99");

        assert!(matches!(
            selection.resolve_strict(&suppliers),
            Err(MatcherError::UnknownSupplier(id)) if id == "supplier-99"
        ));
    }

    #[test]
    fn test_requests_network_first_then_suggestions() {
        let suppliers = suggestions();
        let contacts = vec![NetworkContact {
            id: "contact-7".to_string(),
            company_name: "Hexatech".to_string(),
            location: "Lille".to_string(),
        }];
        let selected: Vec<&CandidateSupplier> = suppliers.iter().take(2).collect();

        let dispatch = build_quote_requests(Some(&tender()), &contacts, &selected).unwrap();

        assert_eq!(dispatch.requests.len(), 3);
        assert_eq!(dispatch.requests[0].sent_to.as_deref(), Some("contact-7"));
        assert_eq!(dispatch.requests[1].company_name, suppliers[0].name);
        assert_eq!(dispatch.requests[1].location, suppliers[0].city);
        assert!(dispatch.requests[1].sent_to.is_none());
        assert!(dispatch.requests.iter().all(|r| r.tender_id == "ao-42" && r.status == QuoteStatus::Sent));
        assert_eq!(
            dispatch.summary(),
            "L'appel d'offres a été envoyé à 3 destinataire(s) (1 de votre réseau + 2 suggestions)."
        );
    }

    #[test]
    fn test_missing_tender_is_an_error() {
        let result = build_quote_requests(None, &[], &[]);
        assert!(matches!(result, Err(MatcherError::MissingTender)));
    }

    #[test]
    fn test_status_serializes_in_french() {
        let json = serde_json::to_string(&QuoteStatus::Sent).unwrap();
        assert_eq!(json, "\"Envoyé\"");
    }
}
