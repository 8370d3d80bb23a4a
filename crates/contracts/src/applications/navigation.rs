use serde::{Deserialize, Serialize};

use super::record::ApplicationRecord;
use super::status::CanonicalStatus;
use crate::enums::InstitutionCategory;

/// Destination paths for the application workflow steps
pub mod routes {
    /// Sale entry form, shared by school rosters and the card view
    pub const SCHOOL_SALE: &str = "/applications/sale";
    pub const COLLEGE_SALE: &str = "/college/sale";
    /// Completion step for an already fast-sold college application
    pub const COLLEGE_FAST_SALE: &str = "/college/fast-sale";
    /// Confirmation form, shared by school rosters and the card view
    pub const SCHOOL_CONFIRMATION: &str = "/applications/confirm";
    pub const COLLEGE_CONFIRMATION: &str = "/college/confirm";
    /// Damage reports use one route regardless of category
    pub const DAMAGE_REPORT: &str = "/applications/damage-report";
}

/// A computed navigation request. The resolver never navigates; the
/// router collaborator receives this and performs the transition,
/// carrying the record along as route state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub path: String,
    pub application: ApplicationRecord,
}

impl RouteRequest {
    fn new(path: &str, application: &ApplicationRecord) -> Self {
        Self {
            path: path.to_string(),
            application: application.clone(),
        }
    }
}

/// Sale action target. College rows without a router collaborator fall
/// back to revealing the matching search card instead of navigating.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleTarget {
    Navigate(RouteRequest),
    RevealInSearch(String),
}

/// Resolve where the sale action goes. Returns `None` (a no-op, not an
/// error) for records without an application number.
pub fn resolve_sale_target(
    record: &ApplicationRecord,
    category: InstitutionCategory,
    router_available: bool,
) -> Option<SaleTarget> {
    if record.application_no.trim().is_empty() {
        return None;
    }
    let target = match category {
        InstitutionCategory::College => {
            if record.canonical_status() == CanonicalStatus::FastSold {
                SaleTarget::Navigate(RouteRequest::new(routes::COLLEGE_FAST_SALE, record))
            } else if router_available {
                SaleTarget::Navigate(RouteRequest::new(routes::COLLEGE_SALE, record))
            } else {
                SaleTarget::RevealInSearch(record.application_no.clone())
            }
        }
        InstitutionCategory::School => {
            SaleTarget::Navigate(RouteRequest::new(routes::SCHOOL_SALE, record))
        }
    };
    Some(target)
}

pub fn resolve_confirmation_target(
    record: &ApplicationRecord,
    category: InstitutionCategory,
) -> Option<RouteRequest> {
    if record.application_no.trim().is_empty() {
        return None;
    }
    let path = match category {
        InstitutionCategory::College => routes::COLLEGE_CONFIRMATION,
        InstitutionCategory::School => routes::SCHOOL_CONFIRMATION,
    };
    Some(RouteRequest::new(path, record))
}

pub fn resolve_damage_target(record: &ApplicationRecord) -> Option<RouteRequest> {
    if record.application_no.trim().is_empty() {
        return None;
    }
    Some(RouteRequest::new(routes::DAMAGE_REPORT, record))
}

/// Card-view click rule, independent of category: confirmed cards are
/// inert, sold cards go to the confirmation form, everything else to
/// the sale form.
pub fn card_click_target(record: &ApplicationRecord) -> Option<RouteRequest> {
    if record.application_no.trim().is_empty() {
        return None;
    }
    match record.canonical_status() {
        CanonicalStatus::Confirmed => None,
        CanonicalStatus::Sold => Some(RouteRequest::new(routes::SCHOOL_CONFIRMATION, record)),
        _ => Some(RouteRequest::new(routes::SCHOOL_SALE, record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::record::sample;

    #[test]
    fn test_college_fast_sold_goes_to_fast_sale_completion() {
        let record = sample("A1", "North", "Fast Sold");
        let target = resolve_sale_target(&record, InstitutionCategory::College, true).unwrap();
        match target {
            SaleTarget::Navigate(request) => {
                assert_eq!(request.path, routes::COLLEGE_FAST_SALE);
                assert_eq!(request.application.application_no, "A1");
            }
            other => panic!("unexpected target: {other:?}"),
        }
    }

    #[test]
    fn test_college_sale_strategy_depends_on_router() {
        let record = sample("A1", "North", "With PRO");
        let with_router =
            resolve_sale_target(&record, InstitutionCategory::College, true).unwrap();
        assert_eq!(
            with_router,
            SaleTarget::Navigate(RouteRequest {
                path: routes::COLLEGE_SALE.to_string(),
                application: record.clone(),
            })
        );
        let without_router =
            resolve_sale_target(&record, InstitutionCategory::College, false).unwrap();
        assert_eq!(without_router, SaleTarget::RevealInSearch("A1".to_string()));
    }

    #[test]
    fn test_school_sale_route() {
        let record = sample("B2", "South", "Sold");
        let target = resolve_sale_target(&record, InstitutionCategory::School, false).unwrap();
        match target {
            SaleTarget::Navigate(request) => {
                assert_eq!(request.path, routes::SCHOOL_SALE);
                assert_eq!(request.application.application_no, "B2");
            }
            other => panic!("unexpected target: {other:?}"),
        }
    }

    #[test]
    fn test_confirmation_routes_by_category() {
        let record = sample("A1", "North", "Sold");
        assert_eq!(
            resolve_confirmation_target(&record, InstitutionCategory::College)
                .unwrap()
                .path,
            routes::COLLEGE_CONFIRMATION
        );
        assert_eq!(
            resolve_confirmation_target(&record, InstitutionCategory::School)
                .unwrap()
                .path,
            routes::SCHOOL_CONFIRMATION
        );
    }

    #[test]
    fn test_damage_route_is_shared() {
        let record = sample("A1", "North", "Damaged");
        assert_eq!(
            resolve_damage_target(&record).unwrap().path,
            routes::DAMAGE_REPORT
        );
    }

    #[test]
    fn test_empty_application_no_is_noop() {
        let record = sample("  ", "North", "Sold");
        assert!(resolve_sale_target(&record, InstitutionCategory::College, true).is_none());
        assert!(resolve_sale_target(&record, InstitutionCategory::School, true).is_none());
        assert!(resolve_confirmation_target(&record, InstitutionCategory::College).is_none());
        assert!(resolve_damage_target(&record).is_none());
        assert!(card_click_target(&record).is_none());
    }

    #[test]
    fn test_card_click_rule() {
        assert!(card_click_target(&sample("A1", "", "Confirmed")).is_none());
        assert_eq!(
            card_click_target(&sample("A1", "", "Sold")).unwrap().path,
            routes::SCHOOL_CONFIRMATION
        );
        assert_eq!(
            card_click_target(&sample("A1", "", "With PRO")).unwrap().path,
            routes::SCHOOL_SALE
        );
        assert_eq!(
            card_click_target(&sample("A1", "", "Fast Sold")).unwrap().path,
            routes::SCHOOL_SALE
        );
    }
}
