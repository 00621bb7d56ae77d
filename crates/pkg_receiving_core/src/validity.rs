use crate::contract::PackageRecord;

/// Decides which status transition applies to a fetched record.
///
/// The production check is [`AlwaysValid`]; the seam exists so future
/// receiving rules (and tests) can inject a real predicate without
/// touching the handler.
pub trait ValidityCheck {
    fn evaluate(&self, record: &PackageRecord) -> bool;
}

/// Placeholder predicate until real receiving rules land: every fetched
/// record is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValid;

impl ValidityCheck for AlwaysValid {
    fn evaluate(&self, _record: &PackageRecord) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    struct RequiresTransitStatus;

    impl ValidityCheck for RequiresTransitStatus {
        fn evaluate(&self, record: &PackageRecord) -> bool {
            record.status == "inTransit"
        }
    }

    fn sample_record(status: &str) -> PackageRecord {
        PackageRecord {
            package_id: "abc123".to_string(),
            status: status.to_string(),
            receive_date: None,
            attributes: BTreeMap::new(),
        }
    }

    #[test]
    fn always_valid_accepts_every_record() {
        assert!(AlwaysValid.evaluate(&sample_record("inTransit")));
        assert!(AlwaysValid.evaluate(&sample_record("receiveUnavailable")));
    }

    #[test]
    fn injected_predicates_see_the_fetched_record() {
        assert!(RequiresTransitStatus.evaluate(&sample_record("inTransit")));
        assert!(!RequiresTransitStatus.evaluate(&sample_record("delivered")));
    }
}
