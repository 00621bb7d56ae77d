use crate::runtime::contract::{PackageRecord, StatusUpdate};

/// External record store holding package records keyed by `packageId`.
///
/// `update_status` overwrites exactly the two fields carried by the
/// update and leaves every other attribute of the record untouched.
/// Read and write are independent operations with no transactional
/// linkage; between racing invocations the last write wins.
pub trait RecordStore {
    fn get_record(&self, package_id: &str) -> Result<Option<PackageRecord>, String>;

    fn update_status(&self, package_id: &str, update: &StatusUpdate) -> Result<(), String>;
}
