use log::debug;

use crate::income::IncomeRecord;
use crate::timeline::TimelineEntry;

/// Client-side copy of the `GET /income` list.
///
/// `None` means the list has not been fetched yet, which is different from an
/// empty list. Records are kept in the order the server and the create calls
/// produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeCache {
    records: Option<Vec<IncomeRecord>>,
}

impl IncomeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list with a freshly fetched one.
    pub fn hydrate(&mut self, records: Vec<IncomeRecord>) {
        debug!("income cache hydrated with {} records", records.len());
        self.records = Some(records);
    }

    /// Add a record returned by a successful create call.
    pub fn append_record(&mut self, record: IncomeRecord) {
        debug!("income cache append {}", record.id);
        match self.records.as_mut() {
            Some(records) => records.push(record),
            None => self.records = Some(vec![record]),
        }
    }

    pub fn records(&self) -> Option<&[IncomeRecord]> {
        self.records.as_deref()
    }

    /// Timeline entries in cache order.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        self.records
            .iter()
            .flatten()
            .map(TimelineEntry::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::IncomeType;
    use chrono::NaiveDate;

    fn record(id: &str) -> IncomeRecord {
        IncomeRecord {
            id: id.to_string(),
            amount: "100".to_string(),
            fund_amount: "10".to_string(),
            income_type: IncomeType::Cash,
            source: format!("source {}", id),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_append_to_loaded_list_keeps_order() {
        let mut cache = IncomeCache::new();
        cache.hydrate(vec![record("a"), record("b")]);
        cache.append_record(record("r"));

        let ids: Vec<&str> = cache.records().unwrap().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "r"]);
    }

    #[test]
    fn test_append_to_unloaded_cache_starts_a_list() {
        let mut cache = IncomeCache::new();
        assert_eq!(cache.records(), None);

        cache.append_record(record("r"));
        assert_eq!(cache.records(), Some(&[record("r")][..]));
    }

    #[test]
    fn test_hydrate_with_empty_list_is_loaded() {
        let mut cache = IncomeCache::new();
        cache.hydrate(Vec::new());
        assert_eq!(cache.records(), Some(&[][..]));
        assert!(cache.timeline().is_empty());
    }

    #[test]
    fn test_timeline_follows_cache_order() {
        let mut cache = IncomeCache::new();
        assert!(cache.timeline().is_empty());

        cache.hydrate(vec![record("first"), record("second")]);
        let titles: Vec<String> = cache.timeline().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["source first", "source second"]);
    }
}
