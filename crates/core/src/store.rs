use crate::error::{Error, Result};
use crate::types::{PageId, Record};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable, ordered list of records backing one page.
///
/// Built once at startup; cloning shares the underlying slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    page: PageId,
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Validate `records` and freeze them in insertion order.
    ///
    /// Fails with [`Error::InvalidRecordSet`] when ids repeat or a
    /// required field is blank.
    pub fn new(page: PageId, records: Vec<Record>) -> Result<Self> {
        if let Some(reason) = record_issues(&records).into_iter().next() {
            return Err(Error::invalid_record_set(page.slug(), reason));
        }

        Ok(Self {
            page,
            records: records.into(),
        })
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Every problem found in a record list, in record order
pub fn record_issues(records: &[Record]) -> Vec<String> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.id) {
            issues.push(format!("duplicate record id {}", record.id));
        }
        if record.label.trim().is_empty() {
            issues.push(format!("record {} has an empty label", record.id));
        }
        if record.value.trim().is_empty() {
            issues.push(format!("record {} has an empty value", record.id));
        }
        if let Some(published) = &record.published
            && published.trim().is_empty()
        {
            issues.push(format!("record {} has an empty published date", record.id));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> Vec<Record> {
        vec![
            Record::fact(1, "Name", "Mukesh"),
            Record::fact(2, "Role", "Frontend Developer"),
            Record::fact(3, "Location", "Chittoor, India"),
        ]
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = RecordStore::new(PageId::About, facts()).unwrap();
        let ids: Vec<u32> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.page(), PageId::About);
    }

    #[test]
    fn test_list_is_deterministic() {
        let store = RecordStore::new(PageId::About, facts()).unwrap();
        let shared = store.clone();
        assert_eq!(store.list(), shared.list());
        assert_eq!(store.list(), facts().as_slice());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut records = facts();
        records.push(Record::fact(2, "Hobby", "Chess"));

        let err = RecordStore::new(PageId::About, records).unwrap_err();
        assert!(matches!(err, Error::InvalidRecordSet { .. }));
        assert!(err.to_string().contains("duplicate record id 2"));
        assert!(err.to_string().contains("about"));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let err = RecordStore::new(PageId::About, vec![Record::fact(1, "  ", "x")]).unwrap_err();
        assert!(err.to_string().contains("empty label"));

        let err = RecordStore::new(PageId::About, vec![Record::fact(1, "Name", "")]).unwrap_err();
        assert!(err.to_string().contains("empty value"));

        let err = RecordStore::new(PageId::News, vec![Record::article(1, "Title", "Summary", " ")])
            .unwrap_err();
        assert!(err.to_string().contains("empty published date"));
    }

    #[test]
    fn test_record_issues_collects_everything() {
        let records = vec![
            Record::fact(1, "", "a"),
            Record::fact(1, "b", ""),
        ];
        let issues = record_issues(&records);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = RecordStore::new(PageId::News, Vec::new()).unwrap();
        assert!(store.is_empty());
    }
}
