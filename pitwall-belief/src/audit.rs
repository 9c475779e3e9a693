use serde::Serialize;

use pitwall_core::errors::PitwallResult;
use pitwall_core::models::UpdateRecord;

/// Append-only audit trail of every per-entity update, in call order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AuditLog {
    records: Vec<UpdateRecord>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next appended record will carry.
    pub fn next_sequence(&self) -> u64 {
        self.records.len() as u64
    }

    pub(crate) fn append(&mut self, record: UpdateRecord) {
        debug_assert_eq!(record.sequence, self.next_sequence());
        self.records.push(record);
    }

    pub fn records(&self) -> &[UpdateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn for_entity<'a>(&'a self, entity_id: &'a str) -> impl Iterator<Item = &'a UpdateRecord> {
        self.records.iter().filter(move |r| r.entity_id == entity_id)
    }

    pub fn for_session<'a>(&'a self, session: &'a str) -> impl Iterator<Item = &'a UpdateRecord> {
        self.records.iter().filter(move |r| r.session == session)
    }

    /// Export the full trail as a JSON array.
    pub fn to_json(&self) -> PitwallResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
