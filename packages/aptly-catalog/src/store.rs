use crate::models::CatalogRecord;

/// Read-only record set backing the vector index. Positions mirror the
/// index's vector positions; both are frozen for the process lifetime.
#[derive(Debug)]
pub struct CatalogStore {
	records: Vec<CatalogRecord>,
}
impl CatalogStore {
	pub fn new(records: Vec<CatalogRecord>) -> Self {
		Self { records }
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn get(&self, position: usize) -> Option<&CatalogRecord> {
		self.records.get(position)
	}

	pub fn records(&self) -> &[CatalogRecord] {
		&self.records
	}
}
