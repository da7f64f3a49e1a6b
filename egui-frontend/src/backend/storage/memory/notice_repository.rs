use anyhow::Result;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::notice::Notice;
use crate::backend::storage::traits::NoticeStorage;

#[derive(Clone)]
pub struct NoticeRepository {
    connection: Arc<MemoryConnection>,
}

impl NoticeRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl NoticeStorage for NoticeRepository {
    fn list_notices(&self) -> Result<Vec<Notice>> {
        Ok(self.connection.notices().to_vec())
    }
}
