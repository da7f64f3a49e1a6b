use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::domain::models::notice::Notice;
use crate::backend::storage::memory::{MemoryConnection, NoticeRepository};
use crate::backend::storage::traits::NoticeStorage;

/// Institution announcements shown on the home screen
#[derive(Clone)]
pub struct NoticeService {
    notice_repository: NoticeRepository,
}

impl NoticeService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let notice_repository = NoticeRepository::new(connection);
        Self { notice_repository }
    }

    /// All notices, most recently published first
    pub fn list_notices(&self) -> Result<Vec<Notice>> {
        let mut notices = self.notice_repository.list_notices()?;
        notices.sort_by(|a, b| b.published_on.cmp(&a.published_on));
        info!("📢 {} notices", notices.len());
        Ok(notices)
    }

    pub fn latest_notice(&self) -> Result<Option<Notice>> {
        Ok(self.list_notices()?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::test_utils::date;
    use crate::backend::storage::memory::SeedData;

    fn notice(id: &str, published_on: chrono::NaiveDate) -> Notice {
        Notice {
            id: id.to_string(),
            title: format!("通知 {}", id),
            summary: "摘要".to_string(),
            published_on,
            image: None,
        }
    }

    #[test]
    fn test_notices_newest_first() {
        let seed = SeedData {
            notices: vec![notice("old", date(2026, 1, 1)), notice("new", date(2026, 2, 1))],
            ..SeedData::default()
        };
        let service = NoticeService::new(Arc::new(MemoryConnection::new(seed).unwrap()));

        let ids: Vec<_> = service.list_notices().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert_eq!(service.latest_notice().unwrap().unwrap().id, "new");
    }

    #[test]
    fn test_no_notices() {
        let service = NoticeService::new(Arc::new(MemoryConnection::new(SeedData::default()).unwrap()));
        assert!(service.latest_notice().unwrap().is_none());
    }
}
