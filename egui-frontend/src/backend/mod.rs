//! # Backend
//!
//! In-process data layer for the egui app. There is no server: the UI holds a
//! [`Backend`] and calls its services directly and synchronously.
//!
//! ```text
//! ui ──► Backend { services } ──► storage traits ──► MemoryConnection
//! ```

pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use domain::{
    AttendanceService, ChildService, ClockService, DailySummaryService, LearningService,
    LeaveService, NoticeService, RecipeService,
};
use storage::MemoryConnection;

/// All domain services, wired over one shared store
#[derive(Clone)]
pub struct Backend {
    pub child_service: ChildService,
    pub learning_service: LearningService,
    pub attendance_service: AttendanceService,
    pub recipe_service: RecipeService,
    pub notice_service: NoticeService,
    pub leave_service: LeaveService,
    pub daily_summary_service: DailySummaryService,
    pub clock_service: ClockService,
}

impl Backend {
    /// Backend over the built-in demo data
    pub fn new(reference_date: Option<NaiveDate>) -> Result<Self> {
        let connection = MemoryConnection::demo().context("Failed to seed the mock data store")?;
        Ok(Self::with_connection(Arc::new(connection), reference_date))
    }

    pub fn with_connection(connection: Arc<MemoryConnection>, reference_date: Option<NaiveDate>) -> Self {
        info!("🔧 Wiring backend services");

        let child_service = ChildService::new(connection.clone());
        let learning_service = LearningService::new(connection.clone());
        let attendance_service = AttendanceService::new(connection.clone());
        let daily_summary_service =
            DailySummaryService::new(attendance_service.clone(), learning_service.clone());

        Self {
            leave_service: LeaveService::new(connection.clone(), child_service.clone()),
            recipe_service: RecipeService::new(connection.clone()),
            notice_service: NoticeService::new(connection),
            child_service,
            learning_service,
            attendance_service,
            daily_summary_service,
            clock_service: ClockService::new(reference_date),
        }
    }
}
