//! Seed data for the mock store.
//!
//! `SeedData::demo()` is what the application starts with: two children at
//! 实验小学, a day of records for 大宝 on 2026-02-25, one published menu and
//! one institution notice. 小宝 intentionally has no records so every screen's
//! empty state is reachable by switching child.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::{AttendanceStatus, HomeworkStatus, MistakeStatus, OverallRating};

use crate::backend::domain::models::attendance::Attendance;
use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::homework::Homework;
use crate::backend::domain::models::mistake::Mistake;
use crate::backend::domain::models::notice::Notice;
use crate::backend::domain::models::recipe::{Meal, Recipe};
use crate::backend::domain::models::review::Review;

/// Flat collections used to build a [`super::MemoryConnection`]
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub children: Vec<Child>,
    pub homeworks: Vec<Homework>,
    pub mistakes: Vec<Mistake>,
    pub reviews: Vec<Review>,
    pub attendance: Vec<Attendance>,
    pub recipes: Vec<Recipe>,
    pub notices: Vec<Notice>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Date the demo records are written for
pub fn demo_date() -> NaiveDate {
    ymd(2026, 2, 25)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(hm(hour, minute))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn child(id: &str, name: &str, grade: &str, class_name: &str) -> Child {
    Child {
        id: id.to_string(),
        name: name.to_string(),
        grade: grade.to_string(),
        class_name: class_name.to_string(),
        school: "实验小学".to_string(),
        avatar: None,
    }
}

impl SeedData {
    pub fn demo() -> Self {
        let today = demo_date();

        let homeworks = vec![
            Homework {
                id: "h1".to_string(),
                child_id: "c1".to_string(),
                subject: "数学".to_string(),
                title: "口算第3页".to_string(),
                status: HomeworkStatus::Completed,
                rating: Some("A".to_string()),
                date: today,
                submit_time: Some(at(today, 17, 30)),
                images: strings(&["https://via.placeholder.com/400x300?text=Math+Homework"]),
                feedback: Some("口算速度很快，准确率高！".to_string()),
            },
            Homework {
                id: "h2".to_string(),
                child_id: "c1".to_string(),
                subject: "英语".to_string(),
                title: "抄写 Unit 1".to_string(),
                status: HomeworkStatus::Completed,
                rating: Some("B".to_string()),
                date: today,
                submit_time: Some(at(today, 17, 45)),
                images: Vec::new(),
                feedback: Some("字母书写可以更工整一些。".to_string()),
            },
            Homework {
                id: "h3".to_string(),
                child_id: "c1".to_string(),
                subject: "语文".to_string(),
                title: "古诗背诵".to_string(),
                status: HomeworkStatus::Pending,
                rating: None,
                date: today,
                submit_time: None,
                images: Vec::new(),
                feedback: None,
            },
        ];

        let mistakes = vec![
            Mistake {
                id: "m1".to_string(),
                child_id: "c1".to_string(),
                subject: "数学".to_string(),
                title: "分数加减法计算错误".to_string(),
                date: today,
                reason: "审题不清".to_string(),
                knowledge_point: "分数加减法".to_string(),
                image_url: "https://via.placeholder.com/300x200?text=Math+Mistake".to_string(),
                status: MistakeStatus::Recorded,
            },
            Mistake {
                id: "m2".to_string(),
                child_id: "c1".to_string(),
                subject: "语文".to_string(),
                title: "近义词辨析错误".to_string(),
                date: today,
                reason: "基础薄弱".to_string(),
                knowledge_point: "近义词辨析".to_string(),
                image_url: "https://via.placeholder.com/300x200?text=Chinese+Mistake".to_string(),
                status: MistakeStatus::Recorded,
            },
        ];

        let reviews = vec![Review {
            id: "r1".to_string(),
            child_id: "c1".to_string(),
            date: today,
            overall_rating: OverallRating::Excellent,
            tags: strings(&["专注", "积极", "坐姿端正"]),
            content: "今天表现非常棒，口算速度很快！".to_string(),
            images: strings(&["https://via.placeholder.com/150"]),
        }];

        let attendance = vec![Attendance {
            id: "a1".to_string(),
            child_id: "c1".to_string(),
            date: today,
            check_in: Some(hm(11, 35)),
            check_out: Some(hm(18, 30)),
            status: AttendanceStatus::Normal,
        }];

        let recipes = vec![Recipe {
            id: "rc1".to_string(),
            date: today,
            lunch: Meal {
                items: strings(&["红烧肉", "清炒菜心", "紫菜蛋花汤"]),
                image: Some("https://via.placeholder.com/400x300?text=Lunch+Photo".to_string()),
            },
            snack: Meal {
                items: strings(&["苹果", "酸奶"]),
                image: Some("https://via.placeholder.com/400x300?text=Snack+Photo".to_string()),
            },
            dinner: Meal {
                items: strings(&["西红柿炒鸡蛋", "肉末茄子"]),
                image: Some("https://via.placeholder.com/400x300?text=Dinner+Photo".to_string()),
            },
        }];

        let notices = vec![Notice {
            id: "n1".to_string(),
            title: "关于2026年劳动节放假安排的通知".to_string(),
            summary: "尊敬的家长，根据国家节假日安排，本中心将于5月1日至5月5日放假...".to_string(),
            published_on: ymd(2026, 2, 24),
            image: Some("https://via.placeholder.com/100".to_string()),
        }];

        Self {
            children: vec![
                child("c1", "大宝", "一年级", "1班"),
                child("c2", "小宝", "三年级", "2班"),
            ],
            homeworks,
            mistakes,
            reviews,
            attendance,
            recipes,
            notices,
        }
    }
}
