use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered student profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    /// Child ID, e.g. "c1"
    pub id: String,
    pub name: String,
    /// Grade label, e.g. "一年级"
    pub grade: String,
    /// Class label, e.g. "1班"
    pub class: String,
    pub school: String,
    /// Optional avatar image reference
    pub avatar: Option<String>,
}

impl Child {
    /// First character of the name, used for avatar circles
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }

    /// "一年级 1班"
    pub fn grade_and_class(&self) -> String {
        format!("{} {}", self.grade, self.class)
    }
}

/// Completion state of a homework assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Pending,
    Submitted,
    Completed,
}

impl HomeworkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HomeworkStatus::Pending => "未完成",
            HomeworkStatus::Submitted => "已提交",
            HomeworkStatus::Completed => "已完成",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub subject: String,
    pub title: String,
    pub status: HomeworkStatus,
    /// Teacher grade such as "A"
    pub rating: Option<String>,
    /// Date the homework was assigned (YYYY-MM-DD)
    pub date: String,
    /// Submission time (YYYY-MM-DD HH:MM)
    pub submit_time: Option<String>,
    /// Photo references of the submitted work
    pub images: Vec<String>,
    pub feedback: Option<String>,
}

/// Learning progress of a recorded mistake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistakeStatus {
    Recorded,
    Practiced,
    Mastered,
}

impl MistakeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MistakeStatus::Recorded => "已记录",
            MistakeStatus::Practiced => "已练习",
            MistakeStatus::Mastered => "已掌握",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub id: String,
    pub subject: String,
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    pub reason: String,
    pub knowledge_point: String,
    pub image_url: String,
    pub status: MistakeStatus,
}

/// Overall rating a teacher gives in a daily review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallRating {
    #[serde(rename = "优秀")]
    Excellent,
    #[serde(rename = "良好")]
    Good,
    #[serde(rename = "一般")]
    Fair,
    #[serde(rename = "需关注")]
    NeedsAttention,
}

impl OverallRating {
    pub fn label(&self) -> &'static str {
        match self {
            OverallRating::Excellent => "优秀",
            OverallRating::Good => "良好",
            OverallRating::Fair => "一般",
            OverallRating::NeedsAttention => "需关注",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub overall_rating: OverallRating,
    pub tags: Vec<String>,
    pub content: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Normal,
    Late,
    Leave,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Normal => "正常",
            AttendanceStatus::Late => "迟到",
            AttendanceStatus::Leave => "请假",
            AttendanceStatus::Absent => "缺勤",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub check_in: Option<String>,
    /// HH:MM
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
}

/// One meal slot of a daily recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub items: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,
}

/// Kind of absence a parent applies for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[default]
    #[serde(rename = "病假")]
    Sick,
    #[serde(rename = "事假")]
    Personal,
    #[serde(rename = "其他")]
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Sick, LeaveType::Personal, LeaveType::Other];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "病假",
            LeaveType::Personal => "事假",
            LeaveType::Other => "其他",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "待审批",
            LeaveStatus::Approved => "已通过",
            LeaveStatus::Rejected => "已拒绝",
        }
    }
}

/// A parent-submitted absence application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Leave request ID in format "leave::<uuid>"
    pub id: String,
    pub child_id: String,
    /// Requested day of absence (YYYY-MM-DD)
    pub date: String,
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: LeaveStatus,
    pub reject_reason: Option<String>,
    /// Submission timestamp (RFC 3339)
    pub created_at: String,
}

impl LeaveRequest {
    /// Local calendar date of `created_at`, falling back to the raw string
    pub fn created_on(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&chrono::Local).date_naive().to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Institution announcement shown on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// YYYY-MM-DD
    pub published_on: String,
    pub image: Option<String>,
}

/// Home screen aggregate for one child and one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub child_id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub attendance: Option<Attendance>,
    pub homework_completed: usize,
    pub homework_total: usize,
    pub latest_rating: Option<OverallRating>,
    pub mistake_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_child() -> Child {
        Child {
            id: "c1".to_string(),
            name: "大宝".to_string(),
            grade: "一年级".to_string(),
            class: "1班".to_string(),
            school: "实验小学".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_child_initial_and_grade_label() {
        let child = sample_child();
        assert_eq!(child.initial(), "大");
        assert_eq!(child.grade_and_class(), "一年级 1班");

        let nameless = Child { name: String::new(), ..sample_child() };
        assert_eq!(nameless.initial(), "");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&HomeworkStatus::Completed).unwrap(), "\"completed\"");
        assert_eq!(serde_json::to_string(&LeaveStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&OverallRating::NeedsAttention).unwrap(), "\"需关注\"");
        assert_eq!(serde_json::to_string(&LeaveType::Personal).unwrap(), "\"事假\"");

        let rating: OverallRating = serde_json::from_str("\"良好\"").unwrap();
        assert_eq!(rating, OverallRating::Good);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LeaveStatus::Approved.label(), "已通过");
        assert_eq!(LeaveStatus::Rejected.label(), "已拒绝");
        assert_eq!(LeaveStatus::Pending.label(), "待审批");
        assert_eq!(OverallRating::Excellent.to_string(), "优秀");
        assert_eq!(LeaveType::default(), LeaveType::Sick);
        assert_eq!(LeaveType::ALL.len(), 3);
    }

    #[test]
    fn test_leave_request_created_on() {
        let mut request = LeaveRequest {
            id: "leave::1".to_string(),
            child_id: "c1".to_string(),
            date: "2026-02-26".to_string(),
            leave_type: LeaveType::Sick,
            reason: "发烧".to_string(),
            status: LeaveStatus::Pending,
            reject_reason: None,
            created_at: "2026-02-24T23:30:00+00:00".to_string(),
        };
        let utc_evening = chrono::NaiveDate::from_ymd_opt(2026, 2, 24)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let local_date = chrono::Local.from_utc_datetime(&utc_evening).date_naive();
        assert_eq!(request.created_on(), local_date.to_string());

        request.created_at = "not a timestamp".to_string();
        assert_eq!(request.created_on(), "not a timestamp");
    }
}
