//! Domain model → shared DTO conversions.
//!
//! The screens only ever see `shared` types: dates as `YYYY-MM-DD`, times as
//! `HH:MM`, timestamps as RFC 3339.

use shared::*;

use crate::backend::domain::models::attendance::Attendance as DomainAttendance;
use crate::backend::domain::models::child::Child as DomainChild;
use crate::backend::domain::models::homework::Homework as DomainHomework;
use crate::backend::domain::models::leave_request::LeaveRequest as DomainLeaveRequest;
use crate::backend::domain::models::mistake::Mistake as DomainMistake;
use crate::backend::domain::models::notice::Notice as DomainNotice;
use crate::backend::domain::models::recipe::{Meal as DomainMeal, Recipe as DomainRecipe};
use crate::backend::domain::models::review::Review as DomainReview;
use crate::backend::domain::DailySummary as DomainDailySummary;

const TIME_FORMAT: &str = "%H:%M";

/// Helper function to convert domain child to shared child
pub fn to_dto(child: DomainChild) -> Child {
    Child {
        id: child.id,
        name: child.name,
        grade: child.grade,
        class: child.class_name,
        school: child.school,
        avatar: child.avatar,
    }
}

pub fn homework_to_dto(homework: DomainHomework) -> Homework {
    Homework {
        id: homework.id,
        subject: homework.subject,
        title: homework.title,
        status: homework.status,
        rating: homework.rating,
        date: homework.date.to_string(),
        submit_time: homework
            .submit_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
        images: homework.images,
        feedback: homework.feedback,
    }
}

pub fn mistake_to_dto(mistake: DomainMistake) -> Mistake {
    Mistake {
        id: mistake.id,
        subject: mistake.subject,
        title: mistake.title,
        date: mistake.date.to_string(),
        reason: mistake.reason,
        knowledge_point: mistake.knowledge_point,
        image_url: mistake.image_url,
        status: mistake.status,
    }
}

pub fn review_to_dto(review: DomainReview) -> Review {
    Review {
        id: review.id,
        date: review.date.to_string(),
        overall_rating: review.overall_rating,
        tags: review.tags,
        content: review.content,
        images: review.images,
    }
}

pub fn attendance_to_dto(attendance: DomainAttendance) -> Attendance {
    Attendance {
        id: attendance.id,
        date: attendance.date.to_string(),
        check_in: attendance.check_in.map(|t| t.format(TIME_FORMAT).to_string()),
        check_out: attendance.check_out.map(|t| t.format(TIME_FORMAT).to_string()),
        status: attendance.status,
    }
}

fn meal_to_dto(meal: DomainMeal) -> Meal {
    Meal {
        items: meal.items,
        image: meal.image,
    }
}

pub fn recipe_to_dto(recipe: DomainRecipe) -> Recipe {
    Recipe {
        id: recipe.id,
        date: recipe.date.to_string(),
        lunch: meal_to_dto(recipe.lunch),
        snack: meal_to_dto(recipe.snack),
        dinner: meal_to_dto(recipe.dinner),
    }
}

pub fn notice_to_dto(notice: DomainNotice) -> Notice {
    Notice {
        id: notice.id,
        title: notice.title,
        summary: notice.summary,
        published_on: notice.published_on.to_string(),
        image: notice.image,
    }
}

pub fn leave_request_to_dto(request: DomainLeaveRequest) -> LeaveRequest {
    LeaveRequest {
        id: request.id,
        child_id: request.child_id,
        date: request.date.to_string(),
        leave_type: request.leave_type,
        reason: request.reason,
        status: request.status,
        reject_reason: request.reject_reason,
        created_at: request.created_at.to_rfc3339(),
    }
}

pub fn daily_summary_to_dto(summary: DomainDailySummary) -> DailySummary {
    DailySummary {
        child_id: summary.child_id,
        date: summary.date.to_string(),
        attendance: summary.attendance.map(attendance_to_dto),
        homework_completed: summary.homework_completed,
        homework_total: summary.homework_total,
        latest_rating: summary.latest_rating,
        mistake_count: summary.mistake_count,
    }
}
