use serde::{Deserialize, Serialize};

// ==================== Авторизация ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    pub user: Option<AdminUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
}

// ==================== Сущности ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_name: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub likes: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub category: Option<String>,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub campaign_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub user_name: Option<String>,
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub amount: f64,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub post_id: i64,
    pub user_name: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: i64,
    pub campaign_title: Option<String>,
    pub user_name: Option<String>,
    pub volunteer_status: Option<String>,
    #[serde(default)]
    pub hours_contributed: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_name: Option<String>,
    pub title: Option<String>,
    pub notification_type: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPost {
    pub post_id: i64,
    pub user_name: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub likes_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub user_name: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub rating: u8,
    pub message: Option<String>,
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_score: f64,
    pub created_at: Option<String>,
}

// ==================== Обёртки списков ====================

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignsResponse {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DonationsResponse {
    #[serde(default)]
    pub donations: Vec<Donation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolunteersResponse {
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopPostsResponse {
    #[serde(default)]
    pub posts: Vec<TopPost>,
}

// ==================== Статистика ====================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TotalResponse {
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub users: i64,
    pub posts: i64,
    pub campaigns: i64,
    pub donation_total: f64,
    pub comments: i64,
    pub volunteers: i64,
    pub unread_notifications: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentActivityResponse {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyStatsResponse {
    #[serde(default)]
    pub stats: serde_json::Map<String, serde_json::Value>,
}

// ==================== Feedback / сентимент ====================

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FeedbackStats {
    #[serde(default)]
    pub total_feedback: i64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_distribution: std::collections::BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackStatsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub stats: Option<FeedbackStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SentimentDistribution {
    #[serde(default)]
    pub positive: i64,
    #[serde(default)]
    pub negative: i64,
    #[serde(default)]
    pub neutral: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SentimentSummary {
    #[serde(default)]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(default)]
    pub positive_percentage: f64,
    #[serde(default)]
    pub negative_percentage: f64,
    #[serde(default)]
    pub average_confidence: f64,
    #[serde(default)]
    pub total_analyzed: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentSummaryResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub summary: Option<SentimentSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub positive: i64,
    #[serde(default)]
    pub negative: i64,
    #[serde(default)]
    pub neutral: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentTrendResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySentiment {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub positive: i64,
    #[serde(default)]
    pub negative: i64,
    #[serde(default)]
    pub neutral: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentByCategoryResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub categories: Vec<CategorySentiment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentFeedbackResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Feedback>,
}

// ==================== Клиентская валидация ====================

// Формы шлют PATCH только со значениями из этих списков.

pub const ROLES: &[&str] = &["user", "admin"];
pub const CAMPAIGN_STATUSES: &[&str] = &["active", "completed", "cancelled"];
pub const DONATION_STATUSES: &[&str] = &["pending", "completed", "failed", "refunded"];
pub const VOLUNTEER_STATUSES: &[&str] = &["applied", "accepted", "rejected", "completed"];

pub fn valid_role(value: &str) -> bool {
    ROLES.contains(&value)
}

pub fn valid_campaign_status(value: &str) -> bool {
    CAMPAIGN_STATUSES.contains(&value)
}

pub fn valid_donation_status(value: &str) -> bool {
    DONATION_STATUSES.contains(&value)
}

pub fn valid_volunteer_status(value: &str) -> bool {
    VOLUNTEER_STATUSES.contains(&value)
}

/// Parse a contributed-hours field. Rejects anything that is not a finite,
/// non-negative number.
pub fn parse_hours(input: &str) -> Result<f64, String> {
    let hours: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Jam kontribusi tidak valid".to_string())?;
    if !hours.is_finite() || hours < 0.0 {
        return Err("Jam kontribusi tidak valid".to_string());
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_allow_list() {
        assert!(valid_role("user"));
        assert!(valid_role("admin"));
        assert!(!valid_role("moderator"));
        assert!(!valid_role("Admin"));
    }

    #[test]
    fn donation_status_allow_list_excludes_cancelled() {
        assert!(valid_donation_status("refunded"));
        assert!(!valid_donation_status("cancelled"));
    }

    #[test]
    fn hours_accepts_fractions() {
        assert_eq!(parse_hours("12.5"), Ok(12.5));
        assert_eq!(parse_hours(" 0 "), Ok(0.0));
    }

    #[test]
    fn hours_rejects_garbage_and_negatives() {
        assert!(parse_hours("abc").is_err());
        assert!(parse_hours("-5").is_err());
        assert!(parse_hours("NaN").is_err());
        assert!(parse_hours("inf").is_err());
        assert!(parse_hours("").is_err());
    }

    #[test]
    fn notification_defaults_unread() {
        let n: Notification = serde_json::from_value(json!({ "id": 2 })).unwrap();
        assert!(!n.is_read);
        assert_eq!(n.title, None);
    }

    #[test]
    fn activity_type_key_is_renamed() {
        let a: Activity =
            serde_json::from_value(json!({ "type": "donation", "title": "Donasi baru" })).unwrap();
        assert_eq!(a.kind, "donation");
    }

    #[test]
    fn feedback_batch_envelopes_tolerate_missing_payloads() {
        let resp: FeedbackStatsResponse =
            serde_json::from_value(json!({ "status": "error" })).unwrap();
        assert_eq!(resp.status, "error");
        assert!(resp.stats.is_none());

        let resp: SentimentTrendResponse =
            serde_json::from_value(json!({ "status": "success" })).unwrap();
        assert!(resp.trend.is_empty());
    }
}
