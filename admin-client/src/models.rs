use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==================== Пользователи и авторизация ====================

/// Admin account as returned by `/admin/check-auth`.
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

/// Envelope shape every mutation endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
}

// ==================== Доменные сущности ====================

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

// Каждый списочный endpoint заворачивает массив в объект
// с ключом по имени сущности; отсутствующий ключ = пустой список.

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

// ==================== Статистика дашборда ====================

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

/// Joined result of the seven dashboard stat endpoints.
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
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
    pub message: Option<String>,
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
    pub message: Option<String>,
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
    pub message: Option<String>,
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
    pub message: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategorySentiment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentFeedbackResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Feedback>,
}

// ==================== Допустимые значения ====================

macro_rules! allow_list_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            pub const ALLOWED: &'static [&'static str] = &[$($text),+];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "'{}' is not one of: {}",
                        other,
                        Self::ALLOWED.join(", ")
                    )),
                }
            }
        }
    };
}

allow_list_enum!(Role {
    User => "user",
    Admin => "admin",
});

allow_list_enum!(CampaignStatus {
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

allow_list_enum!(DonationStatus {
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
    Refunded => "refunded",
});

allow_list_enum!(VolunteerStatus {
    Applied => "applied",
    Accepted => "accepted",
    Rejected => "rejected",
    Completed => "completed",
});

// ==================== Тела PATCH-запросов ====================

#[derive(Debug, Clone, Serialize)]
pub struct RolePatch {
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignStatusPatch {
    pub campaign_status: CampaignStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationStatusPatch {
    pub donation_status: DonationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerPatch {
    pub volunteer_status: VolunteerStatus,
    pub hours_contributed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_with_missing_fields_deserializes_to_defaults() {
        let user: User = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, None);
        assert_eq!(user.email, None);
        assert_eq!(user.role, None);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn post_defaults_likes_to_zero() {
        let post: Post = serde_json::from_value(json!({ "id": 1, "text": "halo" })).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.text.as_deref(), Some("halo"));
    }

    #[test]
    fn list_wrapper_without_key_is_empty() {
        let resp: UsersResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.users.is_empty());

        let resp: DonationsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.donations.is_empty());
    }

    #[test]
    fn volunteer_hours_default_to_zero() {
        let v: Volunteer = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(v.hours_contributed, 0.0);
        assert_eq!(v.volunteer_status, None);
    }

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn unknown_role_is_rejected_with_allowed_list() {
        let err = "moderator".parse::<Role>().unwrap_err();
        assert!(err.contains("user"));
        assert!(err.contains("admin"));
    }

    #[test]
    fn donation_status_rejects_cancelled() {
        // прежний статус 'cancelled' существует в данных, но не в allow-list формы
        assert!("cancelled".parse::<DonationStatus>().is_err());
        assert_eq!(
            "refunded".parse::<DonationStatus>().unwrap(),
            DonationStatus::Refunded
        );
    }

    #[test]
    fn sentiment_summary_defaults() {
        let resp: SentimentSummaryResponse =
            serde_json::from_value(json!({ "status": "success", "summary": {} })).unwrap();
        let summary = resp.summary.unwrap();
        assert_eq!(summary.sentiment_distribution.positive, 0);
        assert_eq!(summary.positive_percentage, 0.0);
    }

    #[test]
    fn patch_bodies_serialize_with_backend_field_names() {
        let body = serde_json::to_value(VolunteerPatch {
            volunteer_status: VolunteerStatus::Accepted,
            hours_contributed: 12.5,
        })
        .unwrap();
        assert_eq!(body, json!({ "volunteer_status": "accepted", "hours_contributed": 12.5 }));

        let body = serde_json::to_value(CampaignStatusPatch {
            campaign_status: CampaignStatus::Completed,
        })
        .unwrap();
        assert_eq!(body, json!({ "campaign_status": "completed" }));
    }
}
