//! Pure mapping from wire models to display rows. Every fallback the tables
//! promise (`Unknown`, `-`, `0`) is applied here, so the view layer only ever
//! sees ready-to-print strings.

use crate::format::*;
use crate::models::*;
use chrono::NaiveDateTime;

fn or_unknown(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "Unknown".to_string())
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub role_badge: &'static str,
    pub created: String,
}

pub fn user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| {
            let role = u.role.clone().unwrap_or_else(|| "user".to_string());
            UserRow {
                id: u.id,
                name: or_unknown(&u.name),
                email: or_dash(&u.email),
                role_badge: if role == "admin" {
                    "badge-admin"
                } else {
                    "badge-user"
                },
                role,
                created: format_date(u.created_at.as_deref()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub likes: i64,
    pub created: String,
}

pub fn post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            id: p.id,
            author: or_unknown(&p.user_name),
            text: or_dash(&p.text),
            likes: p.likes,
            created: format_date(p.created_at.as_deref()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRow {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub target: String,
    pub current: String,
    pub status: String,
    pub badge: &'static str,
}

pub fn campaign_rows(campaigns: &[Campaign]) -> Vec<CampaignRow> {
    campaigns
        .iter()
        .map(|c| {
            let status = c
                .campaign_status
                .clone()
                .unwrap_or_else(|| "active".to_string());
            CampaignRow {
                id: c.id,
                title: c.title.clone(),
                category: or_dash(&c.category),
                target: format_currency(c.target_amount),
                current: format_currency(c.current_amount),
                badge: status_badge(&status),
                status,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonationRow {
    pub id: i64,
    pub donor: String,
    pub campaign: String,
    pub amount: String,
    pub created: String,
    pub status: String,
    pub badge: &'static str,
}

pub fn donation_rows(donations: &[Donation]) -> Vec<DonationRow> {
    donations
        .iter()
        .map(|d| {
            let status = d.status.clone().unwrap_or_else(|| "pending".to_string());
            DonationRow {
                id: d.id,
                donor: or_unknown(&d.user_name),
                campaign: or_dash(&d.campaign_title),
                amount: format_currency(d.amount),
                created: format_date(d.created_at.as_deref()),
                badge: status_badge(&status),
                status,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub text: String,
    pub created: String,
}

pub fn comment_rows(comments: &[Comment]) -> Vec<CommentRow> {
    comments
        .iter()
        .map(|c| CommentRow {
            id: c.id,
            post_id: c.post_id,
            author: or_unknown(&c.user_name),
            text: or_dash(&c.text),
            created: format_date(c.created_at.as_deref()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerRow {
    pub id: i64,
    pub campaign: String,
    pub name: String,
    pub status: String,
    pub badge: &'static str,
    pub hours: f64,
    pub created: String,
}

pub fn volunteer_rows(volunteers: &[Volunteer]) -> Vec<VolunteerRow> {
    volunteers
        .iter()
        .map(|v| {
            let status = v
                .volunteer_status
                .clone()
                .unwrap_or_else(|| "applied".to_string());
            VolunteerRow {
                id: v.id,
                campaign: or_dash(&v.campaign_title),
                name: or_unknown(&v.user_name),
                badge: status_badge(&status),
                status,
                hours: v.hours_contributed,
                created: format_date(v.created_at.as_deref()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRow {
    pub id: i64,
    pub user: String,
    pub title: String,
    pub kind: String,
    pub read_badge: &'static str,
    pub read_label: &'static str,
    pub created: String,
}

pub fn notification_rows(notifications: &[Notification]) -> Vec<NotificationRow> {
    notifications
        .iter()
        .map(|n| NotificationRow {
            id: n.id,
            user: or_unknown(&n.user_name),
            title: or_dash(&n.title),
            kind: or_dash(&n.notification_type),
            read_badge: if n.is_read {
                "badge-success"
            } else {
                "badge-warning"
            },
            read_label: if n.is_read { "read" } else { "unread" },
            created: format_date(n.created_at.as_deref()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopPostRow {
    pub post_id: i64,
    pub author: String,
    pub text: String,
    pub likes: i64,
}

pub fn top_post_rows(posts: &[TopPost]) -> Vec<TopPostRow> {
    posts
        .iter()
        .map(|p| TopPostRow {
            post_id: p.post_id,
            author: or_unknown(&p.user_name),
            text: or_dash(&p.text),
            likes: p.likes_count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub icon: &'static str,
    pub color: &'static str,
    pub title: String,
    pub time: String,
}

pub fn activity_rows(activities: &[Activity], now: NaiveDateTime) -> Vec<ActivityRow> {
    activities
        .iter()
        .map(|a| ActivityRow {
            icon: activity_icon(&a.kind),
            color: activity_color(&a.kind),
            title: a.title.clone(),
            time: format_relative(a.created_at.as_deref(), now),
        })
        .collect()
}

/// Monthly stat rows; values under a "Donasi" label are rendered as currency.
pub fn monthly_rows(stats: &serde_json::Map<String, serde_json::Value>) -> Vec<(String, String)> {
    stats
        .iter()
        .map(|(label, value)| {
            let rendered = match value.as_f64() {
                Some(n) if label.contains("Donasi") => format_currency(n),
                _ => match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            };
            (label.clone(), rendered)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub id: i64,
    pub user: String,
    pub category: String,
    pub stars: String,
    pub message: String,
    pub full_message: String,
    pub sentiment_badge: &'static str,
    pub sentiment_label: &'static str,
    pub score: String,
    pub score_badge: &'static str,
    pub created: String,
}

pub fn feedback_rows(feedbacks: &[Feedback]) -> Vec<FeedbackRow> {
    feedbacks
        .iter()
        .map(|f| {
            let full_message = f.message.clone().unwrap_or_default();
            let (badge, label) = sentiment_badge(f.sentiment.as_deref().unwrap_or("neutral"));
            FeedbackRow {
                id: f.id,
                user: or_unknown(&f.user_name),
                category: or_dash(&f.category),
                stars: rating_stars(f.rating),
                message: if full_message.is_empty() {
                    "-".to_string()
                } else {
                    truncate_text(&full_message, 50)
                },
                full_message,
                sentiment_badge: badge,
                sentiment_label: label,
                score: format_score(f.sentiment_score),
                score_badge: score_badge_class(f.sentiment_score),
                created: format_date(f.created_at.as_deref()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_row_per_item() {
        let users: Vec<User> = (1..=4)
            .map(|id| User {
                id,
                name: Some(format!("user-{}", id)),
                email: None,
                role: None,
                created_at: None,
            })
            .collect();
        assert_eq!(user_rows(&users).len(), 4);
        assert!(user_rows(&[]).is_empty());
    }

    #[test]
    fn user_fallbacks() {
        let rows = user_rows(&[User {
            id: 1,
            name: None,
            email: None,
            role: None,
            created_at: None,
        }]);
        assert_eq!(rows[0].name, "Unknown");
        assert_eq!(rows[0].email, "-");
        assert_eq!(rows[0].role, "user");
        assert_eq!(rows[0].role_badge, "badge-user");
        assert_eq!(rows[0].created, "-");
    }

    #[test]
    fn admin_gets_the_admin_badge() {
        let rows = user_rows(&[User {
            id: 1,
            name: Some("Tia".into()),
            email: Some("tia@ruanghijau.id".into()),
            role: Some("admin".into()),
            created_at: Some("2024-03-09T10:00:00".into()),
        }]);
        assert_eq!(rows[0].role_badge, "badge-admin");
        assert_eq!(rows[0].created, "9 Mar 2024");
    }

    #[test]
    fn post_and_volunteer_fallbacks() {
        let rows = post_rows(&[Post {
            id: 2,
            user_name: None,
            text: None,
            likes: 0,
            created_at: None,
        }]);
        assert_eq!(rows[0].author, "Unknown");
        assert_eq!(rows[0].text, "-");
        assert_eq!(rows[0].likes, 0);

        let rows = volunteer_rows(&[Volunteer {
            id: 3,
            campaign_title: None,
            user_name: None,
            volunteer_status: None,
            hours_contributed: 0.0,
            created_at: None,
        }]);
        assert_eq!(rows[0].status, "applied");
        assert_eq!(rows[0].badge, "warning");
        assert_eq!(rows[0].hours, 0.0);
    }

    #[test]
    fn donation_defaults_to_pending() {
        let rows = donation_rows(&[Donation {
            id: 1,
            user_name: Some("Budi".into()),
            campaign_title: None,
            amount: 150_000.0,
            status: None,
            created_at: None,
        }]);
        assert_eq!(rows[0].status, "pending");
        assert_eq!(rows[0].badge, "warning");
        assert_eq!(rows[0].amount, "Rp 150.000");
        assert_eq!(rows[0].campaign, "-");
    }

    #[test]
    fn monthly_donation_labels_are_currency() {
        let mut stats = serde_json::Map::new();
        stats.insert("Pengguna Baru".to_string(), json!(42));
        stats.insert("Total Donasi Bulan Ini".to_string(), json!(45_000_000));

        let rows = monthly_rows(&stats);
        let find = |label: &str| {
            rows.iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(find("Pengguna Baru"), "42");
        assert_eq!(find("Total Donasi Bulan Ini"), "Rp 45.000.000");
    }

    #[test]
    fn feedback_row_truncates_and_badges() {
        let long = "x".repeat(80);
        let rows = feedback_rows(&[Feedback {
            id: 9,
            user_name: None,
            category: None,
            rating: 4,
            message: Some(long.clone()),
            sentiment: Some("negative".into()),
            sentiment_score: -0.42,
            created_at: None,
        }]);
        let row = &rows[0];
        assert_eq!(row.user, "Unknown");
        assert_eq!(row.category, "-");
        assert_eq!(row.stars, "★★★★☆");
        assert_eq!(row.message.chars().count(), 53);
        assert!(row.message.ends_with("..."));
        assert_eq!(row.full_message, long);
        assert_eq!(row.sentiment_label, "😟 Negatif");
        assert_eq!(row.score, "-0.42");
        assert_eq!(row.score_badge, "badge-danger");
    }

    #[test]
    fn feedback_message_of_exactly_fifty_chars_is_kept() {
        let exact = "y".repeat(50);
        let rows = feedback_rows(&[Feedback {
            id: 1,
            user_name: None,
            category: None,
            rating: 5,
            message: Some(exact.clone()),
            sentiment: None,
            sentiment_score: 0.0,
            created_at: None,
        }]);
        assert_eq!(rows[0].message, exact);
        assert_eq!(rows[0].sentiment_label, "😐 Netral");
        assert_eq!(rows[0].score, "0.00");
    }

    #[test]
    fn activity_rows_use_relative_time() {
        let now = chrono::NaiveDateTime::parse_from_str("2025-08-06 12:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let rows = activity_rows(
            &[Activity {
                kind: "donation".to_string(),
                title: "Donasi baru Rp 50.000".to_string(),
                created_at: Some("2025-08-06 11:30:00".to_string()),
            }],
            now,
        );
        assert_eq!(rows[0].icon, "💰");
        assert_eq!(rows[0].time, "30 menit yang lalu");
    }
}
