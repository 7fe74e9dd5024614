use crate::models::*;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

// Admin blueprint живёт на /admin (не /api/admin)
const ADMIN_API_BASE: &str = "/admin";
const FEEDBACK_API_BASE: &str = "/api/feedback";

// Авторизация — сессионная кука, браузер шлёт её сам (same-origin).

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    if !(200..300).contains(&status) {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", status, text));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

// Мутации: сервер всегда отвечает конвертом {status, message?};
// всё, что не "success", трактуем как отказ с текстом для пользователя.
async fn check_envelope(response: Response) -> Result<(), String> {
    let body: MutationResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if body.status == "success" {
        Ok(())
    } else {
        Err(body
            .message
            .unwrap_or_else(|| "Permintaan ditolak server".to_string()))
    }
}

async fn delete(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_envelope(response).await
}

async fn patch_json(url: &str, body: &impl serde::Serialize) -> Result<(), String> {
    let response = Request::patch(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_envelope(response).await
}

// ==================== Авторизация ====================

pub async fn check_auth() -> Result<Option<AdminUser>, String> {
    let url = format!("{}/check-auth", ADMIN_API_BASE);
    let data: CheckAuthResponse = get_json(&url).await?;
    Ok(data.user)
}

pub async fn login(email: &str, password: &str) -> Result<(), String> {
    let url = format!("{}/login", ADMIN_API_BASE);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let ok = response.ok();
    let data: MutationResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if ok && data.status == "success" {
        Ok(())
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Email atau password salah".to_string()))
    }
}

pub async fn logout() -> Result<(), String> {
    let url = format!("{}/logout", ADMIN_API_BASE);
    Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    Ok(())
}

// ==================== Списки ====================

pub async fn users() -> Result<Vec<User>, String> {
    let data: UsersResponse = get_json(&format!("{}/users", ADMIN_API_BASE)).await?;
    Ok(data.users)
}

pub async fn posts() -> Result<Vec<Post>, String> {
    let data: PostsResponse = get_json(&format!("{}/posts", ADMIN_API_BASE)).await?;
    Ok(data.posts)
}

pub async fn campaigns() -> Result<Vec<Campaign>, String> {
    let data: CampaignsResponse = get_json(&format!("{}/campaigns", ADMIN_API_BASE)).await?;
    Ok(data.campaigns)
}

pub async fn donations() -> Result<Vec<Donation>, String> {
    let data: DonationsResponse = get_json(&format!("{}/donations", ADMIN_API_BASE)).await?;
    Ok(data.donations)
}

pub async fn comments() -> Result<Vec<Comment>, String> {
    let data: CommentsResponse = get_json(&format!("{}/comments", ADMIN_API_BASE)).await?;
    Ok(data.comments)
}

pub async fn volunteers() -> Result<Vec<Volunteer>, String> {
    let data: VolunteersResponse = get_json(&format!("{}/volunteers", ADMIN_API_BASE)).await?;
    Ok(data.volunteers)
}

pub async fn notifications() -> Result<Vec<Notification>, String> {
    let data: NotificationsResponse =
        get_json(&format!("{}/notifications", ADMIN_API_BASE)).await?;
    Ok(data.notifications)
}

pub async fn top_posts() -> Result<Vec<TopPost>, String> {
    let data: TopPostsResponse =
        get_json(&format!("{}/likes/top-posts", ADMIN_API_BASE)).await?;
    Ok(data.posts)
}

// ==================== Статистика дашборда ====================

async fn stat_count(name: &str) -> Result<i64, String> {
    let data: CountResponse = get_json(&format!("{}/stats/{}", ADMIN_API_BASE, name)).await?;
    Ok(data.count)
}

async fn donation_total() -> Result<f64, String> {
    let data: TotalResponse = get_json(&format!("{}/stats/donations", ADMIN_API_BASE)).await?;
    Ok(data.total)
}

/// Seven stat endpoints, fetched in parallel. One failure fails the batch:
/// the dashboard counters update all-or-nothing.
pub async fn dashboard_totals() -> Result<DashboardTotals, String> {
    let (users, posts, campaigns, donation_total, comments, volunteers, unread) = futures::try_join!(
        stat_count("users"),
        stat_count("posts"),
        stat_count("campaigns"),
        donation_total(),
        stat_count("comments"),
        stat_count("volunteers"),
        stat_count("notifications-unread"),
    )?;

    Ok(DashboardTotals {
        users,
        posts,
        campaigns,
        donation_total,
        comments,
        volunteers,
        unread_notifications: unread,
    })
}

pub async fn recent_activity() -> Result<Vec<Activity>, String> {
    let data: RecentActivityResponse =
        get_json(&format!("{}/recent-activity", ADMIN_API_BASE)).await?;
    Ok(data.activities)
}

pub async fn monthly_stats() -> Result<serde_json::Map<String, serde_json::Value>, String> {
    let data: MonthlyStatsResponse =
        get_json(&format!("{}/monthly-stats", ADMIN_API_BASE)).await?;
    Ok(data.stats)
}

// ==================== Мутации ====================

pub async fn update_user_role(id: i64, role: &str) -> Result<(), String> {
    let url = format!("{}/users/{}", ADMIN_API_BASE, id);
    patch_json(&url, &serde_json::json!({ "role": role })).await
}

pub async fn delete_user(id: i64) -> Result<(), String> {
    delete(&format!("{}/users/{}", ADMIN_API_BASE, id)).await
}

pub async fn delete_post(id: i64) -> Result<(), String> {
    delete(&format!("{}/posts/{}", ADMIN_API_BASE, id)).await
}

pub async fn update_campaign_status(id: i64, status: &str) -> Result<(), String> {
    let url = format!("{}/campaigns/{}", ADMIN_API_BASE, id);
    patch_json(&url, &serde_json::json!({ "campaign_status": status })).await
}

pub async fn update_donation_status(id: i64, status: &str) -> Result<(), String> {
    let url = format!("{}/donations/{}", ADMIN_API_BASE, id);
    patch_json(&url, &serde_json::json!({ "donation_status": status })).await
}

pub async fn delete_comment(id: i64) -> Result<(), String> {
    delete(&format!("{}/comments/{}", ADMIN_API_BASE, id)).await
}

pub async fn update_volunteer(id: i64, status: &str, hours: f64) -> Result<(), String> {
    let url = format!("{}/volunteers/{}", ADMIN_API_BASE, id);
    patch_json(
        &url,
        &serde_json::json!({ "volunteer_status": status, "hours_contributed": hours }),
    )
    .await
}

pub async fn delete_notification(id: i64) -> Result<(), String> {
    delete(&format!("{}/notifications/{}", ADMIN_API_BASE, id)).await
}

// ==================== Feedback / сентимент ====================

/// Result of the five parallel feedback requests. The join is all-or-nothing
/// at the transport level; each payload still carries its own envelope and is
/// gated separately by the caller.
pub struct FeedbackBatch {
    pub stats: FeedbackStatsResponse,
    pub summary: SentimentSummaryResponse,
    pub trend: SentimentTrendResponse,
    pub categories: SentimentByCategoryResponse,
    pub recent: RecentFeedbackResponse,
}

pub async fn feedback_batch(days: u32) -> Result<FeedbackBatch, String> {
    let stats_url = format!("{}/stats", FEEDBACK_API_BASE);
    let summary_url = format!("{}/sentiment/all?limit=100", FEEDBACK_API_BASE);
    let trend_url = format!("{}/sentiment/trend?days={}", FEEDBACK_API_BASE, days);
    let categories_url = format!("{}/sentiment/by-category", FEEDBACK_API_BASE);
    let recent_url = format!("{}/recent?limit=20", FEEDBACK_API_BASE);
    let (stats, summary, trend, categories, recent) = futures::try_join!(
        get_json::<FeedbackStatsResponse>(&stats_url),
        get_json::<SentimentSummaryResponse>(&summary_url),
        get_json::<SentimentTrendResponse>(&trend_url),
        get_json::<SentimentByCategoryResponse>(&categories_url),
        get_json::<RecentFeedbackResponse>(&recent_url),
    )?;

    Ok(FeedbackBatch {
        stats,
        summary,
        trend,
        categories,
        recent,
    })
}
