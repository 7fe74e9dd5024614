use crate::error::AdminClientError;
use crate::models::*;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const SESSION_COOKIE: &str = "session";

/// Native client for the `/admin` and `/api/feedback` REST surfaces.
///
/// Authentication is a server-set session cookie: `login()` captures it from
/// the response and every later request replays it.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    session: Option<String>,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            session: None,
        }
    }

    /// Replace the session cookie value (e.g. one restored from disk).
    pub fn set_session(&mut self, session: String) {
        self.session = Some(session);
    }

    pub fn session(&self) -> Option<&String> {
        self.session.as_ref()
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn add_session_cookie(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(session) = &self.session {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, session));
        }
        request
    }

    // ==================== Авторизация ====================

    /// `POST /admin/login`. On success the session cookie is kept for all
    /// later calls.
    pub async fn login(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<MutationResponse, AdminClientError> {
        let req = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        tracing::debug!("Login called for email: {}", req.email);

        let url = self.url("/admin/login");
        let response = self.client.post(&url).json(&req).send().await?;

        // Кука выставляется до чтения тела
        if let Some(cookie) = extract_session_cookie(&response) {
            self.session = Some(cookie);
        }

        let status = response.status();
        let body: MutationResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return Err(AdminClientError::SerializationError(format!(
                    "login response: {}",
                    e
                )))
            }
        };

        if status.is_success() && body.status == "success" {
            Ok(body)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.session = None;
            Err(AdminClientError::Unauthorized(
                body.message.unwrap_or_else(|| "login rejected".to_string()),
            ))
        } else {
            Err(AdminClientError::ApiFailure(
                body.message.unwrap_or_else(|| "login failed".to_string()),
            ))
        }
    }

    /// `GET /admin/check-auth`. Non-2xx means the session is gone.
    pub async fn check_auth(&self) -> Result<CheckAuthResponse, AdminClientError> {
        self.get_json("/admin/check-auth").await
    }

    /// `POST /admin/logout`. The local session is dropped regardless of the
    /// server's answer.
    pub async fn logout(&mut self) -> Result<(), AdminClientError> {
        let url = self.url("/admin/logout");
        let result = self
            .add_session_cookie(self.client.post(&url))
            .send()
            .await;
        self.session = None;
        result?;
        Ok(())
    }

    // ==================== Чтение ====================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminClientError> {
        let url = self.url(path);
        let response = self.add_session_cookie(self.client.get(&url)).send().await?;
        let status = response.status();

        match status {
            StatusCode::OK => Ok(response.json::<T>().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let error_text = response.text().await?;
                Err(AdminClientError::Unauthorized(error_text))
            }
            StatusCode::NOT_FOUND => Err(AdminClientError::NotFound),
            _ => {
                let error_text = response.text().await?;
                Err(AdminClientError::TransportError(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }

    pub async fn users(&self) -> Result<Vec<User>, AdminClientError> {
        let resp: UsersResponse = self.get_json("/admin/users").await?;
        Ok(resp.users)
    }

    pub async fn posts(&self) -> Result<Vec<Post>, AdminClientError> {
        let resp: PostsResponse = self.get_json("/admin/posts").await?;
        Ok(resp.posts)
    }

    pub async fn campaigns(&self) -> Result<Vec<Campaign>, AdminClientError> {
        let resp: CampaignsResponse = self.get_json("/admin/campaigns").await?;
        Ok(resp.campaigns)
    }

    pub async fn donations(&self) -> Result<Vec<Donation>, AdminClientError> {
        let resp: DonationsResponse = self.get_json("/admin/donations").await?;
        Ok(resp.donations)
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, AdminClientError> {
        let resp: CommentsResponse = self.get_json("/admin/comments").await?;
        Ok(resp.comments)
    }

    pub async fn volunteers(&self) -> Result<Vec<Volunteer>, AdminClientError> {
        let resp: VolunteersResponse = self.get_json("/admin/volunteers").await?;
        Ok(resp.volunteers)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, AdminClientError> {
        let resp: NotificationsResponse = self.get_json("/admin/notifications").await?;
        Ok(resp.notifications)
    }

    pub async fn top_posts(&self) -> Result<Vec<TopPost>, AdminClientError> {
        let resp: TopPostsResponse = self.get_json("/admin/likes/top-posts").await?;
        Ok(resp.posts)
    }

    // ==================== Статистика дашборда ====================

    async fn stat_count(&self, name: &str) -> Result<i64, AdminClientError> {
        let resp: CountResponse = self.get_json(&format!("/admin/stats/{}", name)).await?;
        Ok(resp.count)
    }

    pub async fn donation_total(&self) -> Result<f64, AdminClientError> {
        let resp: TotalResponse = self.get_json("/admin/stats/donations").await?;
        Ok(resp.total)
    }

    /// The seven dashboard counters, fetched concurrently. Any single failure
    /// fails the whole aggregate; no partial result is returned.
    pub async fn dashboard_totals(&self) -> Result<DashboardTotals, AdminClientError> {
        let (users, posts, campaigns, donation_total, comments, volunteers, unread) = tokio::try_join!(
            self.stat_count("users"),
            self.stat_count("posts"),
            self.stat_count("campaigns"),
            self.donation_total(),
            self.stat_count("comments"),
            self.stat_count("volunteers"),
            self.stat_count("notifications-unread"),
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

    pub async fn recent_activity(&self) -> Result<Vec<Activity>, AdminClientError> {
        let resp: RecentActivityResponse = self.get_json("/admin/recent-activity").await?;
        Ok(resp.activities)
    }

    pub async fn monthly_stats(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, AdminClientError> {
        let resp: MonthlyStatsResponse = self.get_json("/admin/monthly-stats").await?;
        Ok(resp.stats)
    }

    // ==================== Мутации ====================

    async fn send_mutation(&self, request: RequestBuilder) -> Result<(), AdminClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let error_text = response.text().await?;
            return Err(AdminClientError::Unauthorized(error_text));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(AdminClientError::NotFound);
        }

        // Любой ответ без конверта {status: "success"} считается отказом.
        let text = response.text().await?;
        let body: MutationResponse = serde_json::from_str(&text).unwrap_or(MutationResponse {
            status: String::new(),
            message: Some(format!("HTTP {}: {}", status, text)),
        });

        if body.status == "success" {
            Ok(())
        } else {
            Err(AdminClientError::ApiFailure(
                body.message
                    .unwrap_or_else(|| format!("HTTP {}: request rejected", status)),
            ))
        }
    }

    async fn patch_json(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<(), AdminClientError> {
        let url = self.url(path);
        let request = self.add_session_cookie(self.client.patch(&url)).json(body);
        self.send_mutation(request).await
    }

    async fn delete(&self, path: &str) -> Result<(), AdminClientError> {
        let url = self.url(path);
        let request = self.add_session_cookie(self.client.delete(&url));
        self.send_mutation(request).await
    }

    pub async fn update_user_role(&self, id: i64, role: Role) -> Result<(), AdminClientError> {
        tracing::debug!("Updating role of user #{} to {}", id, role);
        self.patch_json(&format!("/admin/users/{}", id), &RolePatch { role })
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AdminClientError> {
        self.delete(&format!("/admin/users/{}", id)).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), AdminClientError> {
        self.delete(&format!("/admin/posts/{}", id)).await
    }

    pub async fn update_campaign_status(
        &self,
        id: i64,
        status: CampaignStatus,
    ) -> Result<(), AdminClientError> {
        self.patch_json(
            &format!("/admin/campaigns/{}", id),
            &CampaignStatusPatch {
                campaign_status: status,
            },
        )
        .await
    }

    pub async fn update_donation_status(
        &self,
        id: i64,
        status: DonationStatus,
    ) -> Result<(), AdminClientError> {
        self.patch_json(
            &format!("/admin/donations/{}", id),
            &DonationStatusPatch {
                donation_status: status,
            },
        )
        .await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), AdminClientError> {
        self.delete(&format!("/admin/comments/{}", id)).await
    }

    /// `PATCH /admin/volunteers/{id}`. Hours are validated locally; nothing is
    /// sent for a negative or non-finite value.
    pub async fn update_volunteer(
        &self,
        id: i64,
        status: VolunteerStatus,
        hours_contributed: f64,
    ) -> Result<(), AdminClientError> {
        if !hours_contributed.is_finite() || hours_contributed < 0.0 {
            return Err(AdminClientError::InvalidInput(format!(
                "hours_contributed must be a non-negative number, got {}",
                hours_contributed
            )));
        }

        self.patch_json(
            &format!("/admin/volunteers/{}", id),
            &VolunteerPatch {
                volunteer_status: status,
                hours_contributed,
            },
        )
        .await
    }

    pub async fn delete_notification(&self, id: i64) -> Result<(), AdminClientError> {
        self.delete(&format!("/admin/notifications/{}", id)).await
    }

    // ==================== Feedback / сентимент ====================

    fn unwrap_envelope<T>(
        status: String,
        message: Option<String>,
        payload: Option<T>,
    ) -> Result<T, AdminClientError> {
        if status != "success" {
            return Err(AdminClientError::ApiFailure(
                message.unwrap_or_else(|| format!("feedback API returned status '{}'", status)),
            ));
        }
        payload.ok_or_else(|| {
            AdminClientError::SerializationError("feedback envelope without payload".to_string())
        })
    }

    pub async fn feedback_stats(&self) -> Result<FeedbackStats, AdminClientError> {
        let resp: FeedbackStatsResponse = self.get_json("/api/feedback/stats").await?;
        Self::unwrap_envelope(resp.status, resp.message, resp.stats)
    }

    pub async fn sentiment_summary(
        &self,
        limit: u32,
    ) -> Result<SentimentSummary, AdminClientError> {
        let resp: SentimentSummaryResponse = self
            .get_json(&format!("/api/feedback/sentiment/all?limit={}", limit))
            .await?;
        Self::unwrap_envelope(resp.status, resp.message, resp.summary)
    }

    pub async fn sentiment_trend(&self, days: u32) -> Result<Vec<TrendPoint>, AdminClientError> {
        let resp: SentimentTrendResponse = self
            .get_json(&format!("/api/feedback/sentiment/trend?days={}", days))
            .await?;
        Self::unwrap_envelope(resp.status, resp.message, Some(resp.trend))
    }

    pub async fn sentiment_by_category(
        &self,
    ) -> Result<Vec<CategorySentiment>, AdminClientError> {
        let resp: SentimentByCategoryResponse =
            self.get_json("/api/feedback/sentiment/by-category").await?;
        Self::unwrap_envelope(resp.status, resp.message, Some(resp.categories))
    }

    pub async fn recent_feedback(&self, limit: u32) -> Result<Vec<Feedback>, AdminClientError> {
        let resp: RecentFeedbackResponse = self
            .get_json(&format!("/api/feedback/recent?limit={}", limit))
            .await?;
        Self::unwrap_envelope(resp.status, resp.message, Some(resp.data))
    }
}

fn extract_session_cookie(response: &reqwest::Response) -> Option<String> {
    for value in response.headers().get_all(SET_COOKIE) {
        let raw = value.to_str().ok()?;
        let pair = raw.split(';').next()?.trim();
        if let Some(rest) = pair.strip_prefix(SESSION_COOKIE) {
            if let Some(cookie) = rest.strip_prefix('=') {
                return Some(cookie.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = AdminClient::new("http://localhost:5000/");
        assert_eq!(
            client.url("/admin/users"),
            "http://localhost:5000/admin/users"
        );
        assert_eq!(client.url("admin/users"), "http://localhost:5000/admin/users");
    }

    #[test]
    fn envelope_failure_carries_server_message() {
        let err = AdminClient::unwrap_envelope::<FeedbackStats>(
            "error".to_string(),
            Some("database offline".to_string()),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, AdminClientError::ApiFailure(msg) if msg == "database offline"));
    }

    #[test]
    fn envelope_success_without_payload_is_an_error() {
        let err = AdminClient::unwrap_envelope::<FeedbackStats>("success".to_string(), None, None)
            .unwrap_err();
        assert!(matches!(err, AdminClientError::SerializationError(_)));
    }

    #[tokio::test]
    async fn negative_hours_are_rejected_before_any_request() {
        // base_url намеренно не резолвится: до сети дойти не должны
        let client = AdminClient::new("http://invalid.invalid");
        let err = client
            .update_volunteer(1, VolunteerStatus::Accepted, -5.0)
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());

        let err = client
            .update_volunteer(1, VolunteerStatus::Accepted, f64::NAN)
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
