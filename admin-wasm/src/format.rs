use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Current wall-clock time as seen by the browser.
pub fn browser_now() -> NaiveDateTime {
    let ms = js_sys::Date::now();
    DateTime::from_timestamp_millis(ms as i64)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

// Бэкенд отдаёт даты в разнобой: RFC 3339, RFC 2822 (flask jsonify),
// "Y-m-d H:M:S" или просто дату.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Short Indonesian date ("12 Jan 2024"); `-` when absent, the raw string
/// when unparseable.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    match parse_datetime(raw) {
        Some(dt) => {
            use chrono::Datelike;
            format!(
                "{} {} {}",
                dt.day(),
                MONTHS_ID[dt.month0() as usize],
                dt.year()
            )
        }
        None => raw.to_string(),
    }
}

/// Axis label for the trend chart ("12 Jan").
pub fn format_day_month(raw: &str) -> String {
    match parse_datetime(raw) {
        Some(dt) => {
            use chrono::Datelike;
            format!("{} {}", dt.day(), MONTHS_ID[dt.month0() as usize])
        }
        None => raw.to_string(),
    }
}

/// Relative phrasing for the activity feed, falling back to the short date
/// after a week.
pub fn format_relative(raw: Option<&str>, now: NaiveDateTime) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    let Some(then) = parse_datetime(raw) else {
        return raw.to_string();
    };

    let diff = now.signed_duration_since(then);
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Baru saja".to_string();
    }
    if minutes < 60 {
        return format!("{} menit yang lalu", minutes);
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{} jam yang lalu", hours);
    }
    if diff.num_days() < 7 {
        return format!("{} hari yang lalu", diff.num_days());
    }
    format_date(Some(raw))
}

/// Rupiah with dot thousand separators, no fraction ("Rp 45.000.000").
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let mut n = amount.abs().round() as i64;

    let mut groups: Vec<String> = Vec::new();
    loop {
        let group = n % 1000;
        n /= 1000;
        if n > 0 {
            groups.push(format!("{:03}", group));
        } else {
            groups.push(group.to_string());
            break;
        }
    }
    groups.reverse();

    format!(
        "Rp {}{}",
        if negative { "-" } else { "" },
        groups.join(".")
    )
}

/// `★★★☆☆` for a 1–5 rating.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Ellipsis truncation for free-text cells. A string of exactly `max`
/// characters passes through untouched.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Badge modifier for an entity status.
pub fn status_badge(status: &str) -> &'static str {
    match status {
        "active" | "completed" | "accepted" => "success",
        "pending" | "refunded" | "applied" | "ongoing" => "warning",
        "cancelled" | "rejected" | "failed" => "danger",
        _ => "info",
    }
}

/// Badge class and label for a sentiment value; anything unknown reads as
/// neutral.
pub fn sentiment_badge(sentiment: &str) -> (&'static str, &'static str) {
    match sentiment {
        "positive" => ("badge-success", "😊 Positif"),
        "negative" => ("badge-danger", "😟 Negatif"),
        _ => ("badge-neutral", "😐 Netral"),
    }
}

pub fn score_badge_class(score: f64) -> &'static str {
    if score > 0.0 {
        "badge-success"
    } else if score < 0.0 {
        "badge-danger"
    } else {
        "badge-info"
    }
}

/// Signed sentiment score; positive values get an explicit plus.
pub fn format_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{:.2}", score)
    } else {
        format!("{:.2}", score)
    }
}

pub fn activity_color(kind: &str) -> &'static str {
    match kind {
        "user" => "#667eea",
        "post" => "#f5576c",
        "campaign" => "#4facfe",
        "donation" => "#43e97b",
        "comment" => "#f59e0b",
        "volunteer" => "#10b981",
        "event" => "#6366f1",
        _ => "#6b7280",
    }
}

pub fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "user" => "👤",
        "post" => "📝",
        "campaign" => "🎯",
        "donation" => "💰",
        _ => "📌",
    }
}

/// Sentiment-health indicator: label, accent color, emoji.
pub fn health_status(positive_percentage: f64) -> (&'static str, &'static str, &'static str) {
    if positive_percentage >= 70.0 {
        ("Sangat Baik", "#22c55e", "😊")
    } else if positive_percentage >= 50.0 {
        ("Baik", "#84cc16", "🙂")
    } else if positive_percentage >= 30.0 {
        ("Perlu Perhatian", "#f59e0b", "😐")
    } else {
        ("Perlu Perbaikan", "#ef4444", "😟")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn date_formats_in_indonesian() {
        assert_eq!(format_date(Some("2024-01-12T08:30:00")), "12 Jan 2024");
        assert_eq!(format_date(Some("2025-08-03 10:00:00")), "3 Agu 2025");
        assert_eq!(format_date(Some("2024-05-01")), "1 Mei 2024");
        assert_eq!(format_date(Some("Tue, 22 Apr 2025 10:00:00 GMT")), "22 Apr 2025");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn day_month_axis_labels() {
        assert_eq!(format_day_month("2025-08-01"), "1 Agu");
        assert_eq!(format_day_month("2024-12-25T09:00:00"), "25 Des");
    }

    #[test]
    fn relative_time_thresholds() {
        let now = at("2025-08-06 12:00:00");
        assert_eq!(format_relative(Some("2025-08-06 11:59:30"), now), "Baru saja");
        assert_eq!(
            format_relative(Some("2025-08-06 11:15:00"), now),
            "45 menit yang lalu"
        );
        assert_eq!(
            format_relative(Some("2025-08-06 07:00:00"), now),
            "5 jam yang lalu"
        );
        assert_eq!(
            format_relative(Some("2025-08-03 12:00:00"), now),
            "3 hari yang lalu"
        );
        // после недели — обычная дата
        assert_eq!(format_relative(Some("2025-07-20 12:00:00"), now), "20 Jul 2025");
        assert_eq!(format_relative(None, now), "-");
    }

    #[test]
    fn currency_uses_dot_separators() {
        assert_eq!(format_currency(0.0), "Rp 0");
        assert_eq!(format_currency(950.0), "Rp 950");
        assert_eq!(format_currency(45_000_000.0), "Rp 45.000.000");
        assert_eq!(format_currency(1_002.4), "Rp 1.002");
        assert_eq!(format_currency(-5_000.0), "Rp -5.000");
    }

    #[test]
    fn stars_clamp_to_five() {
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(9), "★★★★★");
    }

    #[test]
    fn truncation_boundary_is_exclusive() {
        let exactly_50 = "a".repeat(50);
        assert_eq!(truncate_text(&exactly_50, 50), exactly_50);

        let longer = "b".repeat(51);
        let truncated = truncate_text(&longer, 50);
        assert_eq!(truncated.chars().count(), 53);
        assert!(truncated.ends_with("..."));
        assert!(truncated.starts_with(&"b".repeat(50)));
    }

    #[test]
    fn status_badges_match_the_dashboard_palette() {
        assert_eq!(status_badge("active"), "success");
        assert_eq!(status_badge("accepted"), "success");
        assert_eq!(status_badge("pending"), "warning");
        assert_eq!(status_badge("refunded"), "warning");
        assert_eq!(status_badge("failed"), "danger");
        assert_eq!(status_badge("upcoming"), "info");
        assert_eq!(status_badge("whatever"), "info");
    }

    #[test]
    fn sentiment_score_formatting() {
        assert_eq!(format_score(0.75), "+0.75");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(-0.3), "-0.30");
        assert_eq!(score_badge_class(0.75), "badge-success");
        assert_eq!(score_badge_class(0.0), "badge-info");
        assert_eq!(score_badge_class(-0.3), "badge-danger");
    }

    #[test]
    fn health_thresholds() {
        assert_eq!(health_status(82.0).0, "Sangat Baik");
        assert_eq!(health_status(70.0).0, "Sangat Baik");
        assert_eq!(health_status(55.0).0, "Baik");
        assert_eq!(health_status(30.0).0, "Perlu Perhatian");
        assert_eq!(health_status(10.0).0, "Perlu Perbaikan");
    }
}
