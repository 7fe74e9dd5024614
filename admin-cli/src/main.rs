use admin_client::{
    AdminClient, CampaignStatus, DonationStatus, Role, VolunteerStatus,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Базовый URL сервера (или RUANGHIJAU_SERVER)
    #[arg(short, long)]
    server: Option<String>,

    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Пропустить подтверждение для разрушающих команд
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Войти и сохранить сессионную куку
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Завершить сессию на сервере и удалить куку
    Logout,

    /// Проверить сохранённую сессию
    Status,

    /// Семь счётчиков дашборда
    Stats,

    /// Лента последних событий
    Activity,

    /// Статистика текущего месяца
    Monthly,

    Users {
        #[command(subcommand)]
        command: UsersCmd,
    },

    Posts {
        #[command(subcommand)]
        command: PostsCmd,
    },

    Campaigns {
        #[command(subcommand)]
        command: CampaignsCmd,
    },

    Donations {
        #[command(subcommand)]
        command: DonationsCmd,
    },

    Comments {
        #[command(subcommand)]
        command: CommentsCmd,
    },

    Volunteers {
        #[command(subcommand)]
        command: VolunteersCmd,
    },

    Notifications {
        #[command(subcommand)]
        command: NotificationsCmd,
    },

    /// Посты с наибольшим числом лайков
    Likes,

    Feedback {
        #[command(subcommand)]
        command: FeedbackCmd,
    },
}

#[derive(Subcommand)]
enum UsersCmd {
    List,
    SetRole {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        role: Role,
    },
    Delete {
        #[arg(short, long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum PostsCmd {
    List,
    Delete {
        #[arg(short, long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum CampaignsCmd {
    List,
    SetStatus {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        status: CampaignStatus,
    },
}

#[derive(Subcommand)]
enum DonationsCmd {
    List,
    SetStatus {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        status: DonationStatus,
    },
}

#[derive(Subcommand)]
enum CommentsCmd {
    List,
    Delete {
        #[arg(short, long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum VolunteersCmd {
    List,
    Update {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        status: VolunteerStatus,

        #[arg(long)]
        hours: f64,
    },
}

#[derive(Subcommand)]
enum NotificationsCmd {
    List,
    Delete {
        #[arg(short, long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum FeedbackCmd {
    Stats,
    Summary,
    Trend {
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
    Categories,
    Recent {
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
}

struct SessionManager {
    session_path: PathBuf,
}

impl SessionManager {
    fn new(custom_path: Option<PathBuf>) -> Result<Self> {
        let session_path = match custom_path {
            Some(path) => path,
            None => {
                let home = dirs::home_dir().context("Failed to get home directory")?;
                home.join(".ruanghijau_session")
            }
        };

        Ok(Self { session_path })
    }

    fn save_session(&self, session: &str) -> Result<()> {
        fs::write(&self.session_path, session)
            .with_context(|| format!("Failed to save session to {:?}", self.session_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms)?;
        }

        println!("✓ Session saved to {:?}", self.session_path);
        Ok(())
    }

    fn load_session(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.session_path) {
            Ok(session) => {
                let session = session.trim().to_string();
                if !session.is_empty() {
                    Ok(Some(session))
                } else {
                    Ok(None)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("Failed to read session file"),
        }
    }

    fn clear_session(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path).with_context(|| {
                format!("Failed to remove session file {:?}", self.session_path)
            })?;
            println!("✓ Session file removed");
        }
        Ok(())
    }
}

fn confirm(skip: bool, prompt: &str) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn format_idr(amount: f64) -> String {
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
        if amount < 0.0 { "-" } else { "" },
        groups.join(".")
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    println!("{} {}", "❌".red(), e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("RUANGHIJAU_SERVER").ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    println!("🔌 Connecting to: {}", server);

    let mut client = AdminClient::new(server);

    let session_manager = SessionManager::new(cli.session_file)?;
    if let Some(session) = session_manager.load_session()? {
        client.set_session(session);
    }

    match &cli.command {
        Commands::Login { email, password } => {
            println!("🔑 Logging in as: {}", email);

            match client.login(email, password).await {
                Ok(_) => {
                    println!("✅ Login successful!");
                    match client.session() {
                        Some(session) => session_manager.save_session(session)?,
                        None => fail("server did not set a session cookie"),
                    }
                }
                Err(e) => fail(format!("Login failed: {}", e)),
            }
        }

        Commands::Logout => {
            if let Err(e) = client.logout().await {
                println!("⚠️ Logout request failed: {}", e);
            }
            session_manager.clear_session()?;
            println!("✅ Logged out");
        }

        Commands::Status => match session_manager.load_session()? {
            Some(_) => match client.check_auth().await {
                Ok(response) => {
                    println!("✅ Session is active");
                    if let Some(user) = response.user {
                        println!("   Name:  {}", user.name.as_deref().unwrap_or("Admin"));
                        println!("   Email: {}", user.email.as_deref().unwrap_or("-"));
                        println!("   Role:  {}", user.role.as_deref().unwrap_or("-"));
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    fail("Session expired. Please login again");
                }
                Err(e) => fail(e),
            },
            None => {
                fail("No session found. Please login first: admin-cli login --email <email> --password <password>");
            }
        },

        Commands::Stats => match client.dashboard_totals().await {
            Ok(totals) => {
                println!("{}", "Dashboard".bold());
                println!("   Pengguna:           {}", totals.users);
                println!("   Postingan:          {}", totals.posts);
                println!("   Kampanye:           {}", totals.campaigns);
                println!("   Donasi:             {}", format_idr(totals.donation_total));
                println!("   Komentar:           {}", totals.comments);
                println!("   Relawan:            {}", totals.volunteers);
                println!("   Notif belum dibaca: {}", totals.unread_notifications);
            }
            Err(e) => fail(format!("Failed to load dashboard stats: {}", e)),
        },

        Commands::Activity => match client.recent_activity().await {
            Ok(activities) => {
                if activities.is_empty() {
                    println!("   Tidak ada aktivitas terbaru");
                } else {
                    for activity in &activities {
                        println!(
                            "   [{}] {} ({})",
                            activity.kind,
                            activity.title,
                            activity.created_at.as_deref().unwrap_or("-")
                        );
                    }
                }
            }
            Err(e) => fail(format!("Failed to load activity: {}", e)),
        },

        Commands::Monthly => match client.monthly_stats().await {
            Ok(stats) => {
                for (label, value) in &stats {
                    let rendered = match value.as_f64() {
                        Some(n) if label.contains("Donasi") => format_idr(n),
                        _ => value.to_string(),
                    };
                    println!("   {}: {}", label, rendered);
                }
            }
            Err(e) => fail(format!("Failed to load monthly stats: {}", e)),
        },

        Commands::Users { command } => match command {
            UsersCmd::List => match client.users().await {
                Ok(users) => {
                    println!("✅ Found {} users", users.len());
                    for user in &users {
                        println!(
                            "   {}. {} <{}> [{}]",
                            user.id,
                            user.name.as_deref().unwrap_or("Unknown"),
                            user.email.as_deref().unwrap_or("-"),
                            user.role.as_deref().unwrap_or("user"),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list users: {}", e)),
            },
            UsersCmd::SetRole { id, role } => {
                match client.update_user_role(*id, *role).await {
                    Ok(()) => println!("✅ User #{} role set to {}", id, role),
                    Err(e) => fail(format!("Failed to update role: {}", e)),
                }
            }
            UsersCmd::Delete { id } => {
                if !confirm(
                    cli.yes,
                    &format!(
                        "Hapus pengguna #{} beserta data terkait (posts/comments/volunteers)?",
                        id
                    ),
                )? {
                    println!("Dibatalkan");
                    return Ok(());
                }
                match client.delete_user(*id).await {
                    Ok(()) => println!("✅ User #{} deleted", id),
                    Err(e) => fail(format!("Failed to delete user: {}", e)),
                }
            }
        },

        Commands::Posts { command } => match command {
            PostsCmd::List => match client.posts().await {
                Ok(posts) => {
                    println!("✅ Found {} posts", posts.len());
                    for post in &posts {
                        println!(
                            "   {}. [{} likes] {}: {}",
                            post.id,
                            post.likes,
                            post.user_name.as_deref().unwrap_or("Unknown"),
                            truncate(post.text.as_deref().unwrap_or("-"), 50),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list posts: {}", e)),
            },
            PostsCmd::Delete { id } => {
                if !confirm(cli.yes, &format!("Hapus postingan #{}?", id))? {
                    println!("Dibatalkan");
                    return Ok(());
                }
                match client.delete_post(*id).await {
                    Ok(()) => println!("✅ Post #{} deleted", id),
                    Err(e) => fail(format!("Failed to delete post: {}", e)),
                }
            }
        },

        Commands::Campaigns { command } => match command {
            CampaignsCmd::List => match client.campaigns().await {
                Ok(campaigns) => {
                    println!("✅ Found {} campaigns", campaigns.len());
                    for campaign in &campaigns {
                        println!(
                            "   {}. {} [{}] {} / {}",
                            campaign.id,
                            campaign.title,
                            campaign.campaign_status.as_deref().unwrap_or("active"),
                            format_idr(campaign.current_amount),
                            format_idr(campaign.target_amount),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list campaigns: {}", e)),
            },
            CampaignsCmd::SetStatus { id, status } => {
                match client.update_campaign_status(*id, *status).await {
                    Ok(()) => println!("✅ Campaign #{} status set to {}", id, status),
                    Err(e) => fail(format!("Failed to update campaign: {}", e)),
                }
            }
        },

        Commands::Donations { command } => match command {
            DonationsCmd::List => match client.donations().await {
                Ok(donations) => {
                    println!("✅ Found {} donations", donations.len());
                    for donation in &donations {
                        println!(
                            "   {}. {} → {} [{}] {}",
                            donation.id,
                            donation.user_name.as_deref().unwrap_or("Unknown"),
                            donation.campaign_title.as_deref().unwrap_or("-"),
                            donation.status.as_deref().unwrap_or("pending"),
                            format_idr(donation.amount),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list donations: {}", e)),
            },
            DonationsCmd::SetStatus { id, status } => {
                match client.update_donation_status(*id, *status).await {
                    Ok(()) => println!("✅ Donation #{} status set to {}", id, status),
                    Err(e) => fail(format!("Failed to update donation: {}", e)),
                }
            }
        },

        Commands::Comments { command } => match command {
            CommentsCmd::List => match client.comments().await {
                Ok(comments) => {
                    println!("✅ Found {} comments", comments.len());
                    for comment in &comments {
                        println!(
                            "   {}. (post #{}) {}: {}",
                            comment.id,
                            comment.post_id,
                            comment.user_name.as_deref().unwrap_or("Unknown"),
                            truncate(comment.text.as_deref().unwrap_or("-"), 50),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list comments: {}", e)),
            },
            CommentsCmd::Delete { id } => {
                if !confirm(cli.yes, &format!("Hapus komentar #{}?", id))? {
                    println!("Dibatalkan");
                    return Ok(());
                }
                match client.delete_comment(*id).await {
                    Ok(()) => println!("✅ Comment #{} deleted", id),
                    Err(e) => fail(format!("Failed to delete comment: {}", e)),
                }
            }
        },

        Commands::Volunteers { command } => match command {
            VolunteersCmd::List => match client.volunteers().await {
                Ok(volunteers) => {
                    println!("✅ Found {} volunteers", volunteers.len());
                    for volunteer in &volunteers {
                        println!(
                            "   {}. {} @ {} [{}] {} jam",
                            volunteer.id,
                            volunteer.user_name.as_deref().unwrap_or("Unknown"),
                            volunteer.campaign_title.as_deref().unwrap_or("-"),
                            volunteer.volunteer_status.as_deref().unwrap_or("applied"),
                            volunteer.hours_contributed,
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list volunteers: {}", e)),
            },
            VolunteersCmd::Update { id, status, hours } => {
                match client.update_volunteer(*id, *status, *hours).await {
                    Ok(()) => {
                        println!("✅ Volunteer #{} updated: {} ({} jam)", id, status, hours)
                    }
                    Err(e) if e.is_invalid_input() => fail(e),
                    Err(e) => fail(format!("Failed to update volunteer: {}", e)),
                }
            }
        },

        Commands::Notifications { command } => match command {
            NotificationsCmd::List => match client.notifications().await {
                Ok(notifications) => {
                    println!("✅ Found {} notifications", notifications.len());
                    for notification in &notifications {
                        println!(
                            "   {}. [{}] {} → {} ({})",
                            notification.id,
                            if notification.is_read { "read" } else { "unread" },
                            notification.title.as_deref().unwrap_or("-"),
                            notification.user_name.as_deref().unwrap_or("Unknown"),
                            notification.notification_type.as_deref().unwrap_or("-"),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to list notifications: {}", e)),
            },
            NotificationsCmd::Delete { id } => {
                if !confirm(cli.yes, &format!("Hapus notifikasi #{}?", id))? {
                    println!("Dibatalkan");
                    return Ok(());
                }
                match client.delete_notification(*id).await {
                    Ok(()) => println!("✅ Notification #{} deleted", id),
                    Err(e) => fail(format!("Failed to delete notification: {}", e)),
                }
            }
        },

        Commands::Likes => match client.top_posts().await {
            Ok(posts) => {
                println!("✅ Top posts by likes");
                for post in &posts {
                    println!(
                        "   {}. [{} likes] {}: {}",
                        post.post_id,
                        post.likes_count,
                        post.user_name.as_deref().unwrap_or("Unknown"),
                        truncate(post.text.as_deref().unwrap_or("-"), 50),
                    );
                }
            }
            Err(e) => fail(format!("Failed to load top posts: {}", e)),
        },

        Commands::Feedback { command } => match command {
            FeedbackCmd::Stats => match client.feedback_stats().await {
                Ok(stats) => {
                    println!("{}", "Feedback".bold());
                    println!("   Total:          {}", stats.total_feedback);
                    println!("   Rating rata²:   {:.1}", stats.average_rating);
                    for bucket in 1..=5 {
                        let count = stats
                            .rating_distribution
                            .get(&bucket.to_string())
                            .copied()
                            .unwrap_or(0);
                        println!("   {} bintang:      {}", bucket, count);
                    }
                }
                Err(e) => fail(format!("Failed to load feedback stats: {}", e)),
            },
            FeedbackCmd::Summary => match client.sentiment_summary(100).await {
                Ok(summary) => {
                    let dist = summary.sentiment_distribution;
                    println!("{}", "Sentimen".bold());
                    println!(
                        "   Positif: {} ({}%)",
                        dist.positive, summary.positive_percentage
                    );
                    println!(
                        "   Negatif: {} ({}%)",
                        dist.negative, summary.negative_percentage
                    );
                    println!("   Netral:  {}", dist.neutral);
                    println!(
                        "   Akurasi: {:.0}%",
                        summary.average_confidence * 100.0
                    );
                    println!("   Total dianalisis: {}", summary.total_analyzed);
                }
                Err(e) => fail(format!("Failed to load sentiment summary: {}", e)),
            },
            FeedbackCmd::Trend { days } => match client.sentiment_trend(*days).await {
                Ok(trend) => {
                    for point in &trend {
                        println!(
                            "   {}: +{} / -{} / ={}",
                            point.date, point.positive, point.negative, point.neutral
                        );
                    }
                }
                Err(e) => fail(format!("Failed to load sentiment trend: {}", e)),
            },
            FeedbackCmd::Categories => match client.sentiment_by_category().await {
                Ok(categories) => {
                    for category in &categories {
                        println!(
                            "   {}: +{} / -{} / ={}",
                            category.category,
                            category.positive,
                            category.negative,
                            category.neutral
                        );
                    }
                }
                Err(e) => fail(format!("Failed to load categories: {}", e)),
            },
            FeedbackCmd::Recent { limit } => match client.recent_feedback(*limit).await {
                Ok(feedbacks) => {
                    println!("✅ Found {} feedback entries", feedbacks.len());
                    for feedback in &feedbacks {
                        println!(
                            "   {}. [{}★ {}] {}: {}",
                            feedback.id,
                            feedback.rating,
                            feedback.sentiment.as_deref().unwrap_or("neutral"),
                            feedback.user_name.as_deref().unwrap_or("Unknown"),
                            truncate(feedback.message.as_deref().unwrap_or("-"), 50),
                        );
                    }
                }
                Err(e) => fail(format!("Failed to load recent feedback: {}", e)),
            },
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idr_formatting() {
        assert_eq!(format_idr(0.0), "Rp 0");
        assert_eq!(format_idr(45_000_000.0), "Rp 45.000.000");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("halo", 50), "halo");
        let long = "x".repeat(60);
        assert_eq!(truncate(&long, 50).chars().count(), 53);
    }
}
