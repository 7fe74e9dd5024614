use crate::api;
use crate::dashboard::DashboardSection;
use crate::feedback::FeedbackSection;
use crate::login::LoginPage;
use crate::models::AdminUser;
use crate::sections::{
    CampaignsSection, CommentsSection, DonationsSection, LikesSection, NotificationsSection,
    PostsSection, UsersSection, VolunteersSection,
};
use crate::widgets::Modal;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const SECTION_KEY: &str = "ruanghijau_admin_section";

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/admin")]
    Home,
    #[at("/admin/login")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home | Route::Dashboard => html! { <App /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
    }
}

#[function_component(Root)]
pub fn root() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

// ==================== Разделы ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Users,
    Posts,
    Campaigns,
    Donations,
    Comments,
    Volunteers,
    Notifications,
    Likes,
    Feedback,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Dashboard,
        Section::Users,
        Section::Posts,
        Section::Campaigns,
        Section::Donations,
        Section::Comments,
        Section::Volunteers,
        Section::Notifications,
        Section::Likes,
        Section::Feedback,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Posts => "posts",
            Section::Campaigns => "campaigns",
            Section::Donations => "donations",
            Section::Comments => "comments",
            Section::Volunteers => "volunteers",
            Section::Notifications => "notifications",
            Section::Likes => "likes",
            Section::Feedback => "feedback",
        }
    }

    /// Unknown keys fall back to the dashboard.
    pub fn from_key(key: &str) -> Section {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .unwrap_or(Section::Dashboard)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Manajemen Pengguna",
            Section::Posts => "Manajemen Postingan",
            Section::Campaigns => "Manajemen Kampanye",
            Section::Donations => "Manajemen Donasi",
            Section::Comments => "Manajemen Komentar",
            Section::Volunteers => "Manajemen Relawan",
            Section::Notifications => "Manajemen Notifikasi",
            Section::Likes => "Analitik Likes",
            Section::Feedback => "Kelola Feedback & Analisis Sentimen",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-home",
            Section::Users => "fas fa-users",
            Section::Posts => "fas fa-file-alt",
            Section::Campaigns => "fas fa-bullhorn",
            Section::Donations => "fas fa-dollar-sign",
            Section::Comments => "fas fa-comments",
            Section::Volunteers => "fas fa-hands-helping",
            Section::Notifications => "fas fa-bell",
            Section::Likes => "fas fa-heart",
            Section::Feedback => "fas fa-comment-dots",
        }
    }
}

// ==================== Оболочка дашборда ====================

pub enum Msg {
    AuthChecked(Result<Option<AdminUser>, String>),
    Switch(Section),
    AskLogout,
    CancelLogout,
    ConfirmLogout,
    LoggedOut,
}

pub struct App {
    section: Section,
    // растёт на каждом переключении; повторный клик по активному
    // разделу перезапускает его загрузчик
    refresh: u32,
    user: Option<AdminUser>,
    show_logout: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // Сессионная проверка — единственный источник правды об авторизации
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::AuthChecked(api::check_auth().await));
        });

        let section = LocalStorage::get::<String>(SECTION_KEY)
            .map(|key| Section::from_key(&key))
            .unwrap_or(Section::Dashboard);

        Self {
            section,
            refresh: 0,
            user: None,
            show_logout: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AuthChecked(Ok(user)) => {
                self.user = user;
                true
            }
            Msg::AuthChecked(Err(e)) => {
                log::warn!("Auth check failed: {}", e);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
            Msg::Switch(section) => {
                self.section = section;
                self.refresh += 1;
                if let Err(e) = LocalStorage::set(SECTION_KEY, section.key()) {
                    log::warn!("Failed to persist section: {:?}", e);
                }
                true
            }
            Msg::AskLogout => {
                self.show_logout = true;
                true
            }
            Msg::CancelLogout => {
                self.show_logout = false;
                true
            }
            Msg::ConfirmLogout => {
                self.show_logout = false;
                let link = ctx.link().clone();
                spawn_local(async move {
                    // на логин уходим даже если POST не прошёл
                    if let Err(e) = api::logout().await {
                        log::warn!("Logout error: {}", e);
                    }
                    link.send_message(Msg::LoggedOut);
                });
                true
            }
            Msg::LoggedOut => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="admin-layout">
                { self.view_sidebar(ctx) }
                <main class="main-content">
                    <header class="content-header">
                        <h2 id="pageTitle">{ self.section.title() }</h2>
                    </header>
                    { for Section::ALL.iter().map(|section| self.view_section(ctx, *section)) }
                </main>
                { self.view_logout_dialog(ctx) }
            </div>
        }
    }
}

impl App {
    fn view_sidebar(&self, ctx: &Context<Self>) -> Html {
        let (name, email, initial) = match &self.user {
            Some(user) => {
                let name = user.name.clone().unwrap_or_else(|| "Admin".to_string());
                let initial = name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "A".to_string());
                (name, user.email.clone().unwrap_or_default(), initial)
            }
            None => ("Admin".to_string(), String::new(), "A".to_string()),
        };

        html! {
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h1>{ "🌿 RuangHijau Admin" }</h1>
                </div>
                <nav class="sidebar-menu">
                    { for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let onclick = ctx.link().callback(move |e: MouseEvent| {
                            e.prevent_default();
                            Msg::Switch(section)
                        });
                        let class = classes!(
                            "nav-item",
                            (self.section == section).then_some("active")
                        );
                        html! {
                            <a {class} href="#" data-section={section.key()} {onclick}>
                                <i class={section.icon()}></i>
                                <span>{ section.title() }</span>
                            </a>
                        }
                    }) }
                </nav>
                <div class="sidebar-footer">
                    <div class="admin-profile">
                        <div class="admin-avatar">{ initial }</div>
                        <div class="admin-info">
                            <div class="admin-name">{ name }</div>
                            <div class="admin-email">{ email }</div>
                        </div>
                    </div>
                    <button class="logout-btn" onclick={ctx.link().callback(|_| Msg::AskLogout)}>
                        <i class="fas fa-sign-out-alt"></i>
                        <span>{ "Logout" }</span>
                    </button>
                </div>
            </aside>
        }
    }

    fn view_section(&self, ctx: &Context<Self>, section: Section) -> Html {
        let active = self.section == section;
        let refresh = self.refresh;
        let class = classes!("content-section", active.then_some("active"));

        let inner = match section {
            Section::Dashboard => html! { <DashboardSection {active} {refresh} /> },
            Section::Users => html! { <UsersSection {active} {refresh} /> },
            Section::Posts => html! { <PostsSection {active} {refresh} /> },
            Section::Campaigns => html! { <CampaignsSection {active} {refresh} /> },
            Section::Donations => html! { <DonationsSection {active} {refresh} /> },
            Section::Comments => html! { <CommentsSection {active} {refresh} /> },
            Section::Volunteers => html! { <VolunteersSection {active} {refresh} /> },
            Section::Notifications => html! { <NotificationsSection {active} {refresh} /> },
            Section::Likes => html! { <LikesSection {active} {refresh} /> },
            Section::Feedback => html! { <FeedbackSection {active} {refresh} /> },
        };

        html! {
            <section {class} id={format!("{}-section", section.key())}>
                { inner }
            </section>
        }
    }

    fn view_logout_dialog(&self, ctx: &Context<Self>) -> Html {
        if !self.show_logout {
            return html! {};
        }
        html! {
            <Modal
                title="Keluar dari admin?"
                danger=true
                confirm_label="Keluar"
                on_confirm={ctx.link().callback(|_| Msg::ConfirmLogout)}
                on_cancel={ctx.link().callback(|_| Msg::CancelLogout)}
            >
                <p>{ "Apakah Anda yakin ingin keluar?" }</p>
            </Modal>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_section_key_falls_back_to_dashboard() {
        assert_eq!(Section::from_key("users"), Section::Users);
        assert_eq!(Section::from_key("feedback"), Section::Feedback);
        assert_eq!(Section::from_key("no-such-section"), Section::Dashboard);
        assert_eq!(Section::from_key(""), Section::Dashboard);
    }

    #[test]
    fn titles_match_the_navigation_table() {
        assert_eq!(Section::Dashboard.title(), "Dashboard");
        assert_eq!(Section::Users.title(), "Manajemen Pengguna");
        assert_eq!(Section::Likes.title(), "Analitik Likes");
        assert_eq!(
            Section::Feedback.title(),
            "Kelola Feedback & Analisis Sentimen"
        );
    }

    #[test]
    fn keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), section);
        }
    }
}
