//! Dashboard landing section: seven counters loaded as one all-or-nothing
//! batch, plus the recent-activity feed and monthly stats, each with its own
//! failure row.

use crate::api;
use crate::format::{browser_now, format_currency};
use crate::models::DashboardTotals;
use crate::rows::{self, ActivityRow};
use crate::sections::SectionProps;
use crate::widgets::LoadState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum DashboardMsg {
    Totals(u32, Result<DashboardTotals, String>),
    Activity(u32, Result<Vec<ActivityRow>, String>),
    Monthly(u32, Result<Vec<(String, String)>, String>),
}

pub struct DashboardSection {
    totals: LoadState<DashboardTotals>,
    activity: LoadState<Vec<ActivityRow>>,
    monthly: LoadState<Vec<(String, String)>>,
    seq: u32,
}

impl DashboardSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.totals = LoadState::Loading;
        self.activity = LoadState::Loading;
        self.monthly = LoadState::Loading;

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(DashboardMsg::Totals(seq, api::dashboard_totals().await));
        });
    }

    // Виджеты грузятся после счётчиков
    fn load_widgets(&self, ctx: &Context<Self>) {
        let seq = self.seq;

        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::recent_activity()
                .await
                .map(|activities| rows::activity_rows(&activities, browser_now()));
            link.send_message(DashboardMsg::Activity(seq, result));
        });

        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::monthly_stats()
                .await
                .map(|stats| rows::monthly_rows(&stats));
            link.send_message(DashboardMsg::Monthly(seq, result));
        });
    }
}

impl Component for DashboardSection {
    type Message = DashboardMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            totals: LoadState::Loading,
            activity: LoadState::Loading,
            monthly: LoadState::Loading,
            seq: 0,
        };
        if ctx.props().active {
            section.load(ctx);
        }
        section
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().active && (!old_props.active || ctx.props().refresh != old_props.refresh) {
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardMsg::Totals(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.totals = match result {
                    Ok(totals) => {
                        self.load_widgets(ctx);
                        LoadState::Loaded(totals)
                    }
                    Err(e) => {
                        // ни один счётчик не обновляется при частичном сбое
                        log::error!("Error loading dashboard: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            DashboardMsg::Activity(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.activity = match result {
                    Ok(rows) => LoadState::Loaded(rows),
                    Err(e) => {
                        log::error!("Error loading recent activity: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
            DashboardMsg::Monthly(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                self.monthly = match result {
                    Ok(rows) => LoadState::Loaded(rows),
                    Err(e) => {
                        log::error!("Error loading monthly stats: {}", e);
                        LoadState::Failed(e)
                    }
                };
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                { self.view_counters() }
                <div class="dashboard-widgets">
                    <div class="widget">
                        <h3>{ "Aktivitas Terbaru" }</h3>
                        { self.view_activity() }
                    </div>
                    <div class="widget">
                        <h3>{ "Statistik Bulan Ini" }</h3>
                        { self.view_monthly() }
                    </div>
                </div>
            </>
        }
    }
}

impl DashboardSection {
    fn view_counters(&self) -> Html {
        let card = |label: &str, value: String| {
            html! {
                <div class="stat-card">
                    <div class="stat-value">{ value }</div>
                    <div class="stat-label">{ label.to_string() }</div>
                </div>
            }
        };

        match &self.totals {
            LoadState::Loading => html! {
                <div class="stats-grid">
                    { card("Total Pengguna", "…".into()) }
                    { card("Total Postingan", "…".into()) }
                    { card("Total Kampanye", "…".into()) }
                    { card("Total Donasi", "…".into()) }
                    { card("Total Komentar", "…".into()) }
                    { card("Total Relawan", "…".into()) }
                    { card("Notifikasi Belum Dibaca", "…".into()) }
                </div>
            },
            LoadState::Failed(_) => html! {
                <p class="error-text">{ "Gagal memuat statistik dashboard" }</p>
            },
            LoadState::Loaded(totals) => html! {
                <div class="stats-grid">
                    { card("Total Pengguna", totals.users.to_string()) }
                    { card("Total Postingan", totals.posts.to_string()) }
                    { card("Total Kampanye", totals.campaigns.to_string()) }
                    { card("Total Donasi", format_currency(totals.donation_total)) }
                    { card("Total Komentar", totals.comments.to_string()) }
                    { card("Total Relawan", totals.volunteers.to_string()) }
                    { card("Notifikasi Belum Dibaca", totals.unread_notifications.to_string()) }
                </div>
            },
        }
    }

    fn view_activity(&self) -> Html {
        match &self.activity {
            LoadState::Loading => html! { <p class="loading">{ "Memuat data..." }</p> },
            LoadState::Failed(_) => html! {
                <p class="error-text">{ "Gagal memuat aktivitas" }</p>
            },
            LoadState::Loaded(rows) if rows.is_empty() => html! {
                <p class="empty-text">{ "Tidak ada aktivitas terbaru" }</p>
            },
            LoadState::Loaded(rows) => rows
                .iter()
                .map(|row| {
                    html! {
                        <div class="activity-item">
                            <div class="activity-icon" style={format!("background: {}", row.color)}>
                                { row.icon }
                            </div>
                            <div class="activity-content">
                                <div class="activity-title">{ &row.title }</div>
                                <div class="activity-time">{ &row.time }</div>
                            </div>
                        </div>
                    }
                })
                .collect::<Html>(),
        }
    }

    fn view_monthly(&self) -> Html {
        match &self.monthly {
            LoadState::Loading => html! { <p class="loading">{ "Memuat data..." }</p> },
            LoadState::Failed(_) => html! {
                <p class="error-text">{ "Gagal memuat statistik" }</p>
            },
            LoadState::Loaded(rows) if rows.is_empty() => html! {
                <p class="empty-text">{ "Tidak ada data" }</p>
            },
            LoadState::Loaded(rows) => rows
                .iter()
                .map(|(label, value)| {
                    html! {
                        <div class="stat-row">
                            <span class="stat-label">{ label }</span>
                            <span class="stat-value">{ value }</span>
                        </div>
                    }
                })
                .collect::<Html>(),
        }
    }
}
