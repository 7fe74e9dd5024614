//! Feedback & sentiment analytics section. One joined five-request batch per
//! refresh; every payload is still gated on its own `{status}` envelope, so a
//! sick analytics endpoint blanks only its own widget.
//!
//! The four Chart.js widgets live as component state: built the first time
//! data arrives, updated in place on every refresh after that, and destroyed
//! together with the component.

use crate::api::{self, FeedbackBatch};
use crate::charts::{
    category_chart_data, rating_chart_data, sentiment_chart_data, trend_chart_data, ChartData,
    ChartHandle, ChartKind,
};
use crate::format::health_status;
use crate::models::{FeedbackStats, SentimentSummary};
use crate::rows::{self, FeedbackRow};
use crate::sections::SectionProps;
use crate::widgets::{error_row, placeholder_row, LoadState};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, HtmlSelectElement};
use yew::prelude::*;

const DEFAULT_DAYS: u32 = 30;

pub enum FeedbackMsg {
    Loaded(u32, Result<Box<FeedbackBatch>, String>),
    DaysChanged(String),
}

pub struct FeedbackSection {
    days: u32,
    stats: Option<FeedbackStats>,
    summary: Option<SentimentSummary>,
    recent: LoadState<Vec<FeedbackRow>>,
    batch_error: Option<String>,
    seq: u32,

    sentiment_chart: Option<ChartHandle>,
    rating_chart: Option<ChartHandle>,
    trend_chart: Option<ChartHandle>,
    category_chart: Option<ChartHandle>,

    sentiment_canvas: NodeRef,
    rating_canvas: NodeRef,
    trend_canvas: NodeRef,
    category_canvas: NodeRef,
}

fn upsert_chart(
    slot: &mut Option<ChartHandle>,
    canvas: &NodeRef,
    kind: ChartKind,
    data: &ChartData,
) {
    match slot {
        Some(chart) => {
            if let Err(e) = chart.set_data(data) {
                log::error!("Chart update failed: {}", e);
            }
        }
        None => {
            let Some(canvas) = canvas.cast::<HtmlCanvasElement>() else {
                log::warn!("Chart canvas is not mounted yet");
                return;
            };
            match ChartHandle::create(&canvas, kind, data) {
                Ok(chart) => *slot = Some(chart),
                Err(e) => log::error!("Chart creation failed: {}", e),
            }
        }
    }
}

impl FeedbackSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.seq += 1;
        let seq = self.seq;
        self.batch_error = None;
        self.recent = LoadState::Loading;

        let days = self.days;
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::feedback_batch(days).await.map(Box::new);
            link.send_message(FeedbackMsg::Loaded(seq, result));
        });
    }

    fn apply_batch(&mut self, batch: FeedbackBatch) {
        if batch.stats.status == "success" {
            if let Some(stats) = batch.stats.stats {
                upsert_chart(
                    &mut self.rating_chart,
                    &self.rating_canvas,
                    ChartKind::RatingBar,
                    &rating_chart_data(&stats.rating_distribution),
                );
                self.stats = Some(stats);
            }
        }

        if batch.summary.status == "success" {
            if let Some(summary) = batch.summary.summary {
                upsert_chart(
                    &mut self.sentiment_chart,
                    &self.sentiment_canvas,
                    ChartKind::Doughnut,
                    &sentiment_chart_data(&summary.sentiment_distribution),
                );
                self.summary = Some(summary);
            }
        }

        if batch.trend.status == "success" {
            upsert_chart(
                &mut self.trend_chart,
                &self.trend_canvas,
                ChartKind::TrendLine,
                &trend_chart_data(&batch.trend.trend),
            );
        }

        if batch.categories.status == "success" {
            upsert_chart(
                &mut self.category_chart,
                &self.category_canvas,
                ChartKind::CategoryBar,
                &category_chart_data(&batch.categories.categories),
            );
        }

        self.recent = if batch.recent.status == "success" {
            LoadState::Loaded(rows::feedback_rows(&batch.recent.data))
        } else {
            LoadState::Failed("feedback API rejected the request".to_string())
        };
    }
}

impl Component for FeedbackSection {
    type Message = FeedbackMsg;
    type Properties = SectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut section = Self {
            days: DEFAULT_DAYS,
            stats: None,
            summary: None,
            recent: LoadState::Loading,
            batch_error: None,
            seq: 0,
            sentiment_chart: None,
            rating_chart: None,
            trend_chart: None,
            category_chart: None,
            sentiment_canvas: NodeRef::default(),
            rating_canvas: NodeRef::default(),
            trend_canvas: NodeRef::default(),
            category_canvas: NodeRef::default(),
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
            FeedbackMsg::Loaded(seq, result) => {
                if seq != self.seq {
                    return false;
                }
                match result {
                    Ok(batch) => self.apply_batch(*batch),
                    Err(e) => {
                        log::error!("Error loading feedback data: {}", e);
                        self.batch_error = Some(e);
                        self.recent = LoadState::Failed("batch failed".to_string());
                    }
                }
                true
            }
            FeedbackMsg::DaysChanged(value) => {
                self.days = value.parse().unwrap_or(DEFAULT_DAYS);
                self.load(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            FeedbackMsg::DaysChanged(select.value())
        });

        html! {
            <>
                <div class="feedback-toolbar">
                    <label>{ "Rentang waktu" }</label>
                    <select {onchange}>
                        <option value="7" selected={self.days == 7}>{ "7 hari" }</option>
                        <option value="30" selected={self.days == 30}>{ "30 hari" }</option>
                        <option value="90" selected={self.days == 90}>{ "90 hari" }</option>
                    </select>
                </div>

                if let Some(error) = &self.batch_error {
                    <p class="error-text">{ format!("Gagal memuat data feedback: {}", error) }</p>
                }

                { self.view_stat_cards() }

                <div class="charts-grid">
                    <div class="chart-card">
                        <h3>{ "Distribusi Sentimen" }</h3>
                        <canvas ref={self.sentiment_canvas.clone()}></canvas>
                    </div>
                    <div class="chart-card">
                        <h3>{ "Distribusi Rating" }</h3>
                        <canvas ref={self.rating_canvas.clone()}></canvas>
                    </div>
                    <div class="chart-card chart-card-wide">
                        <h3>{ "Tren Sentimen" }</h3>
                        <canvas ref={self.trend_canvas.clone()}></canvas>
                    </div>
                    <div class="chart-card">
                        <h3>{ "Sentimen per Kategori" }</h3>
                        <canvas ref={self.category_canvas.clone()}></canvas>
                    </div>
                    <div class="chart-card">
                        <h3>{ "Ringkasan NLP" }</h3>
                        { self.view_nlp_summary() }
                    </div>
                </div>

                { self.view_table(ctx) }
            </>
        }
    }
}

impl FeedbackSection {
    fn view_stat_cards(&self) -> Html {
        let total = self
            .stats
            .as_ref()
            .map(|s| s.total_feedback.to_string())
            .unwrap_or_else(|| "…".to_string());
        let rating = self
            .stats
            .as_ref()
            .map(|s| format!("{:.1} ★", s.average_rating))
            .unwrap_or_else(|| "…".to_string());
        let positive = self
            .summary
            .as_ref()
            .map(|s| format!("{}%", s.positive_percentage))
            .unwrap_or_else(|| "…".to_string());
        let negative = self
            .summary
            .as_ref()
            .map(|s| format!("{}%", s.negative_percentage))
            .unwrap_or_else(|| "…".to_string());

        html! {
            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-value">{ total }</div>
                    <div class="stat-label">{ "Total Feedback" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ rating }</div>
                    <div class="stat-label">{ "Rating Rata-rata" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ positive }</div>
                    <div class="stat-label">{ "Sentimen Positif" }</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{ negative }</div>
                    <div class="stat-label">{ "Sentimen Negatif" }</div>
                </div>
            </div>
        }
    }

    fn view_nlp_summary(&self) -> Html {
        let Some(summary) = &self.summary else {
            return html! { <p class="loading">{ "Memuat data..." }</p> };
        };

        let (label, color, emoji) = health_status(summary.positive_percentage);
        let dist = &summary.sentiment_distribution;
        let confidence = (summary.average_confidence * 100.0).round() as i64;

        html! {
            <div class="nlp-summary">
                <div class="nlp-health">
                    <div class="nlp-emoji">{ emoji }</div>
                    <div class="nlp-label" style={format!("color: {}", color)}>{ label }</div>
                    <div class="nlp-caption">{ "Kesehatan Sentimen" }</div>
                </div>
                <div class="nlp-grid">
                    <div class="nlp-cell nlp-positive">
                        <div class="nlp-count">{ dist.positive }</div>
                        <div class="nlp-name">{ "Positif" }</div>
                    </div>
                    <div class="nlp-cell nlp-negative">
                        <div class="nlp-count">{ dist.negative }</div>
                        <div class="nlp-name">{ "Negatif" }</div>
                    </div>
                    <div class="nlp-cell nlp-neutral">
                        <div class="nlp-count">{ dist.neutral }</div>
                        <div class="nlp-name">{ "Netral" }</div>
                    </div>
                    <div class="nlp-cell nlp-confidence">
                        <div class="nlp-count">{ format!("{}%", confidence) }</div>
                        <div class="nlp-name">{ "Akurasi" }</div>
                    </div>
                </div>
                <div class="nlp-total">
                    <div class="nlp-caption">{ "Total Dianalisis" }</div>
                    <div class="nlp-count">{ format!("{} feedback", summary.total_analyzed) }</div>
                </div>
            </div>
        }
    }

    fn view_table(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.recent {
            LoadState::Loading => placeholder_row(8, "Memuat data..."),
            LoadState::Failed(_) => error_row(8),
            LoadState::Loaded(rows) if rows.is_empty() => {
                placeholder_row(8, "Tidak ada data feedback")
            }
            LoadState::Loaded(rows) => rows
                .iter()
                .map(|row| {
                    html! {
                        <tr key={row.id}>
                            <td>{ row.id }</td>
                            <td>{ &row.user }</td>
                            <td><span class="badge badge-info">{ &row.category }</span></td>
                            <td class="stars">{ &row.stars }</td>
                            <td class="text-truncate" title={row.full_message.clone()}>{ &row.message }</td>
                            <td><span class={classes!("badge", row.sentiment_badge)}>{ row.sentiment_label }</span></td>
                            <td><span class={classes!("badge", row.score_badge)}>{ &row.score }</span></td>
                            <td>{ &row.created }</td>
                        </tr>
                    }
                })
                .collect::<Html>(),
        };

        html! {
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Pengguna" }</th>
                            <th>{ "Kategori" }</th>
                            <th>{ "Rating" }</th>
                            <th>{ "Pesan" }</th>
                            <th>{ "Sentimen" }</th>
                            <th>{ "Skor" }</th>
                            <th>{ "Tanggal" }</th>
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
        }
    }
}
