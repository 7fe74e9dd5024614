//! Thin binding to the page-global Chart.js plus the dataset builders for the
//! four feedback widgets. A `ChartHandle` owns one canvas-bound chart: it is
//! created on first data, fed new data in place afterwards, and destroys the
//! underlying chart when dropped.

use crate::format::format_day_month;
use crate::models::{CategorySentiment, SentimentDistribution, TrendPoint};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    // Chart.js подключён на странице отдельным <script>
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> JsChart;

    #[wasm_bindgen(method)]
    fn update(this: &JsChart);

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);

    #[wasm_bindgen(method, setter, js_name = data)]
    fn set_data(this: &JsChart, data: &JsValue);
}

const POSITIVE: &str = "rgba(34, 197, 94, 1)";
const POSITIVE_BG: &str = "rgba(34, 197, 94, 0.8)";
const POSITIVE_FILL: &str = "rgba(34, 197, 94, 0.1)";
const NEGATIVE: &str = "rgba(239, 68, 68, 1)";
const NEGATIVE_BG: &str = "rgba(239, 68, 68, 0.8)";
const NEGATIVE_FILL: &str = "rgba(239, 68, 68, 0.1)";
const NEUTRAL: &str = "rgba(156, 163, 175, 1)";
const NEUTRAL_BG: &str = "rgba(156, 163, 175, 0.8)";
const NEUTRAL_FILL: &str = "rgba(156, 163, 175, 0.1)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<serde_json::Value>,
    #[serde(rename = "borderColor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<serde_json::Value>,
    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(rename = "borderRadius", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(rename = "hoverOffset", skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(rename = "pointRadius", skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(rename = "pointHoverRadius", skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Sentiment share, three classes.
    Doughnut,
    /// Rating buckets 1–5.
    RatingBar,
    /// Per-day sentiment counts over the selected window.
    TrendLine,
    /// Stacked horizontal bars over the top categories.
    CategoryBar,
}

impl ChartKind {
    fn type_name(&self) -> &'static str {
        match self {
            ChartKind::Doughnut => "doughnut",
            ChartKind::RatingBar | ChartKind::CategoryBar => "bar",
            ChartKind::TrendLine => "line",
        }
    }

    fn options(&self) -> serde_json::Value {
        match self {
            ChartKind::Doughnut => serde_json::json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "bottom",
                        "labels": { "padding": 20, "usePointStyle": true, "font": { "size": 12 } }
                    }
                },
                "cutout": "60%"
            }),
            ChartKind::RatingBar => serde_json::json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false } },
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "ticks": { "stepSize": 1 },
                        "grid": { "color": "rgba(0,0,0,0.05)" }
                    },
                    "x": { "grid": { "display": false } }
                }
            }),
            ChartKind::TrendLine => serde_json::json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "interaction": { "mode": "index", "intersect": false },
                "plugins": {
                    "legend": {
                        "position": "top",
                        "labels": { "usePointStyle": true, "padding": 15 }
                    },
                    "tooltip": { "mode": "index", "intersect": false }
                },
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "stacked": false,
                        "grid": { "color": "rgba(0,0,0,0.05)" },
                        "ticks": { "stepSize": 1 }
                    },
                    "x": { "grid": { "display": false } }
                }
            }),
            ChartKind::CategoryBar => serde_json::json!({
                "indexAxis": "y",
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "top",
                        "labels": { "usePointStyle": true, "padding": 10, "font": { "size": 11 } }
                    }
                },
                "scales": {
                    "x": { "stacked": true, "grid": { "color": "rgba(0,0,0,0.05)" } },
                    "y": { "stacked": true, "grid": { "display": false } }
                }
            }),
        }
    }
}

// serde-wasm-bindgen по умолчанию делает из map'ов ES Map;
// Chart.js ждёт обычные объекты.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| format!("Failed to serialize chart config: {}", e))
}

pub struct ChartHandle {
    chart: JsChart,
}

impl ChartHandle {
    pub fn create(
        canvas: &HtmlCanvasElement,
        kind: ChartKind,
        data: &ChartData,
    ) -> Result<Self, String> {
        let config = serde_json::json!({ "type": kind.type_name(), "options": kind.options() });
        let config = to_js(&config)?;
        // data сериализуем отдельно от options: структура типизирована
        js_sys::Reflect::set(&config, &JsValue::from_str("data"), &to_js(data)?)
            .map_err(|_| "Failed to attach chart data".to_string())?;
        Ok(Self {
            chart: JsChart::new(canvas, &config),
        })
    }

    /// Replace the data of an existing chart and redraw, without recreating
    /// the widget.
    pub fn set_data(&self, data: &ChartData) -> Result<(), String> {
        self.chart.set_data(&to_js(data)?);
        self.chart.update();
        Ok(())
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

// ==================== Данные виджетов ====================

pub fn sentiment_chart_data(dist: &SentimentDistribution) -> ChartData {
    ChartData {
        labels: vec!["Positif".into(), "Negatif".into(), "Netral".into()],
        datasets: vec![Dataset {
            data: vec![dist.positive as f64, dist.negative as f64, dist.neutral as f64],
            background_color: Some(serde_json::json!([POSITIVE_BG, NEGATIVE_BG, NEUTRAL_BG])),
            border_color: Some(serde_json::json!([POSITIVE, NEGATIVE, NEUTRAL])),
            border_width: Some(2.0),
            hover_offset: Some(10.0),
            ..Dataset::default()
        }],
    }
}

pub fn rating_chart_data(distribution: &BTreeMap<String, i64>) -> ChartData {
    let values: Vec<f64> = (1..=5)
        .map(|bucket| {
            distribution
                .get(&bucket.to_string())
                .copied()
                .unwrap_or(0) as f64
        })
        .collect();

    ChartData {
        labels: (1..=5).map(|b| format!("⭐ {}", b)).collect(),
        datasets: vec![Dataset {
            label: Some("Jumlah Feedback".into()),
            data: values,
            background_color: Some(serde_json::json!([
                "rgba(239, 68, 68, 0.7)",
                "rgba(249, 115, 22, 0.7)",
                "rgba(234, 179, 8, 0.7)",
                "rgba(132, 204, 22, 0.7)",
                "rgba(34, 197, 94, 0.7)"
            ])),
            border_color: Some(serde_json::json!([
                "rgba(239, 68, 68, 1)",
                "rgba(249, 115, 22, 1)",
                "rgba(234, 179, 8, 1)",
                "rgba(132, 204, 22, 1)",
                "rgba(34, 197, 94, 1)"
            ])),
            border_width: Some(2.0),
            border_radius: Some(8.0),
            ..Dataset::default()
        }],
    }
}

pub fn trend_chart_data(trend: &[TrendPoint]) -> ChartData {
    let series = |label: &str, values: Vec<f64>, border: &str, fill: &str| Dataset {
        label: Some(label.to_string()),
        data: values,
        border_color: Some(serde_json::json!(border)),
        background_color: Some(serde_json::json!(fill)),
        fill: Some(true),
        tension: Some(0.4),
        point_radius: Some(4.0),
        point_hover_radius: Some(6.0),
        ..Dataset::default()
    };

    ChartData {
        labels: trend.iter().map(|p| format_day_month(&p.date)).collect(),
        datasets: vec![
            series(
                "Positif",
                trend.iter().map(|p| p.positive as f64).collect(),
                POSITIVE,
                POSITIVE_FILL,
            ),
            series(
                "Negatif",
                trend.iter().map(|p| p.negative as f64).collect(),
                NEGATIVE,
                NEGATIVE_FILL,
            ),
            series(
                "Netral",
                trend.iter().map(|p| p.neutral as f64).collect(),
                NEUTRAL,
                NEUTRAL_FILL,
            ),
        ],
    }
}

/// Top six categories, one stacked bar per category.
pub fn category_chart_data(categories: &[CategorySentiment]) -> ChartData {
    let top = &categories[..categories.len().min(6)];

    let series = |label: &str, values: Vec<f64>, bg: &str, border: &str| Dataset {
        label: Some(label.to_string()),
        data: values,
        background_color: Some(serde_json::json!(bg)),
        border_color: Some(serde_json::json!(border)),
        border_width: Some(1.0),
        ..Dataset::default()
    };

    ChartData {
        labels: top.iter().map(|c| c.category.clone()).collect(),
        datasets: vec![
            series(
                "Positif",
                top.iter().map(|c| c.positive as f64).collect(),
                POSITIVE_BG,
                POSITIVE,
            ),
            series(
                "Negatif",
                top.iter().map(|c| c.negative as f64).collect(),
                NEGATIVE_BG,
                NEGATIVE,
            ),
            series(
                "Netral",
                top.iter().map(|c| c.neutral as f64).collect(),
                NEUTRAL_BG,
                NEUTRAL,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_data_keeps_class_order() {
        let data = sentiment_chart_data(&SentimentDistribution {
            positive: 12,
            negative: 3,
            neutral: 5,
        });
        assert_eq!(data.labels, vec!["Positif", "Negatif", "Netral"]);
        assert_eq!(data.datasets[0].data, vec![12.0, 3.0, 5.0]);
    }

    #[test]
    fn rating_data_always_has_five_buckets() {
        let mut dist = BTreeMap::new();
        dist.insert("1".to_string(), 2);
        dist.insert("5".to_string(), 9);

        let data = rating_chart_data(&dist);
        assert_eq!(data.labels.len(), 5);
        assert_eq!(data.datasets[0].data, vec![2.0, 0.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn trend_data_has_three_series_in_step() {
        let trend = vec![
            TrendPoint {
                date: "2025-08-01".into(),
                positive: 4,
                negative: 1,
                neutral: 2,
            },
            TrendPoint {
                date: "2025-08-02".into(),
                positive: 6,
                negative: 0,
                neutral: 1,
            },
        ];
        let data = trend_chart_data(&trend);
        assert_eq!(data.labels, vec!["1 Agu", "2 Agu"]);
        assert_eq!(data.datasets.len(), 3);
        assert_eq!(data.datasets[0].data, vec![4.0, 6.0]);
        assert_eq!(data.datasets[1].data, vec![1.0, 0.0]);
        assert_eq!(data.datasets[2].data, vec![2.0, 1.0]);
    }

    #[test]
    fn category_data_is_capped_at_six() {
        let categories: Vec<CategorySentiment> = (0..9)
            .map(|i| CategorySentiment {
                category: format!("cat-{}", i),
                positive: i,
                negative: 0,
                neutral: 0,
            })
            .collect();
        let data = category_chart_data(&categories);
        assert_eq!(data.labels.len(), 6);
        assert_eq!(data.labels[0], "cat-0");

        let short = category_chart_data(&categories[..2]);
        assert_eq!(short.labels.len(), 2);
    }

    #[test]
    fn optional_dataset_fields_are_omitted_from_json() {
        let data = sentiment_chart_data(&SentimentDistribution::default());
        let json = serde_json::to_value(&data.datasets[0]).unwrap();
        assert!(json.get("label").is_none());
        assert!(json.get("tension").is_none());
        assert_eq!(json["borderWidth"], serde_json::json!(2.0));
    }
}
