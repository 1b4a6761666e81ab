//! 报表面板
//!
//! 三张图各带独立的日期区间表单；初次挂载三路并发加载，
//! 全部落地后一次渲染。图表句柄全部登记到 ChartRegistry，
//! 由路由的清理效果在离开（或重入）本页时销毁。

use std::cmp::Ordering;

use chrono::NaiveDate;
use futures::future;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{ProductRank, SellerRank, TrendPoint};
use serde_json::{Value, json};

use crate::api::{ApiClient, ApiError, ReportRange, use_api};
use crate::components::toast::use_toast;
use crate::util;
use crate::web::chart::{
    ChartRegistry, render_chart, set_scrollable_chart_height, use_chart_registry,
};
use crate::web::router::use_router;

/// 数值降序排序；后端排序不保证，这里自己排
fn sort_desc_by<T>(mut rows: Vec<T>, selector: impl Fn(&T) -> f64) -> Vec<T> {
    rows.sort_by(|a, b| {
        selector(b)
            .partial_cmp(&selector(a))
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn daily_trend_config(points: &[TrendPoint]) -> Value {
    let labels: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
    let values: Vec<f64> = points.iter().map(|p| p.total_purchase).collect();
    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Total Purchase",
                "data": values,
                "borderColor": "#0e67d0",
                "backgroundColor": "rgba(14,103,208,0.18)",
                "tension": 0.25,
                "fill": true,
            }],
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "display": true } },
        },
    })
}

fn top_products_config(products: &[ProductRank]) -> Value {
    let labels: Vec<&str> = products.iter().map(|p| p.product_name.as_str()).collect();
    let values: Vec<f64> = products.iter().map(|p| p.total_units).collect();
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Units",
                "data": values,
                "backgroundColor": "#0e67d0",
            }],
        },
        "options": {
            "indexAxis": "y",
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "ticks": { "autoSkip": false } } },
        },
    })
}

fn variant_drill_config(product: Option<&ProductRank>) -> Value {
    let variants = product
        .map(|p| sort_desc_by(p.variants.clone(), |v| v.total_units))
        .unwrap_or_default();
    let labels: Vec<&str> = variants.iter().map(|v| v.variant_label.as_str()).collect();
    let values: Vec<f64> = variants.iter().map(|v| v.total_units).collect();
    let title = product
        .map(|p| format!("Variant Drill-down: {}", p.product_name))
        .unwrap_or_else(|| "No variant data".to_string());
    let dataset_label = product
        .map(|p| format!("Variants: {}", p.product_name))
        .unwrap_or_else(|| "Variants".to_string());
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": dataset_label,
                "data": values,
                "backgroundColor": "#29a36a",
            }],
        },
        "options": {
            "plugins": { "title": { "display": true, "text": title } },
        },
    })
}

fn top_sellers_config(sellers: &[SellerRank]) -> Value {
    let labels: Vec<&str> = sellers.iter().map(|s| s.seller_name.as_str()).collect();
    let values: Vec<f64> = sellers.iter().map(|s| s.total_purchase).collect();
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Total Purchase",
                "data": values,
                "backgroundColor": "#8a5bd6",
            }],
        },
        "options": {
            "indexAxis": "y",
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "ticks": { "autoSkip": false } } },
        },
    })
}

/// 表单里的 from/to 输入转查询区间；空串与非法日期按缺省处理
fn range_from_inputs(from: &str, to: &str) -> ReportRange {
    let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    ReportRange {
        from: parse(from),
        to: parse(to),
    }
}

async fn load_daily_trend(api: &ApiClient, registry: ChartRegistry, range: ReportRange) -> Result<(), ApiError> {
    let trend = api.daily_trend(range).await?;
    render_chart(
        &registry,
        "reports-daily-trend",
        "chart-daily-trend",
        &daily_trend_config(&trend.points),
    );
    Ok(())
}

async fn load_top_products(
    api: &ApiClient,
    registry: ChartRegistry,
    range: ReportRange,
) -> Result<Vec<ProductRank>, ApiError> {
    let data = api.top_products(range).await?;
    let products = sort_desc_by(data.products, |p| p.total_units);
    set_scrollable_chart_height("chart-top-products", products.len());
    render_chart(
        &registry,
        "reports-top-products",
        "chart-top-products",
        &top_products_config(&products),
    );
    Ok(products)
}

fn render_variant_drill(registry: ChartRegistry, product: Option<&ProductRank>) {
    render_chart(
        &registry,
        "reports-variant-drill",
        "chart-variant-drill",
        &variant_drill_config(product),
    );
}

async fn load_top_sellers(api: &ApiClient, registry: ChartRegistry, range: ReportRange) -> Result<(), ApiError> {
    let data = api.top_sellers(range).await?;
    let sellers = sort_desc_by(data.sellers, |s| s.total_purchase);
    set_scrollable_chart_height("chart-top-sellers", sellers.len());
    render_chart(
        &registry,
        "reports-top-sellers",
        "chart-top-sellers",
        &top_sellers_config(&sellers),
    );
    Ok(())
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let router = use_router();
    let registry = use_chart_registry();

    let today = util::today().to_string();

    let (trend_from, set_trend_from) = signal(String::new());
    let (trend_to, set_trend_to) = signal(today.clone());
    let (products_from, set_products_from) = signal(String::new());
    let (products_to, set_products_to) = signal(today.clone());
    let (sellers_from, set_sellers_from) = signal(String::new());
    let (sellers_to, set_sellers_to) = signal(today.clone());

    // 商品排行的当前结果，供规格下钻选择
    let ranked_products = RwSignal::new(Vec::<ProductRank>::new());
    let (drill_index, set_drill_index) = signal(0usize);

    let generation = router.generation();

    // 初次挂载：三路并发，全部落地后统一渲染与报错
    {
        let api = api.clone();
        spawn_local(async move {
            let (trend, products, sellers) = future::join3(
                api.daily_trend(ReportRange::default()),
                api.top_products(ReportRange::default()),
                api.top_sellers(ReportRange::default()),
            )
            .await;
            if !router.is_current(generation) {
                return;
            }

            let mut first_error: Option<ApiError> = None;

            match trend {
                Ok(trend) => render_chart(
                    &registry,
                    "reports-daily-trend",
                    "chart-daily-trend",
                    &daily_trend_config(&trend.points),
                ),
                Err(error) => first_error = first_error.or(Some(error)),
            }
            match products {
                Ok(data) => {
                    let products = sort_desc_by(data.products, |p| p.total_units);
                    set_scrollable_chart_height("chart-top-products", products.len());
                    render_chart(
                        &registry,
                        "reports-top-products",
                        "chart-top-products",
                        &top_products_config(&products),
                    );
                    render_variant_drill(registry, products.first());
                    set_drill_index.set(0);
                    ranked_products.set(products);
                }
                Err(error) => first_error = first_error.or(Some(error)),
            }
            match sellers {
                Ok(data) => {
                    let sellers = sort_desc_by(data.sellers, |s| s.total_purchase);
                    set_scrollable_chart_height("chart-top-sellers", sellers.len());
                    render_chart(
                        &registry,
                        "reports-top-sellers",
                        "chart-top-sellers",
                        &top_sellers_config(&sellers),
                    );
                }
                Err(error) => first_error = first_error.or(Some(error)),
            }

            if let Some(error) = first_error {
                toast.error(format!("Could not load some charts: {error}"));
            }
        });
    }

    let on_trend_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let range = range_from_inputs(&trend_from.get(), &trend_to.get());
            let api = api.clone();
            spawn_local(async move {
                if let Err(error) = load_daily_trend(&api, registry, range).await {
                    toast.error(error.to_string());
                }
            });
        }
    };

    let on_products_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let range = range_from_inputs(&products_from.get(), &products_to.get());
            let api = api.clone();
            spawn_local(async move {
                match load_top_products(&api, registry, range).await {
                    Ok(products) => {
                        render_variant_drill(registry, products.first());
                        set_drill_index.try_set(0);
                        let _ = ranked_products.try_set(products);
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    let on_sellers_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let range = range_from_inputs(&sellers_from.get(), &sellers_to.get());
            let api = api.clone();
            spawn_local(async move {
                if let Err(error) = load_top_sellers(&api, registry, range).await {
                    toast.error(error.to_string());
                }
            });
        }
    };

    let on_drill_change = move |ev: leptos::web_sys::Event| {
        let index = event_target_value(&ev).parse::<usize>().unwrap_or(0);
        set_drill_index.set(index);
        ranked_products.with_untracked(|products| {
            render_variant_drill(registry, products.get(index));
        });
    };

    view! {
        <div class="page-grid">
            <section class="card">
                <h2>"Reporting Dashboard"</h2>
                <p class="muted">"All reports include confirmed purchase orders only."</p>
            </section>

            <section class="card">
                <div class="section-title">
                    <h3>"Graph 1: Daily Purchase Trend"</h3>
                </div>
                <form class="form-grid-2" on:submit=on_trend_submit>
                    <div>
                        <label class="label">"From"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=trend_from
                            on:change=move |ev| set_trend_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"To"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=trend_to
                            on:change=move |ev| set_trend_to.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <button class="btn btn-primary" type="submit">"Load Trend"</button>
                    </div>
                </form>
                <div class="chart-box"><canvas id="chart-daily-trend"></canvas></div>
            </section>

            <section class="card">
                <div class="section-title">
                    <h3>"Graph 2: Top Products By Units"</h3>
                </div>
                <form class="form-grid-2" on:submit=on_products_submit>
                    <div>
                        <label class="label">"From"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=products_from
                            on:change=move |ev| set_products_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"To"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=products_to
                            on:change=move |ev| set_products_to.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <button class="btn btn-primary" type="submit">"Load Product Rank"</button>
                    </div>
                </form>
                <div class="chart-grid">
                    <div class="chart-box card">
                        <p class="muted chart-hint">"Top 5 visible. Scroll to see more products."</p>
                        <div class="chart-scroll"><canvas id="chart-top-products"></canvas></div>
                    </div>
                    <div class="chart-box card">
                        <div>
                            <label class="label">"Drill-down product"</label>
                            <select class="select" on:change=on_drill_change>
                                {move || {
                                    let selected = drill_index.get();
                                    ranked_products
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, product)| {
                                            view! {
                                                <option
                                                    value=index.to_string()
                                                    selected=index == selected
                                                >
                                                    {product.product_name}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <canvas id="chart-variant-drill"></canvas>
                    </div>
                </div>
            </section>

            <section class="card">
                <div class="section-title">
                    <h3>"Graph 3: Top Sellers By Purchase Value"</h3>
                </div>
                <form class="form-grid-2" on:submit=on_sellers_submit>
                    <div>
                        <label class="label">"From"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=sellers_from
                            on:change=move |ev| set_sellers_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"To"</label>
                        <input
                            class="input"
                            type="date"
                            prop:value=sellers_to
                            on:change=move |ev| set_sellers_to.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <button class="btn btn-primary" type="submit">"Load Seller Rank"</button>
                    </div>
                </form>
                <p class="muted chart-hint">"Top 5 visible. Scroll to see more sellers."</p>
                <div class="chart-scroll"><canvas id="chart-top-sellers"></canvas></div>
            </section>
        </div>
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use mts_purchase_shared::VariantRank;

    #[test]
    fn sort_desc_by_is_defensive_about_order() {
        let rows = vec![1.0, 5.0, 3.0];
        let sorted = sort_desc_by(rows, |v| *v);
        assert_eq!(sorted, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn daily_trend_config_maps_points() {
        let points = vec![
            TrendPoint {
                date: "2026-08-01".into(),
                total_purchase: 12.5,
            },
            TrendPoint {
                date: "2026-08-02".into(),
                total_purchase: 0.0,
            },
        ];
        let config = daily_trend_config(&points);
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][0], "2026-08-01");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 12.5);
    }

    #[test]
    fn top_products_config_uses_horizontal_bars() {
        let products = vec![ProductRank {
            product_name: "Rice".into(),
            total_units: 40.0,
            variants: Vec::new(),
        }];
        let config = top_products_config(&products);
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["data"]["labels"][0], "Rice");
    }

    #[test]
    fn variant_drill_config_handles_missing_product() {
        let config = variant_drill_config(None);
        assert_eq!(config["options"]["plugins"]["title"]["text"], "No variant data");
        assert!(config["data"]["labels"].as_array().unwrap().is_empty());
    }

    #[test]
    fn variant_drill_config_sorts_variants_descending() {
        let product = ProductRank {
            product_name: "Rice".into(),
            total_units: 40.0,
            variants: vec![
                VariantRank {
                    variant_label: "5kg".into(),
                    total_units: 10.0,
                },
                VariantRank {
                    variant_label: "25kg".into(),
                    total_units: 30.0,
                },
            ],
        };
        let config = variant_drill_config(Some(&product));
        assert_eq!(config["data"]["labels"][0], "25kg");
        assert_eq!(
            config["options"]["plugins"]["title"]["text"],
            "Variant Drill-down: Rice"
        );
    }

    #[test]
    fn range_from_inputs_tolerates_garbage() {
        let range = range_from_inputs("2026-08-01", "not a date");
        assert_eq!(range.from.unwrap().to_string(), "2026-08-01");
        assert!(range.to.is_none());
        assert_eq!(range_from_inputs("", ""), ReportRange::default());
    }
}
