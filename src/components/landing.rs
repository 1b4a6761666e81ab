//! 采购单录入与当月概览页
//!
//! 主数据与当月历史并发加载、共同就绪后一次渲染；
//! 历史按月内逐日扇出拉取，单日失败按空处理。

mod edit_dialog;
mod form_state;
mod history;
mod line_items;
mod type_split;

use futures::future;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{Product, PurchaseOrder, Seller};

use crate::api::{ApiClient, use_api};
use crate::components::toast::use_toast;
use crate::util;
use crate::web::chart::use_chart_registry;
use crate::web::router::use_router;

use edit_dialog::{EditOrderDialog, EditState, build_edit_state};
use form_state::{OrderFormState, build_order_request};
use history::HistoryTable;
use line_items::{LineItems, LineItemsEditor};
use type_split::{monthly_total, monthly_type_totals, render_monthly_type_chart};

/// 拉取当月全部采购单：对月内每一天并发发起列表请求，
/// 单日失败降级为空列表，汇总后按日期倒序。
async fn load_month_history(api: &ApiClient) -> Vec<PurchaseOrder> {
    let (start, end) = util::month_bounds(util::today());
    let requests = util::each_date(start, end).into_iter().map(|date| {
        let api = api.clone();
        async move { api.orders_for_date(date).await.unwrap_or_default() }
    });

    let mut orders: Vec<PurchaseOrder> = future::join_all(requests)
        .await
        .into_iter()
        .flatten()
        .collect();
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    orders
}

fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 卖家下拉（录入表单与编辑对话框共用）
#[component]
pub(crate) fn SellerSelect(sellers: RwSignal<Vec<Seller>>, value: RwSignal<String>) -> impl IntoView {
    view! {
        <select class="select" on:change=move |ev| value.set(event_target_value(&ev))>
            <option value="">"Select seller"</option>
            {move || {
                let selected = value.get();
                sellers
                    .get()
                    .into_iter()
                    .map(|seller| {
                        let option_value = seller.seller_id.to_string();
                        let is_selected = option_value == selected;
                        view! {
                            <option value=option_value selected=is_selected>{seller.name}</option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let router = use_router();
    let registry = use_chart_registry();

    let sellers = RwSignal::new(Vec::<Seller>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let orders = RwSignal::new(Vec::<PurchaseOrder>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let form = OrderFormState::new();
    let items = LineItems::new();
    let edit_state = RwSignal::new(Option::<EditState>::None);

    // 本次挂载的代数；导航离开后迟到的响应一律丢弃
    let generation = router.generation();

    let redraw_type_chart = move || {
        request_animation_frame(move || {
            products.with_untracked(|products| {
                orders.with_untracked(|orders| {
                    render_monthly_type_chart(&registry, products, orders);
                })
            });
        });
    };

    // 初始加载：卖家 + 商品 + 当月历史
    {
        let api = api.clone();
        spawn_local(async move {
            let masters = future::try_join(api.sellers(), api.products(false));
            let (masters, month) = future::join(masters, load_month_history(&api)).await;
            if !router.is_current(generation) {
                return;
            }
            match masters {
                Ok((seller_list, product_list)) => {
                    sellers.set(seller_list);
                    products.set(product_list);
                    orders.set(month);
                    set_is_loading.set(false);
                    redraw_type_chart();
                }
                Err(error) => {
                    tracing::warn!(%error, "landing data load failed");
                    set_load_error.set(Some(format!("Failed to load landing page data: {error}")));
                    set_is_loading.set(false);
                }
            }
        });
    }

    let refresh_history = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            spawn_local(async move {
                let month = load_month_history(&api).await;
                if !router.is_current(generation) {
                    return;
                }
                orders.set(month);
                redraw_type_chart();
            });
        })
    };

    let on_confirm = {
        let api = api.clone();
        Callback::new(move |order_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.confirm_order(order_id).await {
                    Ok(()) => {
                        toast.success("Order confirmed");
                        refresh_history.run(());
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        Callback::new(move |order_id: i64| {
            if !confirm_dialog("Delete this draft order?") {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete_order(order_id).await {
                    Ok(()) => {
                        toast.success("Draft order deleted");
                        refresh_history.run(());
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        })
    };

    let on_edit = {
        let api = api.clone();
        Callback::new(move |order_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match build_edit_state(&api, order_id).await {
                    Ok(state) => {
                        if router.is_current(generation) {
                            edit_state.set(Some(state));
                        }
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        })
    };

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let request = match build_order_request(&form.snapshot(), &items.inputs()) {
                Ok(request) => request,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            let api = api.clone();
            spawn_local(async move {
                match api.create_order(&request).await {
                    Ok(created) => {
                        toast.success(format!(
                            "Purchase order {} saved as draft",
                            created.order_id
                        ));
                        if confirm_dialog("Draft created. Confirm this purchase now?") {
                            match api.confirm_order(created.order_id).await {
                                Ok(()) => toast.success("Purchase order confirmed"),
                                Err(error) => toast.error(error.to_string()),
                            }
                        }
                        form.reset();
                        items.reset();
                        refresh_history.run(());
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    let monthly_total_label = move || {
        let totals = products.with(|products| {
            orders.with(|orders| monthly_type_totals(products, orders))
        });
        util::format_amount(monthly_total(&totals))
    };

    let products_signal: Signal<Vec<Product>> = products.into();

    view! {
        <Show when=move || is_loading.get()>
            <div class="card muted">"Loading..."</div>
        </Show>

        <Show when=move || load_error.get().is_some()>
            <div class="card">{move || load_error.get().unwrap_or_default()}</div>
        </Show>

        <Show when=move || !is_loading.get() && load_error.get().is_none()>
            <div class="page-grid">
                <section class="landing-top-grid">
                    <div class="card">
                        <div class="section-title">
                            <h2>"Current Month Split By Product Type"</h2>
                        </div>
                        <p class="muted">
                            "Total purchase value distribution across product types."
                        </p>
                        <div class="pie-summary-layout">
                            <div class="chart-box chart-box-compact">
                                <canvas id="chart-monthly-type-split"></canvas>
                            </div>
                            <div class="pie-total-panel">
                                <span class="muted">"Total Purchase Value"</span>
                                <strong>{monthly_total_label}</strong>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="section-title">
                            <h2>"Create Purchase Order"</h2>
                            <button
                                class="btn btn-secondary"
                                type="button"
                                on:click=move |_| items.push_empty()
                            >
                                "Add Item"
                            </button>
                        </div>
                        <form class="page-grid" on:submit=on_submit.clone()>
                            <div class="form-grid">
                                <div>
                                    <label class="label">"Seller"</label>
                                    <SellerSelect sellers=sellers value=form.seller_id />
                                </div>
                                <div>
                                    <label class="label">"Order Date"</label>
                                    <input
                                        class="input"
                                        type="date"
                                        prop:value=form.order_date
                                        on:change=move |ev| {
                                            form.order_date.set(event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div>
                                    <label class="label">"Invoice Number"</label>
                                    <input
                                        class="input"
                                        maxlength="100"
                                        prop:value=form.invoice_number
                                        on:input=move |ev| {
                                            form.invoice_number.set(event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div>
                                    <label class="label">"Remarks"</label>
                                    <input
                                        class="input"
                                        maxlength="4000"
                                        prop:value=form.remarks
                                        on:input=move |ev| {
                                            form.remarks.set(event_target_value(&ev))
                                        }
                                    />
                                </div>
                            </div>

                            <LineItemsEditor items=items products=products_signal />

                            <div class="row">
                                <button class="btn btn-primary" type="submit">"Save Draft"</button>
                            </div>
                        </form>
                    </div>
                </section>

                <section class="card">
                    <div class="section-title">
                        <h2>"Current Month Purchase History"</h2>
                        <span class="muted">"All orders (green confirmed, yellow draft)"</span>
                    </div>
                    <HistoryTable
                        orders=orders
                        on_edit=on_edit
                        on_confirm=on_confirm
                        on_delete=on_delete
                    />
                </section>
            </div>

            <EditOrderDialog
                state=edit_state
                sellers=sellers
                products=products_signal
                on_saved=refresh_history
            />
        </Show>
    }
}
