//! 当月采购历史表
//!
//! 草稿行展示 Edit / Confirm / Delete 操作；已确认的单据只读。

use leptos::prelude::*;
use mts_purchase_shared::PurchaseOrder;

use crate::util;

#[component]
pub fn HistoryTable(
    orders: RwSignal<Vec<PurchaseOrder>>,
    on_edit: Callback<i64>,
    on_confirm: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Seller"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Items"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || orders.with(Vec::is_empty)>
                        <tr>
                            <td colspan="6" class="muted">
                                "No purchase orders found for current month."
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || orders.get()
                        key=|order| order.order_id
                        children=move |order| {
                            let is_draft = order.status.is_draft();
                            let order_id = order.order_id;
                            let badge = if is_draft {
                                view! { <span class="badge badge-draft">"DRAFT"</span> }.into_any()
                            } else {
                                view! { <span class="badge badge-confirmed">"CONFIRMED"</span> }
                                    .into_any()
                            };
                            let item_count = order
                                .items
                                .as_ref()
                                .map(|items| items.len().to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td>{order.order_date.to_string()}</td>
                                    <td>{order.seller_name.clone().unwrap_or_default()}</td>
                                    <td>{util::format_amount(order.total_amount)}</td>
                                    <td>{badge}</td>
                                    <td>{item_count}</td>
                                    <td>
                                        <div class="row history-actions">
                                            <Show when=move || is_draft>
                                                <button
                                                    class="btn btn-info"
                                                    type="button"
                                                    on:click=move |_| on_edit.run(order_id)
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn-secondary"
                                                    type="button"
                                                    on:click=move |_| on_confirm.run(order_id)
                                                >
                                                    "Confirm"
                                                </button>
                                                <button
                                                    class="btn btn-danger"
                                                    type="button"
                                                    on:click=move |_| on_delete.run(order_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
