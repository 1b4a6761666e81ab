//! 草稿编辑对话框
//!
//! 单据明细只带 variantId，编辑时需要逐项解析出所属商品与
//! 兄弟规格列表；解析是顺序依赖调用，同一 id 在一次解析内记忆化。

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{Product, Seller, Variant};

use super::SellerSelect;
use super::form_state::{OrderFormState, build_order_request};
use super::line_items::{LineItems, LineItemsEditor};
use crate::api::{ApiClient, ApiError, use_api};
use crate::components::toast::use_toast;

/// 对话框持有的可编辑状态
#[derive(Clone, Copy)]
pub struct EditState {
    pub order_id: i64,
    pub form: OrderFormState,
    pub items: LineItems,
}

/// 把一张草稿解析为可编辑状态
pub async fn build_edit_state(api: &ApiClient, order_id: i64) -> Result<EditState, ApiError> {
    let order = api.order_by_id(order_id).await?;

    let form = OrderFormState::new();
    form.load(
        order.seller_id,
        order.order_date,
        order.invoice_number.clone(),
        order.remarks.clone(),
    );

    let items = LineItems::new();
    let mut variant_cache: HashMap<i64, Variant> = HashMap::new();
    let mut siblings_cache: HashMap<i64, Vec<Variant>> = HashMap::new();
    let mut rows = Vec::new();

    for item in order.items.unwrap_or_default() {
        let variant = match variant_cache.get(&item.variant_id) {
            Some(variant) => variant.clone(),
            None => {
                let variant = api.variant_by_id(item.variant_id).await?;
                variant_cache.insert(item.variant_id, variant.clone());
                variant
            }
        };
        let siblings = match siblings_cache.get(&variant.product_id) {
            Some(list) => list.clone(),
            None => {
                let list = api.product_variants(variant.product_id).await?;
                siblings_cache.insert(variant.product_id, list.clone());
                list
            }
        };

        let row = items.new_item();
        row.product_id.set(variant.product_id.to_string());
        row.variant_id.set(item.variant_id.to_string());
        row.variants.set(siblings);
        row.unit_name.set(
            variant
                .unit_name
                .clone()
                .or(item.unit_abbr)
                .unwrap_or_default(),
        );
        row.quantity.set(item.quantity.to_string());
        row.rate_per_unit.set(item.rate_per_unit.to_string());
        rows.push(row);
    }
    items.replace(rows);

    Ok(EditState {
        order_id,
        form,
        items,
    })
}

#[component]
pub fn EditOrderDialog(
    state: RwSignal<Option<EditState>>,
    sellers: RwSignal<Vec<Seller>>,
    products: Signal<Vec<Product>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let make_save = {
        let api = api.clone();
        move |confirm_after: bool| {
            let api = api.clone();
            move |_ev: leptos::web_sys::MouseEvent| {
                let Some(edit) = state.get_untracked() else {
                    return;
                };
                let request = match build_order_request(&edit.form.snapshot(), &edit.items.inputs())
                {
                    Ok(request) => request,
                    Err(message) => {
                        toast.error(message);
                        return;
                    }
                };

                let api = api.clone();
                spawn_local(async move {
                    let result = async {
                        api.update_order(edit.order_id, &request).await?;
                        if confirm_after {
                            api.confirm_order(edit.order_id).await?;
                        }
                        Ok::<(), ApiError>(())
                    }
                    .await;

                    match result {
                        Ok(()) => {
                            toast.success(if confirm_after {
                                "Draft saved and confirmed"
                            } else {
                                "Draft order updated"
                            });
                            let _ = state.try_set(None);
                            on_saved.run(());
                        }
                        Err(error) => toast.error(error.to_string()),
                    }
                });
            }
        }
    };
    let save_draft = make_save(false);
    let save_and_confirm = make_save(true);

    move || {
        state
            .get()
            .map(|edit| {
                let save_draft = save_draft.clone();
                let save_and_confirm = save_and_confirm.clone();
                view! {
                    <div class="modal-backdrop">
                        <div class="modal-card">
                            <div class="section-title">
                                <h3>{format!("Edit Draft #{}", edit.order_id)}</h3>
                                <button
                                    class="btn btn-secondary"
                                    type="button"
                                    on:click=move |_| state.set(None)
                                >
                                    "Close"
                                </button>
                            </div>

                            <form class="page-grid" on:submit=|ev| ev.prevent_default()>
                                <div class="form-grid">
                                    <div>
                                        <label class="label">"Seller"</label>
                                        <SellerSelect sellers=sellers value=edit.form.seller_id />
                                    </div>
                                    <div>
                                        <label class="label">"Order Date"</label>
                                        <input
                                            class="input"
                                            type="date"
                                            prop:value=edit.form.order_date
                                            on:change=move |ev| {
                                                edit.form.order_date.set(event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div>
                                        <label class="label">"Invoice Number"</label>
                                        <input
                                            class="input"
                                            maxlength="100"
                                            prop:value=edit.form.invoice_number
                                            on:input=move |ev| {
                                                edit.form.invoice_number.set(event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div>
                                        <label class="label">"Remarks"</label>
                                        <input
                                            class="input"
                                            maxlength="4000"
                                            prop:value=edit.form.remarks
                                            on:input=move |ev| {
                                                edit.form.remarks.set(event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                </div>

                                <div class="section-title">
                                    <h3>"Items"</h3>
                                    <button
                                        class="btn btn-secondary"
                                        type="button"
                                        on:click=move |_| edit.items.push_empty()
                                    >
                                        "Add Item"
                                    </button>
                                </div>

                                <LineItemsEditor items=edit.items products=products />

                                <div class="row">
                                    <button
                                        class="btn btn-secondary"
                                        type="button"
                                        on:click=save_draft
                                    >
                                        "Save Draft"
                                    </button>
                                    <button
                                        class="btn btn-primary"
                                        type="button"
                                        on:click=save_and_confirm
                                    >
                                        "Save & Confirm"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
                .into_any()
            })
            .unwrap_or_else(|| ().into_any())
    }
}
