//! 行项目编辑器
//!
//! 每行的字段是独立信号：数量/单价输入只做属性级更新，
//! 不重建子树，避免输入焦点丢失；增删行走键控 `<For>` 重建。

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{Product, Variant};

use super::form_state::LineItemInput;
use crate::api::use_api;
use crate::components::toast::use_toast;
use crate::util;

/// 单条行项目（信号束，`Copy`）
#[derive(Clone, Copy)]
pub struct LineItem {
    /// `<For>` 的稳定键
    pub id: u64,
    pub product_id: RwSignal<String>,
    pub variant_id: RwSignal<String>,
    /// 当前所选商品的规格列表（选中商品后异步拉取）
    pub variants: RwSignal<Vec<Variant>>,
    /// 选中规格后自动带出，只读展示
    pub unit_name: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub rate_per_unit: RwSignal<String>,
}

impl LineItem {
    fn new(id: u64) -> Self {
        Self {
            id,
            product_id: RwSignal::new(String::new()),
            variant_id: RwSignal::new(String::new()),
            variants: RwSignal::new(Vec::new()),
            unit_name: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            rate_per_unit: RwSignal::new(String::new()),
        }
    }

    pub fn input(&self) -> LineItemInput {
        LineItemInput {
            variant_id: self.variant_id.get_untracked(),
            quantity: self.quantity.get_untracked(),
            rate_per_unit: self.rate_per_unit.get_untracked(),
        }
    }
}

/// 行项目集合句柄
#[derive(Clone, Copy)]
pub struct LineItems {
    items: RwSignal<Vec<LineItem>>,
    next_id: StoredValue<u64>,
}

impl LineItems {
    /// 初始带一条空行
    pub fn new() -> Self {
        let handle = Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        handle.push_empty();
        handle
    }

    pub fn items_signal(&self) -> RwSignal<Vec<LineItem>> {
        self.items
    }

    /// 新建一行（分配稳定 id，但不加入集合）
    pub fn new_item(&self) -> LineItem {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        LineItem::new(id)
    }

    pub fn push_empty(&self) {
        let item = self.new_item();
        self.items.update(|items| items.push(item));
    }

    /// 删除一行；删空后保底补回一条空行
    pub fn remove(&self, id: u64) {
        self.items.update(|items| items.retain(|item| item.id != id));
        if self.items.with_untracked(Vec::is_empty) {
            self.push_empty();
        }
    }

    /// 整体替换（编辑对话框载入）；空列表按一条空行处理
    pub fn replace(&self, rows: Vec<LineItem>) {
        if rows.is_empty() {
            self.items.set(Vec::new());
            self.push_empty();
        } else {
            self.items.set(rows);
        }
    }

    pub fn reset(&self) {
        self.replace(Vec::new());
    }

    pub fn inputs(&self) -> Vec<LineItemInput> {
        self.items
            .with_untracked(|items| items.iter().map(LineItem::input).collect())
    }
}

impl Default for LineItems {
    fn default() -> Self {
        Self::new()
    }
}

/// 行项目编辑块
#[component]
pub fn LineItemsEditor(items: LineItems, products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <For
            each=move || items.items_signal().get()
            key=|item| item.id
            children=move |item| view! { <LineItemRow item=item items=items products=products /> }
        />
    }
}

#[component]
fn LineItemRow(item: LineItem, items: LineItems, products: Signal<Vec<Product>>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let on_product_change = move |ev: leptos::web_sys::Event| {
        let value = event_target_value(&ev);
        item.product_id.set(value.clone());
        item.variant_id.set(String::new());
        item.unit_name.set(String::new());
        item.variants.set(Vec::new());

        let Ok(product_id) = value.parse::<i64>() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            match api.product_variants(product_id).await {
                Ok(variants) => {
                    // 响应落地时该行可能已被删除或改选了别的商品
                    if item.product_id.try_get_untracked() == Some(value) {
                        item.variants.set(variants);
                    }
                }
                Err(error) => toast.error(error.to_string()),
            }
        });
    };

    let on_variant_change = move |ev: leptos::web_sys::Event| {
        let value = event_target_value(&ev);
        item.variant_id.set(value.clone());
        let unit = item.variants.with_untracked(|variants| {
            variants
                .iter()
                .find(|variant| variant.variant_id.to_string() == value)
                .map(|variant| {
                    variant
                        .unit_name
                        .clone()
                        .or_else(|| variant.unit_abbr.clone())
                        .unwrap_or_default()
                })
        });
        item.unit_name.set(unit.unwrap_or_default());
    };

    let line_total = move || util::line_total(&item.quantity.get(), &item.rate_per_unit.get());

    view! {
        <div class="item-row">
            <div class="form-grid">
                <div>
                    <label class="label">"Product"</label>
                    <select class="select" on:change=on_product_change>
                        <option value="">"Select product"</option>
                        {move || {
                            let selected = item.product_id.get();
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let value = product.product_id.to_string();
                                    let is_selected = value == selected;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {product.product_name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div>
                    <label class="label">"Variant"</label>
                    <select class="select" on:change=on_variant_change>
                        <option value="">"Select variant"</option>
                        {move || {
                            let selected = item.variant_id.get();
                            item.variants
                                .get()
                                .into_iter()
                                .map(|variant| {
                                    let value = variant.variant_id.to_string();
                                    let is_selected = value == selected;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {variant.variant_label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div>
                    <label class="label">"Unit (auto)"</label>
                    <input class="input" readonly prop:value=item.unit_name />
                </div>
                <div>
                    <label class="label">"Quantity"</label>
                    <input
                        class="input"
                        type="number"
                        step="0.001"
                        min="0.001"
                        prop:value=item.quantity
                        on:input=move |ev| item.quantity.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="label">"Rate / Unit"</label>
                    <input
                        class="input"
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=item.rate_per_unit
                        on:input=move |ev| item.rate_per_unit.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="label">"Line Total"</label>
                    <input class="input" readonly prop:value=line_total />
                </div>
                <div class="row">
                    <button
                        class="btn btn-danger"
                        type="button"
                        on:click=move |_| items.remove(item.id)
                    >
                        "Remove Line"
                    </button>
                </div>
            </div>
        </div>
    }
}
