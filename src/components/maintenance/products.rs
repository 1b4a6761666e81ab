//! 商品与规格页签
//!
//! 两个表单共用主数据缓存：新增商品挂到商品类型下，
//! 新增规格挂到商品下并绑定计量单位。

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{CreateProductRequest, CreateVariantRequest};

use super::MaintenanceData;
use crate::api::use_api;
use crate::components::toast::use_toast;

#[component]
pub(super) fn ProductsTab(data: MaintenanceData, on_saved: Callback<()>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (product_name, set_product_name) = signal(String::new());
    let (product_type_id, set_product_type_id) = signal(String::new());
    let (product_description, set_product_description) = signal(String::new());

    let (variant_product_id, set_variant_product_id) = signal(String::new());
    let (variant_unit_id, set_variant_unit_id) = signal(String::new());
    let (variant_label, set_variant_label) = signal(String::new());
    let (pack_size, set_pack_size) = signal(String::new());
    let (pieces_per_pack, set_pieces_per_pack) = signal(String::new());
    let (barcode, set_barcode) = signal(String::new());

    let on_product_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = product_name.get().trim().to_string();
            let type_id = product_type_id.get().trim().parse::<i64>().ok();
            let (Some(type_id), false) = (type_id, name.is_empty()) else {
                toast.error("Product name and type are required");
                return;
            };
            let request = CreateProductRequest {
                product_name: name,
                type_id,
                description: {
                    let text = product_description.get().trim().to_string();
                    (!text.is_empty()).then_some(text)
                },
            };

            let api = api.clone();
            spawn_local(async move {
                match api.create_product(&request).await {
                    Ok(()) => {
                        toast.success("Product saved");
                        set_product_name.try_set(String::new());
                        set_product_type_id.try_set(String::new());
                        set_product_description.try_set(String::new());
                        on_saved.run(());
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    let on_variant_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let product_id = variant_product_id.get().trim().parse::<i64>().ok();
            let unit_id = variant_unit_id.get().trim().parse::<i64>().ok();
            let label = variant_label.get().trim().to_string();
            let pack_size = pack_size.get().trim().parse::<f64>().ok().filter(|v| *v > 0.0);
            let pieces = pieces_per_pack
                .get()
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|v| *v >= 1);

            let (Some(product_id), Some(unit_id), Some(pack_size), Some(pieces_per_pack)) =
                (product_id, unit_id, pack_size, pieces)
            else {
                toast.error("Product, unit, label, pack size, and pieces per pack are required");
                return;
            };
            if label.is_empty() {
                toast.error("Product, unit, label, pack size, and pieces per pack are required");
                return;
            }

            let request = CreateVariantRequest {
                unit_id,
                variant_label: label,
                pack_size,
                pieces_per_pack,
                barcode: {
                    let text = barcode.get().trim().to_string();
                    (!text.is_empty()).then_some(text)
                },
            };

            let api = api.clone();
            spawn_local(async move {
                match api.add_variant(product_id, &request).await {
                    Ok(()) => {
                        toast.success("Variant saved");
                        set_variant_product_id.try_set(String::new());
                        set_variant_unit_id.try_set(String::new());
                        set_variant_label.try_set(String::new());
                        set_pack_size.try_set(String::new());
                        set_pieces_per_pack.try_set(String::new());
                        set_barcode.try_set(String::new());
                        on_saved.run(());
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    view! {
        <div class="page-grid">
            <div class="card">
                <h3>"Add Product"</h3>
                <form class="form-grid" on:submit=on_product_submit>
                    <div>
                        <label class="label">"Product Name"</label>
                        <input
                            class="input"
                            prop:value=product_name
                            on:input=move |ev| set_product_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Type"</label>
                        <select
                            class="select"
                            on:change=move |ev| set_product_type_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select type"</option>
                            {move || {
                                let selected = product_type_id.get();
                                data.product_types
                                    .get()
                                    .into_iter()
                                    .map(|product_type| {
                                        let value = product_type.type_id.to_string();
                                        let is_selected = value == selected;
                                        view! {
                                            <option value=value selected=is_selected>
                                                {product_type.type_name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div>
                        <label class="label">"Description"</label>
                        <input
                            class="input"
                            prop:value=product_description
                            on:input=move |ev| set_product_description.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="row">
                        <button class="btn btn-primary" type="submit">"Save Product"</button>
                    </div>
                </form>
            </div>

            <div class="card">
                <h3>"Add Product Variant"</h3>
                <form class="form-grid" on:submit=on_variant_submit>
                    <div>
                        <label class="label">"Product"</label>
                        <select
                            class="select"
                            on:change=move |ev| set_variant_product_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select product"</option>
                            {move || {
                                let selected = variant_product_id.get();
                                data.products
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
                        <label class="label">"Unit"</label>
                        <select
                            class="select"
                            on:change=move |ev| set_variant_unit_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select unit"</option>
                            {move || {
                                let selected = variant_unit_id.get();
                                data.units
                                    .get()
                                    .into_iter()
                                    .map(|unit| {
                                        let value = unit.unit_id.to_string();
                                        let is_selected = value == selected;
                                        let label =
                                            format!("{} ({})", unit.unit_name, unit.abbreviation);
                                        view! {
                                            <option value=value selected=is_selected>{label}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div>
                        <label class="label">"Variant Label"</label>
                        <input
                            class="input"
                            prop:value=variant_label
                            on:input=move |ev| set_variant_label.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Pack Size"</label>
                        <input
                            class="input"
                            type="number"
                            step="0.001"
                            prop:value=pack_size
                            on:input=move |ev| set_pack_size.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Pieces Per Pack"</label>
                        <input
                            class="input"
                            type="number"
                            min="1"
                            prop:value=pieces_per_pack
                            on:input=move |ev| set_pieces_per_pack.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Barcode"</label>
                        <input
                            class="input"
                            prop:value=barcode
                            on:input=move |ev| set_barcode.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="row">
                        <button class="btn btn-primary" type="submit">"Save Variant"</button>
                    </div>
                </form>
            </div>

            <div class="card">
                <h3>"Product List"</h3>
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Type"</th>
                                <th>"Variants"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || data.products.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="3" class="muted">"No products found"</td>
                                </tr>
                            </Show>
                            <For
                                each=move || data.products.get()
                                key=|product| product.product_id
                                children=move |product| {
                                    let variant_count = product
                                        .variants
                                        .as_ref()
                                        .map(Vec::len)
                                        .unwrap_or(0);
                                    view! {
                                        <tr>
                                            <td>{product.product_name.clone()}</td>
                                            <td>
                                                {product
                                                    .type_name
                                                    .clone()
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td>{variant_count}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
