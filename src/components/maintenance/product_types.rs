//! 商品类型页签

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::CreateProductTypeRequest;

use super::MaintenanceData;
use crate::api::use_api;
use crate::components::toast::use_toast;

#[component]
pub(super) fn ProductTypesTab(data: MaintenanceData, on_saved: Callback<()>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (type_name, set_type_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = CreateProductTypeRequest {
            type_name: type_name.get().trim().to_string(),
            description: {
                let text = description.get().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };
        if request.type_name.is_empty() {
            toast.error("Type name is required");
            return;
        }

        let api = api.clone();
        spawn_local(async move {
            match api.create_product_type(&request).await {
                Ok(()) => {
                    toast.success("Product type saved");
                    set_type_name.try_set(String::new());
                    set_description.try_set(String::new());
                    on_saved.run(());
                }
                Err(error) => toast.error(error.to_string()),
            }
        });
    };

    view! {
        <div class="page-grid">
            <div class="card">
                <h3>"Add Product Type"</h3>
                <form class="form-grid-2" on:submit=on_submit>
                    <div>
                        <label class="label">"Type Name"</label>
                        <input
                            class="input"
                            prop:value=type_name
                            on:input=move |ev| set_type_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Description"</label>
                        <input
                            class="input"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="row">
                        <button class="btn btn-primary" type="submit">"Save Type"</button>
                    </div>
                </form>
            </div>
            <div class="card">
                <h3>"Product Type List"</h3>
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || data.product_types.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="2" class="muted">"No product types found"</td>
                                </tr>
                            </Show>
                            <For
                                each=move || data.product_types.get()
                                key=|product_type| product_type.type_id
                                children=move |product_type| {
                                    view! {
                                        <tr>
                                            <td>{product_type.type_name.clone()}</td>
                                            <td>
                                                {product_type
                                                    .description
                                                    .clone()
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
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
