//! 卖家页签：新增表单 + 全量列表（含停用）

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::CreateSellerRequest;

use super::MaintenanceData;
use crate::api::use_api;
use crate::components::toast::use_toast;

#[component]
pub(super) fn SellersTab(data: MaintenanceData, on_saved: Callback<()>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (name, set_name) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = CreateSellerRequest {
            name: name.get().trim().to_string(),
            contact_person: contact.get().trim().to_string(),
            phone: non_empty(&phone.get()),
            email: non_empty(&email.get()),
        };
        if request.name.is_empty() || request.contact_person.is_empty() {
            toast.error("Name and contact person are required");
            return;
        }

        let api = api.clone();
        spawn_local(async move {
            match api.create_seller(&request).await {
                Ok(()) => {
                    toast.success("Seller saved");
                    set_name.try_set(String::new());
                    set_contact.try_set(String::new());
                    set_phone.try_set(String::new());
                    set_email.try_set(String::new());
                    on_saved.run(());
                }
                Err(error) => toast.error(error.to_string()),
            }
        });
    };

    view! {
        <div class="page-grid">
            <div class="card">
                <h3>"Add Seller"</h3>
                <form class="form-grid" on:submit=on_submit>
                    <div>
                        <label class="label">"Name"</label>
                        <input
                            class="input"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Contact Person"</label>
                        <input
                            class="input"
                            prop:value=contact
                            on:input=move |ev| set_contact.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Phone"</label>
                        <input
                            class="input"
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Email"</label>
                        <input
                            class="input"
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="row">
                        <button class="btn btn-primary" type="submit">"Save Seller"</button>
                    </div>
                </form>
            </div>
            <div class="card">
                <h3>"Seller List"</h3>
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Contact"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || data.sellers.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="4" class="muted">"No sellers found"</td>
                                </tr>
                            </Show>
                            <For
                                each=move || data.sellers.get()
                                key=|seller| seller.seller_id
                                children=move |seller| {
                                    view! {
                                        <tr>
                                            <td>{seller.name.clone()}</td>
                                            <td>{seller.contact_person.clone()}</td>
                                            <td>
                                                {seller.phone.clone().unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td>{if seller.active { "Active" } else { "Inactive" }}</td>
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

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
