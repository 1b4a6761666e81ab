//! 单位页签

use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::CreateUnitRequest;

use super::MaintenanceData;
use crate::api::use_api;
use crate::components::toast::use_toast;

#[component]
pub(super) fn UnitsTab(data: MaintenanceData, on_saved: Callback<()>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let (unit_name, set_unit_name) = signal(String::new());
    let (abbreviation, set_abbreviation) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = CreateUnitRequest {
            unit_name: unit_name.get().trim().to_string(),
            abbreviation: abbreviation.get().trim().to_string(),
            description: {
                let text = description.get().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };
        if request.unit_name.is_empty() || request.abbreviation.is_empty() {
            toast.error("Unit name and abbreviation are required");
            return;
        }

        let api = api.clone();
        spawn_local(async move {
            match api.create_unit(&request).await {
                Ok(()) => {
                    toast.success("Unit saved");
                    set_unit_name.try_set(String::new());
                    set_abbreviation.try_set(String::new());
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
                <h3>"Add Unit"</h3>
                <form class="form-grid-2" on:submit=on_submit>
                    <div>
                        <label class="label">"Unit Name"</label>
                        <input
                            class="input"
                            prop:value=unit_name
                            on:input=move |ev| set_unit_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label">"Abbreviation"</label>
                        <input
                            class="input"
                            prop:value=abbreviation
                            on:input=move |ev| set_abbreviation.set(event_target_value(&ev))
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
                        <button class="btn btn-primary" type="submit">"Save Unit"</button>
                    </div>
                </form>
            </div>
            <div class="card">
                <h3>"Unit List"</h3>
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Unit"</th>
                                <th>"Abbreviation"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || data.units.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="3" class="muted">"No units found"</td>
                                </tr>
                            </Show>
                            <For
                                each=move || data.units.get()
                                key=|unit| unit.unit_id
                                children=move |unit| {
                                    view! {
                                        <tr>
                                            <td>{unit.unit_name.clone()}</td>
                                            <td>{unit.abbreviation.clone()}</td>
                                            <td>
                                                {unit
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
