//! 主数据维护页
//!
//! 四个页签共用同一份数据缓存；四类数据并发加载、
//! 全部就绪后一次渲染，之后的保存操作只做整体刷新。

mod product_types;
mod products;
mod sellers;
mod units;

use futures::future;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mts_purchase_shared::{Product, ProductType, Seller, Unit};

use crate::api::{ApiClient, ApiError, use_api};
use crate::components::toast::use_toast;
use crate::web::router::use_router;

use product_types::ProductTypesTab;
use products::ProductsTab;
use sellers::SellersTab;
use units::UnitsTab;

/// 维护页页签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaintenanceTab {
    Sellers,
    Units,
    ProductTypes,
    Products,
}

impl MaintenanceTab {
    const ALL: [MaintenanceTab; 4] = [
        MaintenanceTab::Sellers,
        MaintenanceTab::Units,
        MaintenanceTab::ProductTypes,
        MaintenanceTab::Products,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Sellers => "Sellers",
            Self::Units => "Units",
            Self::ProductTypes => "Product Types",
            Self::Products => "Products & Variants",
        }
    }
}

/// 页签共享的数据缓存（信号束，`Copy`）
#[derive(Clone, Copy)]
pub(crate) struct MaintenanceData {
    pub sellers: RwSignal<Vec<Seller>>,
    pub units: RwSignal<Vec<Unit>>,
    pub product_types: RwSignal<Vec<ProductType>>,
    pub products: RwSignal<Vec<Product>>,
}

impl MaintenanceData {
    fn new() -> Self {
        Self {
            sellers: RwSignal::new(Vec::new()),
            units: RwSignal::new(Vec::new()),
            product_types: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
        }
    }
}

/// 四类主数据的并发拉取
async fn refresh_data(api: &ApiClient, data: MaintenanceData) -> Result<(), ApiError> {
    let (sellers, units, product_types, products) = future::try_join4(
        api.sellers_all(),
        api.units(),
        api.product_types(),
        api.products(true),
    )
    .await?;

    let _ = data.sellers.try_set(sellers);
    let _ = data.units.try_set(units);
    let _ = data.product_types.try_set(product_types);
    let _ = data.products.try_set(products);
    Ok(())
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let router = use_router();

    let data = MaintenanceData::new();
    let (active_tab, set_active_tab) = signal(MaintenanceTab::Sellers);
    let (is_loading, set_is_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let generation = router.generation();

    // 初始加载
    {
        let api = api.clone();
        spawn_local(async move {
            let result = refresh_data(&api, data).await;
            if !router.is_current(generation) {
                return;
            }
            if let Err(error) = result {
                tracing::warn!(%error, "maintenance data load failed");
                set_load_error.set(Some(format!("Failed to load maintenance data: {error}")));
            }
            set_is_loading.set(false);
        });
    }

    // 页签内保存成功后的整体刷新
    let reload = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(error) = refresh_data(&api, data).await {
                    toast.error(error.to_string());
                }
            });
        })
    };

    view! {
        <Show when=move || is_loading.get()>
            <div class="card muted">"Loading..."</div>
        </Show>

        <Show when=move || load_error.get().is_some()>
            <div class="card">{move || load_error.get().unwrap_or_default()}</div>
        </Show>

        <Show when=move || !is_loading.get() && load_error.get().is_none()>
            <div class="page-grid">
                <section class="card">
                    <div class="section-title">
                        <h2>"Maintenance"</h2>
                        <span class="muted">"Manage master records"</span>
                    </div>
                    <div class="tab-row">
                        {MaintenanceTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tab-btn"
                                        class:active=move || active_tab.get() == tab
                                        type="button"
                                        on:click=move |_| set_active_tab.set(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
                <section>
                    {move || match active_tab.get() {
                        MaintenanceTab::Sellers => {
                            view! { <SellersTab data=data on_saved=reload /> }.into_any()
                        }
                        MaintenanceTab::Units => {
                            view! { <UnitsTab data=data on_saved=reload /> }.into_any()
                        }
                        MaintenanceTab::ProductTypes => {
                            view! { <ProductTypesTab data=data on_saved=reload /> }.into_any()
                        }
                        MaintenanceTab::Products => {
                            view! { <ProductsTab data=data on_saved=reload /> }.into_any()
                        }
                    }}
                </section>
            </div>
        </Show>
    }
}
