//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use stockroom_core::ProductId;
use stockroom_inventory::filter::select;
use stockroom_inventory::{
    DashboardData, NewProduct, Product, ProductModalMode, StockFilter, StockStatus,
};

use crate::frontend::client;
use crate::routes::Route as Page;

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

async fn load_products() -> Result<Vec<Product>, String> {
    client()?.list_products().await.map_err(|e| e.to_string())
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <nav class="nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <A href=page.path()>{page.title()}</A> })
                    .collect_view()}
            </nav>
            <main>
                <Routes>
                    <Route path=Page::Dashboard.path() view=DashboardPage/>
                    <Route path=Page::Register.path() view=RegisterPage/>
                    <Route path=Page::Products.path() view=ProductsPage/>
                    <Route path=Page::Inventory.path() view=InventoryPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Headline counts.
#[component]
fn DashboardPage() -> impl IntoView {
    let products = create_resource(|| (), |_| async move { load_products().await });

    view! {
        <h1>{Page::Dashboard.title()}</h1>
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                products.get().map(|result| match result {
                    Ok(products) => {
                        let data = DashboardData::from_products(&products);
                        view! {
                            <div class="cards">
                                <div class="card">
                                    <h3>"Total products"</h3>
                                    <p>{data.total_product_count}</p>
                                </div>
                                <div class="card warning">
                                    <h3>"Low stock"</h3>
                                    <p>{data.low_stock_count}</p>
                                </div>
                                <div class="card danger">
                                    <h3>"Out of stock"</h3>
                                    <p>{data.out_of_stock_count}</p>
                                </div>
                            </div>
                        }
                        .into_view()
                    }
                    Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                })
            }}
        </Suspense>
    }
}

/// Registration form for a new product.
#[component]
fn RegisterPage() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let stock = create_rw_signal(0u32);
    let minimum = create_rw_signal(None::<u32>);
    let is_submitting = create_rw_signal(false);
    // Router context is only reachable while the component is being built.
    let navigate = use_navigate();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let mut request = NewProduct::new(name.get(), stock.get());
        if let Some(level) = minimum.get() {
            request = request.with_minimum_stock_level(level);
        }
        if let Err(e) = request.validate() {
            alert(&e.to_string());
            return;
        }

        is_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match client() {
                Ok(api) => api.create_product(&request).await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => navigate(Page::Products.path(), Default::default()),
                Err(e) => alert(&format!("Failed to register product: {e}")),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <h1>{Page::Register.title()}</h1>
        <form on:submit=submit>
            <div class="form-group">
                <label for="name">"Product name"</label>
                <input
                    id="name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="stock">"Current stock"</label>
                <input
                    id="stock"
                    type="number"
                    min="0"
                    prop:value=move || stock.get().to_string()
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                            stock.set(n);
                        }
                    }
                />
            </div>
            <div class="form-group">
                <label for="minimum">"Minimum stock level (optional)"</label>
                <input
                    id="minimum"
                    type="number"
                    min="0"
                    prop:value=move || minimum.get().map(|n| n.to_string()).unwrap_or_default()
                    on:input=move |ev| minimum.set(event_target_value(&ev).parse::<u32>().ok())
                />
            </div>
            <button type="submit" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "Submitting..." } else { "Register" }}
            </button>
        </form>
    }
}

/// Searchable, filterable product list.
#[component]
fn ProductsPage() -> impl IntoView {
    let products = create_resource(|| (), |_| async move { load_products().await });
    let query = create_rw_signal(String::new());
    let filter = create_rw_signal(None::<StockFilter>);

    view! {
        <h1>{Page::Products.title()}</h1>
        <div class="toolbar">
            <input
                type="search"
                placeholder="Search products"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                filter.set(value.parse::<u8>().ok().and_then(StockFilter::from_value));
            }>
                <option value="">"All"</option>
                {StockFilter::ALL
                    .into_iter()
                    .map(|f| view! { <option value=f.value.code().to_string()>{f.label}</option> })
                    .collect_view()}
            </select>
        </div>
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                products.get().map(|result| match result {
                    Ok(products) => {
                        let query = query.get();
                        let visible: Vec<Product> = select(&products, filter.get(), &query)
                            .into_iter()
                            .cloned()
                            .collect();
                        view! { <ProductTable products=visible/> }.into_view()
                    }
                    Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProductTable(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! { <p>"No products found."</p> }.into_view();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Initial"</th>
                    <th>"Current"</th>
                    <th>"Minimum"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {products
                    .into_iter()
                    .map(|p| {
                        let status = p.status();
                        view! {
                            <tr>
                                <td>{p.product_id().get()}</td>
                                <td>{p.product_name().to_string()}</td>
                                <td>{p.initial_stock()}</td>
                                <td>{p.current_stock()}</td>
                                <td>
                                    {p.minimum_stock_level().map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}
                                </td>
                                <td class=status_class(status)>{status.label()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "status in-stock",
        StockStatus::LowStock => "status low-stock",
        StockStatus::OutOfStock => "status out-of-stock",
    }
}

/// Stock levels with restock / stock-out actions.
#[component]
fn InventoryPage() -> impl IntoView {
    let reload = create_rw_signal(0u32);
    let products = create_resource(move || reload.get(), |_| async move { load_products().await });
    let modal = create_rw_signal(None::<(ProductId, ProductModalMode)>);
    let quantity = create_rw_signal(1u32);

    let confirm = move |_| {
        let Some((product_id, mode)) = modal.get() else {
            return;
        };
        let qty = quantity.get();
        spawn_local(async move {
            let api = match client() {
                Ok(api) => api,
                Err(e) => return alert(&e),
            };
            let result = match mode {
                ProductModalMode::Restock => api.restock(product_id, qty).await,
                ProductModalMode::StockOut => api.stock_out(product_id, qty).await,
                ProductModalMode::View | ProductModalMode::Edit => return,
            };
            match result {
                Ok(_) => {
                    modal.set(None);
                    quantity.set(1);
                    reload.update(|n| *n += 1);
                }
                Err(e) => alert(&format!("{}: {e}", mode.title())),
            }
        });
    };

    view! {
        <h1>{Page::Inventory.title()}</h1>
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                products.get().map(|result| match result {
                    Ok(products) => view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Stock"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {products
                                    .into_iter()
                                    .map(|p| {
                                        let id = p.product_id();
                                        let status = p.status();
                                        view! {
                                            <tr>
                                                <td>{p.product_name().to_string()}</td>
                                                <td>{p.current_stock()}</td>
                                                <td class=status_class(status)>{status.label()}</td>
                                                <td>
                                                    <button on:click=move |_| modal.set(Some((id, ProductModalMode::Restock)))>
                                                        {ProductModalMode::Restock.title()}
                                                    </button>
                                                    <button
                                                        disabled=status == StockStatus::OutOfStock
                                                        on:click=move |_| modal.set(Some((id, ProductModalMode::StockOut)))
                                                    >
                                                        {ProductModalMode::StockOut.title()}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view(),
                    Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                })
            }}
        </Suspense>
        <Show when=move || modal.get().is_some()>
            <div class="modal">
                <h2>
                    {move || modal.get().map(|(id, mode)| format!("{} #{id}", mode.title()))}
                </h2>
                <input
                    type="number"
                    min="1"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                            quantity.set(n);
                        }
                    }
                />
                <button on:click=confirm>"Confirm"</button>
                <button on:click=move |_| modal.set(None)>"Cancel"</button>
            </div>
        </Show>
    }
}
