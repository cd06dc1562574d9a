use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{InventoryItem, NewInventoryItem};
use crate::services::api;
use crate::utils::dialog;

fn reload(
    items: UseStateHandle<Vec<InventoryItem>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_all_inventory().await {
            Ok(response) => {
                items.set(response.items);
                error.set(None);
            }
            Err(e) => {
                // Keep whatever list is already on screen
                log::error!("❌ Failed to load inventory: {}", e);
                error.set(Some("Failed to load inventory".to_string()));
            }
        }
        loading.set(false);
    });
}

#[function_component(Inventory)]
pub fn inventory() -> Html {
    let items = use_state(Vec::<InventoryItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let show_add_form = use_state(|| false);

    let name_ref = use_node_ref();
    let category_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let unit_ref = use_node_ref();
    let reorder_ref = use_node_ref();
    let price_ref = use_node_ref();
    let supplier_ref = use_node_ref();

    {
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            reload(items, loading, error);
            || ()
        });
    }

    let toggle_add_form = {
        let show_add_form = show_add_form.clone();
        Callback::from(move |_: MouseEvent| show_add_form.set(!*show_add_form))
    };

    let on_add = {
        let name_ref = name_ref.clone();
        let category_ref = category_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let unit_ref = unit_ref.clone();
        let reorder_ref = reorder_ref.clone();
        let price_ref = price_ref.clone();
        let supplier_ref = supplier_ref.clone();
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();
        let show_add_form = show_add_form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node_ref: &NodeRef| {
                node_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let Ok(quantity) = value(&quantity_ref).parse::<f64>() else {
                dialog::alert("Quantity must be a number");
                return;
            };
            let supplier = value(&supplier_ref);
            let new_item = NewInventoryItem {
                item_name: value(&name_ref),
                category: value(&category_ref),
                quantity,
                unit: value(&unit_ref),
                reorder_level: value(&reorder_ref).parse().unwrap_or(0.0),
                unit_price: value(&price_ref).parse().unwrap_or(0.0),
                supplier_name: (!supplier.is_empty()).then_some(supplier),
            };

            let items = items.clone();
            let loading = loading.clone();
            let error = error.clone();
            let show_add_form = show_add_form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::add_inventory(&new_item).await {
                    Ok(_) => {
                        log::info!("📦 Added inventory item {}", new_item.item_name);
                        show_add_form.set(false);
                        reload(items, loading, error);
                        dialog::alert("Item added successfully!");
                    }
                    Err(e) => {
                        log::error!("❌ Failed to add item: {}", e);
                        dialog::alert(e.server_message().unwrap_or("Failed to add item"));
                    }
                }
            });
        })
    };

    let on_delete = {
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |id: i64| {
            if !dialog::confirm("Are you sure you want to delete this item?") {
                return;
            }
            let items = items.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_inventory(id).await {
                    Ok(()) => {
                        log::info!("🗑️ Deleted inventory item {}", id);
                        reload(items, loading, error);
                        dialog::alert("Item deleted successfully!");
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete item {}: {}", id, e);
                        dialog::alert(e.server_message().unwrap_or("Failed to delete item"));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{ "Loading inventory..." }</div> };
    }

    html! {
        <div class="inventory-page">
            <div class="page-header">
                <h1>{ "📦 Inventory Management" }</h1>
                <button class="add-btn" onclick={toggle_add_form.clone()}>
                    { "+ Add New Item" }
                </button>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="error-message">{ message }</div>
            }

            if *show_add_form {
                <div class="add-form-container">
                    <form onsubmit={on_add} class="add-form">
                        <h3>{ "Add New Item" }</h3>
                        <div class="form-row">
                            <input type="text" placeholder="Item Name *" ref={name_ref} required=true />
                            <input type="text" placeholder="Category *" ref={category_ref} required=true />
                        </div>
                        <div class="form-row">
                            <input type="number" step="0.01" placeholder="Quantity *" ref={quantity_ref} required=true />
                            <input type="text" placeholder="Unit (kg, pcs, liters) *" ref={unit_ref} required=true />
                        </div>
                        <div class="form-row">
                            <input type="number" step="0.01" placeholder="Reorder Level" ref={reorder_ref} />
                            <input type="number" step="0.01" placeholder="Unit Price" ref={price_ref} />
                        </div>
                        <input type="text" placeholder="Supplier Name" ref={supplier_ref} />
                        <div class="form-buttons">
                            <button type="submit" class="submit-btn">{ "Add Item" }</button>
                            <button type="button" class="cancel-btn" onclick={toggle_add_form}>
                                { "Cancel" }
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="inventory-grid">
                { for items.iter().map(|item| {
                    let on_delete = on_delete.clone();
                    let id = item.id;
                    html! {
                        <div key={item.id} class="inventory-card">
                            <div class="card-header">
                                <h3>{ &item.item_name }</h3>
                                <button class="delete-icon" onclick={move |_| on_delete.emit(id)}>
                                    { "🗑️" }
                                </button>
                            </div>
                            <div class="card-body">
                                <p><strong>{ "Category: " }</strong>{ &item.category }</p>
                                <p><strong>{ "Quantity: " }</strong>{ format!("{} {}", item.quantity, item.unit) }</p>
                                <p><strong>{ "Reorder Level: " }</strong>{ format!("{} {}", item.reorder_level, item.unit) }</p>
                                <p><strong>{ "Unit Price: " }</strong>{ format!("${}", item.unit_price) }</p>
                                if let Some(supplier) = &item.supplier_name {
                                    <p><strong>{ "Supplier: " }</strong>{ supplier }</p>
                                }
                                if item.is_low_stock() {
                                    <div class="low-stock-badge">{ "⚠️ Low Stock" }</div>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
