use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{InventoryItem, NewTransaction, Transaction, TransactionType};
use crate::services::api;
use crate::utils::dialog;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    View,
    Record,
}

fn reload(
    transactions: UseStateHandle<Vec<Transaction>>,
    inventory: UseStateHandle<Vec<InventoryItem>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        // Independent reads, issued together and joined before rendering
        let (transactions_result, inventory_result) =
            futures::join!(api::get_all_transactions(), api::get_all_inventory());

        match transactions_result {
            Ok(response) => {
                transactions.set(response.transactions);
                error.set(None);
            }
            Err(e) => {
                log::error!("❌ Failed to load transactions: {}", e);
                error.set(Some("Failed to load transactions".to_string()));
            }
        }
        match inventory_result {
            Ok(response) => inventory.set(response.items),
            Err(e) => log::error!("❌ Failed to load inventory for item select: {}", e),
        }
        loading.set(false);
    });
}

#[function_component(Transactions)]
pub fn transactions() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let inventory = use_state(Vec::<InventoryItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let active_tab = use_state(|| Tab::View);
    let transaction_type = use_state(|| TransactionType::StockIn);
    let notice = use_state(|| None::<String>);

    let item_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let reason_ref = use_node_ref();
    let reference_ref = use_node_ref();

    {
        let transactions = transactions.clone();
        let inventory = inventory.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            reload(transactions, inventory, loading, error);
            || ()
        });
    }

    let select_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let select_type = |kind: TransactionType| {
        let transaction_type = transaction_type.clone();
        Callback::from(move |_: MouseEvent| transaction_type.set(kind))
    };

    let on_submit = {
        let item_ref = item_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let reason_ref = reason_ref.clone();
        let reference_ref = reference_ref.clone();
        let transaction_type = transaction_type.clone();
        let transactions = transactions.clone();
        let inventory = inventory.clone();
        let loading = loading.clone();
        let error = error.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(item_select), Some(quantity_input), Some(reason_input), Some(reference_input)) = (
                item_ref.cast::<HtmlSelectElement>(),
                quantity_ref.cast::<HtmlInputElement>(),
                reason_ref.cast::<HtmlInputElement>(),
                reference_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let Ok(inventory_id) = item_select.value().parse::<i64>() else {
                dialog::alert("Please select an item");
                return;
            };
            let Ok(quantity) = quantity_input.value().parse::<f64>() else {
                dialog::alert("Quantity must be a number");
                return;
            };

            let transaction = NewTransaction {
                inventory_id,
                quantity,
                reason: reason_input.value(),
                reference_no: reference_input.value(),
            };
            let kind = *transaction_type;

            let transactions = transactions.clone();
            let inventory = inventory.clone();
            let loading = loading.clone();
            let error = error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match kind {
                    TransactionType::StockIn => api::stock_in(&transaction).await,
                    TransactionType::StockOut => api::stock_out(&transaction).await,
                    TransactionType::Waste => api::record_waste(&transaction).await,
                };
                match result {
                    Ok(_) => {
                        log::info!(
                            "💰 Recorded {} of {} for item {}",
                            kind.as_str(),
                            transaction.quantity,
                            transaction.inventory_id
                        );
                        item_select.set_value("");
                        quantity_input.set_value("");
                        reason_input.set_value("");
                        reference_input.set_value("");
                        reload(transactions, inventory, loading, error);
                        notice.set(Some("Transaction recorded successfully!".to_string()));
                        Timeout::new(3_000, {
                            let notice = notice.clone();
                            move || notice.set(None)
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to record transaction: {}", e);
                        dialog::alert(e.server_message().unwrap_or("Failed to record transaction"));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{ "Loading transactions..." }</div> };
    }

    let tab_class = |tab: Tab| {
        if *active_tab == tab {
            "tab active"
        } else {
            "tab"
        }
    };
    let type_class = |kind: TransactionType| {
        if *transaction_type == kind {
            "type-btn active"
        } else {
            "type-btn"
        }
    };

    html! {
        <div class="transactions-page">
            <h1>{ "💰 Transactions" }</h1>

            if let Some(message) = (*error).clone() {
                <div class="error-message">{ message }</div>
            }
            if let Some(message) = (*notice).clone() {
                <div class="success-message">{ message }</div>
            }

            <div class="tabs">
                <button class={tab_class(Tab::View)} onclick={select_tab(Tab::View)}>
                    { "View Transactions" }
                </button>
                <button class={tab_class(Tab::Record)} onclick={select_tab(Tab::Record)}>
                    { "Record Transaction" }
                </button>
            </div>

            if *active_tab == Tab::Record {
                <div class="transaction-form-container">
                    <div class="type-selector">
                        { for [TransactionType::StockIn, TransactionType::StockOut, TransactionType::Waste]
                            .into_iter()
                            .map(|kind| html! {
                                <button class={type_class(kind)} onclick={select_type(kind)}>
                                    { kind.label() }
                                </button>
                            }) }
                    </div>

                    <form onsubmit={on_submit} class="transaction-form">
                        <select ref={item_ref} required=true>
                            <option value="">{ "Select Item" }</option>
                            { for inventory.iter().map(|item| html! {
                                <option value={item.id.to_string()}>
                                    { format!("{} (Current: {} {})", item.item_name, item.quantity, item.unit) }
                                </option>
                            }) }
                        </select>

                        <input
                            type="number"
                            step="0.01"
                            placeholder="Quantity *"
                            ref={quantity_ref}
                            required=true
                        />
                        <input type="text" placeholder="Reason" ref={reason_ref} />
                        <input type="text" placeholder="Reference Number" ref={reference_ref} />

                        <button type="submit" class="submit-transaction-btn">
                            { "Record Transaction" }
                        </button>
                    </form>
                </div>
            }

            if *active_tab == Tab::View {
                <div class="transactions-list">
                    { for transactions.iter().map(|transaction| html! {
                        <div key={transaction.id} class={format!("transaction-card {}", transaction.transaction_type)}>
                            <div class="trans-header">
                                <span class={format!("trans-type {}", transaction.transaction_type)}>
                                    { transaction.transaction_type.replace('_', " ").to_uppercase() }
                                </span>
                                <span class="trans-date">{ &transaction.timestamp }</span>
                            </div>
                            <div class="trans-body">
                                <p><strong>{ &transaction.item_name }</strong></p>
                                <p>{ format!("Quantity: {}", transaction.quantity) }</p>
                                <p>{ format!("Before: {} → After: {}", transaction.previous_quantity, transaction.new_quantity) }</p>
                                if let Some(reason) = &transaction.reason {
                                    <p>{ format!("Reason: {}", reason) }</p>
                                }
                                if transaction.is_flagged {
                                    <span class="flagged-badge">{ "⚠️ Flagged" }</span>
                                }
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
