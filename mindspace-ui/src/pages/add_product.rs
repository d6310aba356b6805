//! Add Product Page
//!
//! Form for adding a wellness product to the store. The submit is simulated:
//! the draft is logged to the console and cleared after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::state::session::use_session;

const SUBMIT_DELAY_MS: u32 = 2_000;

/// Product draft as entered in the form
#[derive(Debug, Clone, Serialize)]
struct ProductDraft {
    name: String,
    price: String,
    description: String,
    category: String,
    image_count: usize,
}

/// Product entry page component
#[component]
pub fn AddProduct() -> impl IntoView {
    let state = use_session();

    let (name, set_name) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (image_count, set_image_count) = create_signal(0usize);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ProductDraft {
            name: name.get(),
            price: price.get(),
            description: description.get(),
            category: category.get(),
            image_count: image_count.get(),
        };

        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            if let Ok(json) = serde_json::to_string(&draft) {
                web_sys::console::log_2(&"Submitting product:".into(), &json.into());
            }

            TimeoutFuture::new(SUBMIT_DELAY_MS).await;

            state.show_success("Product added successfully!");
            set_name.set(String::new());
            set_price.set(String::new());
            set_description.set(String::new());
            set_category.set(String::new());
            set_image_count.set(0);
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center p-6">
            <div class="bg-white rounded-2xl shadow-md p-8 max-w-lg w-full">
                <h1 class="text-2xl font-bold text-gray-900">"Add a New Product"</h1>
                <p class="text-sm text-gray-500 mt-1 mb-6">
                    "Fill out the form below to add a product to your store."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <FormField label="Product Name">
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class=FIELD_CLASS
                        />
                    </FormField>

                    <FormField label="Price ($)">
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            required
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                            class=FIELD_CLASS
                        />
                    </FormField>

                    <FormField label="Description">
                        <textarea
                            required
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class=FIELD_CLASS
                        />
                    </FormField>

                    <FormField label="Category">
                        <input
                            type="text"
                            required
                            prop:value=move || category.get()
                            on:input=move |ev| set_category.set(event_target_value(&ev))
                            class=FIELD_CLASS
                        />
                    </FormField>

                    <FormField label="Product Images">
                        <input
                            type="file"
                            multiple
                            required
                            accept="image/*"
                            on:change=move |ev| {
                                let count = ev.target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                    .and_then(|input| input.files())
                                    .map(|files| files.length() as usize)
                                    .unwrap_or(0);
                                set_image_count.set(count);
                            }
                            class="mt-1 block w-full text-sm text-gray-500
                                   file:mr-4 file:py-2 file:px-4 file:rounded-full file:border-0
                                   file:text-sm file:font-semibold file:bg-purple-50
                                   file:text-purple-700 hover:file:bg-purple-100"
                        />
                    </FormField>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-purple-600 hover:bg-purple-700 disabled:bg-gray-400
                               disabled:cursor-not-allowed text-white rounded-lg py-3
                               font-semibold transition-colors flex items-center justify-center"
                    >
                        {move || if submitting.get() { "Adding..." } else { "Add Product" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-gray-300 shadow-sm \
                           focus:border-purple-500 focus:ring-purple-500 sm:text-sm p-2";

#[component]
fn FormField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            {children()}
        </div>
    }
}
