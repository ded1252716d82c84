//! List Header Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Card title with the "Delete All" action
#[component]
pub fn ListHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="list-header">
            <h1>"Todo List"</h1>
            <button class="delete-all-btn" on:click=move |_| ctx.delete_all()>
                "Delete All"
            </button>
        </div>
    }
}
