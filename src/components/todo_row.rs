//! Todo Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;

/// One list entry with its delete control
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let Todo { text, id } = todo;

    view! {
        <li class="todo-row">
            <p class="todo-text">{text}</p>
            <button class="delete-btn" on:click=move |_| ctx.delete(id.clone())>"×"</button>
        </li>
    }
}
