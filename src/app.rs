//! Todo List App
//!
//! Root component: provides the store context and lays out the card.

use leptos::prelude::*;

use crate::components::{Footer, ListHeader, NewTodoForm, TodoListView};
use crate::config::StoreConfig;
use crate::context::AppContext;

#[component]
pub fn App(#[prop(optional)] config: Option<StoreConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let owner = config.footer_owner.clone();

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <main class="todo-card">
                <ListHeader />
                <NewTodoForm />
                <TodoListView />
            </main>
            <Footer owner=owner />
        </div>
    }
}
