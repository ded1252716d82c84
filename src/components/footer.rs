//! Footer Component

use chrono::Datelike;
use leptos::prelude::*;

/// Calendar year from the host clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer(#[prop(into)] owner: String) -> impl IntoView {
    view! {
        <div class="footer">
            "Copyright " {move || current_year()}
            <span class="footer-owner">{owner}</span>
        </div>
    }
}
