use leptos::prelude::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="my-6 p-4 rounded-lg border text-sm bg-red-500/10 border-red-500/30 text-red-600">
            <p class="flex items-center gap-2">
                <span>"✕"</span>
                <span>{message}</span>
            </p>
        </div>
    }
}
