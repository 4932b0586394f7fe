use leptos::prelude::*;

#[component]
pub fn Nav(#[prop(optional_no_strip)] title: Option<String>) -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-white/80 border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="text-xl font-tuner bg-gradient-to-br from-blue-600 via-blue-800 to-blue-900 bg-clip-text text-transparent">
                    "blockpress"
                </a>
                {title.map(|t| view! { <span class="text-sm text-slate-500">{t}</span> })}
            </div>
        </nav>
    }
}
