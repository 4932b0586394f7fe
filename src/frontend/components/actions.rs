use leptos::prelude::*;

use crate::common::sanitize_label;
use crate::models::{ActionColor, ActionKind, ActionLink};

fn action_classes(action: &ActionLink) -> String {
    let base_classes = match action.kind {
        ActionKind::Button => "inline-flex items-center justify-center px-6 py-3 text-base font-semibold rounded-full transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2",
        ActionKind::Link => "inline-flex items-center px-1 py-2 text-base font-semibold underline-offset-4 hover:underline transition-colors duration-200",
    };

    let color_classes = match (action.kind, action.color) {
        (ActionKind::Button, ActionColor::Blue) => "bg-gradient-to-br from-blue-300 via-blue-400 to-blue-600 text-white hover:shadow-lg hover:shadow-blue-500/25 focus:ring-blue-500",
        (ActionKind::Button, ActionColor::Orange) => "bg-gradient-to-br from-orange-300 via-orange-400 to-orange-600 text-white hover:shadow-lg hover:shadow-orange-500/25 focus:ring-orange-500",
        (ActionKind::Button, ActionColor::White) => "border border-slate-300 bg-white text-blue-700 hover:bg-slate-50 focus:ring-slate-400",
        (ActionKind::Link, ActionColor::Blue) => "text-blue-600",
        (ActionKind::Link, ActionColor::Orange) => "text-orange-500",
        (ActionKind::Link, ActionColor::White) => "text-white",
    };

    format!("{} {}", base_classes, color_classes)
}

/// Element id for the action at `index` inside the element `owner_id`.
pub fn action_id(owner_id: &str, index: usize, action: &ActionLink) -> String {
    match sanitize_label(&action.label) {
        label if label.is_empty() => format!("{}-action-{}", owner_id, index),
        label => format!("{}-{}", owner_id, label),
    }
}

/// Row of call-to-action links under an expanded feature item.
#[component]
pub fn Actions(
    items: Vec<ActionLink>,
    #[prop(into)] owner_id: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4 pt-4">
            {items
                .into_iter()
                .enumerate()
                .map(|(i, action)| {
                    let classes = action_classes(&action);
                    let href = action.href().to_string();
                    let id = action_id(&owner_id, i, &action);
                    view! {
                        <a id=id href=href class=classes>
                            {action.label.clone()}
                            {action.icon.then(|| view! {
                                <i class="fa-solid fa-arrow-right ml-2 text-sm"></i>
                            })}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
