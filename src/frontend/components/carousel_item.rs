use leptos::prelude::*;

use crate::carousel::{CarouselState, ItemPresentation, VideoMedia};
use crate::frontend::components::{Actions, FeatureVideo};
use crate::models::FeatureItem;

/// One feature entry. Stateless: everything is derived from `state`.
#[component]
pub fn CarouselItem(
    item: FeatureItem,
    index: usize,
    #[prop(into)] id: String,
    #[prop(into)] state: Signal<CarouselState>,
    on_enter: Callback<usize>,
    on_leave: Callback<()>,
    render_media: Callback<usize, Option<VideoMedia>>,
) -> impl IntoView {
    let presentation = Memo::new(move |_| {
        let state = state.get();
        ItemPresentation::resolve(state.viewport, state.is_highlighted(index))
    });
    let expanded = move || presentation.get().is_expanded();

    let headline = item.headline().map(str::to_string);
    let text = item.text().map(str::to_string);
    let actions = item.actions.clone();
    let has_actions = item.has_actions();
    let icon = item.icon;
    let headline_ref = item.field_ref("headline");
    let text_ref = item.field_ref("text");
    let inline_media = render_media.run(index);
    let actions_owner = id.clone();

    view! {
        <div
            id=id
            class=move || presentation.get().container_class()
            style="text-decoration: none; overflow: visible;"
            on:mouseenter=move |_| {
                if presentation.get_untracked().accepts_hover() {
                    on_enter.run(index);
                }
            }
            on:mouseleave=move |_| {
                if presentation.get_untracked().accepts_hover() {
                    on_leave.run(());
                }
            }
        >
            <div data-edit-field=headline_ref class="flex flex-col">
                {move || {
                    expanded()
                        .then(|| inline_media.clone())
                        .flatten()
                        .map(|media| view! {
                            <div class="block lg:hidden pb-5">
                                <FeatureVideo media=media/>
                            </div>
                        })
                }}
                <div class="flex items-center mb-2">
                    {icon.map(|icon| view! {
                        <i class=move || format!("{} {}", icon.css_class(), presentation.get().icon_class())></i>
                    })}
                    {headline.map(|headline| view! {
                        <h3 class=move || presentation.get().headline_class()>{headline}</h3>
                    })}
                </div>
                {move || {
                    expanded()
                        .then(|| text.clone())
                        .flatten()
                        .map(|text| view! {
                            <p
                                data-edit-field=text_ref.clone()
                                class="md:pl-12 md:ml-4 text-lg font-medium"
                            >
                                {text}
                            </p>
                        })
                }}
                {move || {
                    (expanded() && has_actions).then(|| {
                        let items = actions.clone();
                        view! {
                            <div class="md:pl-11">
                                <Actions items=items owner_id=actions_owner.clone()/>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
