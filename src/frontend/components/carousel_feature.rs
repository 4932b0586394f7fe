use leptos::prelude::*;

use crate::carousel::{resolve_media, CarouselController, CarouselState, VideoMedia};
use crate::frontend::components::{
    CarouselItem, Container, FeatureVideo, GradGlow,
};
use crate::frontend::interval::IntervalScheduler;
use crate::frontend::viewport::ViewportWatcher;
use crate::models::CarouselFeatureData;

type BrowserController = CarouselController<IntervalScheduler>;
type ControllerSlot = StoredValue<Option<BrowserController>, LocalStorage>;

/// Runs `event` against the mounted controller and publishes the new state.
/// Events arriving after unmount find no controller and do nothing.
fn dispatch(
    slot: ControllerSlot,
    state: RwSignal<CarouselState>,
    event: impl FnOnce(&mut BrowserController),
) {
    let next = slot
        .try_update_value(|controller| {
            controller.as_mut().map(|c| {
                event(c);
                c.state()
            })
        })
        .flatten();

    if let Some(next) = next {
        if state.try_get_untracked().is_some_and(|current| current != next) {
            state.try_set(next);
        }
    }
}

#[component]
pub fn CarouselFeatureBlock(
    data: CarouselFeatureData,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    let item_count = data.items.len();
    let items = StoredValue::new(data.items);
    let state = RwSignal::new(CarouselState::default());

    let slot: ControllerSlot = StoredValue::new_local(None);
    let watcher = StoredValue::new_local(None::<ViewportWatcher>);

    // Browser only: effects never run during SSR. Unmount disposes the
    // effect, which detaches the listeners and tears the controller down.
    Effect::new(move |_| {
        let scheduler =
            IntervalScheduler::new(move || dispatch(slot, state, |c| c.on_tick()));
        slot.set_value(Some(CarouselController::new(item_count, scheduler)));

        let attached = ViewportWatcher::attach(move |viewport| {
            dispatch(slot, state, |c| c.on_viewport_change(viewport))
        });
        let viewport = attached
            .as_ref()
            .map(ViewportWatcher::current)
            .unwrap_or_default();
        watcher.set_value(attached);

        dispatch(slot, state, |c| c.measure(viewport));

        on_cleanup(move || {
            let _ = watcher.try_update_value(Option::take);
            let _ = slot.try_update_value(|controller| {
                if let Some(c) = controller.as_mut() {
                    c.teardown();
                }
            });
        });
    });

    let on_enter = Callback::new(move |i: usize| {
        dispatch(slot, state, |c| c.on_pointer_enter(i))
    });
    let on_leave = Callback::new(move |_: ()| {
        dispatch(slot, state, |c| c.on_pointer_leave())
    });
    let render_media = Callback::new(move |i: usize| {
        items.with_value(|items| resolve_media(items, Some(i)))
    });
    let highlighted_media = move || {
        items.with_value(|items| resolve_media(items, state.get().highlighted))
    };

    let entries = items.with_value(|items| {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                view! {
                    <div class="pt-4">
                        <CarouselItem
                            item=item.clone()
                            index=i
                            id=item.dom_id(i)
                            state=state
                            on_enter=on_enter
                            on_leave=on_leave
                            render_media=render_media
                        />
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <section
            id=format!("feature-grid-{}", index)
            class="relative z-0 py-20 lg:py-28"
            style="overflow: visible;"
        >
            <Container>
                <div class="flex flex-col lg:flex-row gap-6 w-full rounded-xl overflow-visible">
                    <div class="flex flex-col order-2 lg:order-1 w-full lg:w-2/5 gap-4 auto-rows-auto rounded-xl overflow-visible">
                        <h1 class="pl-3 font-tuner inline-block text-4xl lg:text-5xl lg:leading-tight bg-gradient-to-br from-blue-600/80 via-blue-800/80 to-blue-1000 bg-clip-text text-transparent text-balance text-left mt-10 pb-3">
                            "Key Features"
                        </h1>
                        {entries}
                    </div>
                    {(item_count > 0).then(|| view! {
                        <div class="hidden lg:flex flex-col order-1 lg:order-2 w-full lg:w-3/5 gap-4 auto-rows-auto rounded-xl overflow-visible bg-gray-200 mt-10 lg:mt-0">
                            <h2 class="text-center pl-9 font-tuner inline-block text-4xl lg:leading-tight bg-gradient-to-br from-red-600/80 via-red-800/80 to-red-1000 bg-clip-text text-transparent text-balance mt-20 lg:mt-10">
                                "Media"
                            </h2>
                            // Keyed so a new highlight mounts a fresh <video> and reloads its sources.
                            <For
                                each=highlighted_media
                                key=|media: &VideoMedia| media.webm.clone()
                                children=move |media: VideoMedia| view! { <FeatureVideo media=media/> }
                            />
                        </div>
                    })}
                </div>
            </Container>
            <GradGlow/>
        </section>
    }
}
