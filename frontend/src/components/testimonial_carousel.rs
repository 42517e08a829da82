use crate::animations::carousel::{Carousel, CarouselAction, SlideDirection, AUTO_ADVANCE_MS};
use crate::content::Testimonial;
use gloo_timers::callback::{Interval, Timeout};
use std::collections::HashSet;
use yew::prelude::*;

/// Matches the slide keyframes below.
const SLIDE_MS: u32 = 500;

const CAROUSEL_CSS: &str = r#"
    .testimonial-carousel {
        position: relative;
        width: 100%;
        overflow: hidden;
        padding: 2.5rem 0;
    }
    .testimonial-stage {
        position: relative;
        max-width: 900px;
        margin: 0 auto;
    }
    .testimonial-card {
        display: flex;
        gap: 2rem;
        align-items: flex-start;
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 12px;
        padding: 2.5rem;
        animation-duration: 0.5s;
        animation-timing-function: ease-in-out;
        animation-fill-mode: both;
    }
    .testimonial-card.leaving {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .testimonial-card.entering { animation-name: slide-enter; }
    .testimonial-card.leaving { animation-name: slide-exit; }
    @keyframes slide-enter {
        from { opacity: 0; transform: translateX(var(--slide-offset)); }
        to { opacity: 1; transform: none; }
    }
    @keyframes slide-exit {
        from { opacity: 1; transform: none; }
        to { opacity: 0; transform: translateX(calc(-1 * var(--slide-offset))); }
    }
    .testimonial-avatar {
        flex-shrink: 0;
        width: 80px;
        height: 80px;
        border-radius: 50%;
        overflow: hidden;
        background: #7EB2FF;
        color: #111;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        font-weight: 600;
    }
    .testimonial-avatar img { width: 100%; height: 100%; object-fit: cover; }
    .testimonial-stars { color: #555; margin-bottom: 0.5rem; }
    .testimonial-stars .filled { color: #facc15; }
    .testimonial-quote { font-size: 1.2rem; font-style: italic; color: #ddd; margin-bottom: 1.5rem; }
    .testimonial-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
    .testimonial-dot {
        width: 8px;
        height: 8px;
        border-radius: 999px;
        border: none;
        background: rgba(255, 255, 255, 0.3);
        transition: all 0.3s;
        cursor: pointer;
    }
    .testimonial-dot.active { width: 32px; background: #7EB2FF; }
    .testimonial-nav {
        position: absolute;
        top: 50%;
        left: 1rem;
        right: 1rem;
        display: flex;
        justify-content: space-between;
        transform: translateY(-50%);
        pointer-events: none;
    }
    .testimonial-nav button {
        pointer-events: auto;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: 1px solid rgba(126, 178, 255, 0.3);
        background: rgba(30, 30, 30, 0.9);
        color: white;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .testimonial-card { flex-direction: column; padding: 2rem; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub items: Vec<Testimonial>,
}

/// Rotating testimonial display. Renders nothing for an empty list.
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    match Carousel::new(props.items.len()) {
        Ok(initial) => html! {
            <CarouselView key={props.items.len()} items={props.items.clone()} {initial} />
        },
        Err(e) => {
            log::warn!("Testimonials hidden: {}", e);
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct CarouselViewProps {
    items: Vec<Testimonial>,
    initial: Carousel,
}

#[function_component(CarouselView)]
fn carousel_view(props: &CarouselViewProps) -> Html {
    let carousel = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };
    let leaving = use_state(|| None::<(usize, SlideDirection)>);
    let shown = use_mut_ref(|| props.initial.current());
    let broken_avatars = use_state(HashSet::<usize>::new);

    // Auto-advance, re-armed whenever the index or the hover state changes.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(_, auto_advance): &(usize, bool)| {
                let interval = auto_advance.then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || {
                        dispatcher.dispatch(CarouselAction::Elapsed(AUTO_ADVANCE_MS));
                    })
                });
                move || drop(interval)
            },
            (carousel.current(), carousel.auto_advance()),
        );
    }

    // Keep the outgoing card around for one slide. A newer change replaces it.
    {
        let leaving = leaving.clone();
        let shown = shown.clone();
        let direction = carousel.direction();
        use_effect_with_deps(
            move |current: &usize| {
                let previous = std::mem::replace(&mut *shown.borrow_mut(), *current);
                let timeout = (previous != *current).then(|| {
                    leaving.set(Some((previous, direction)));
                    let leaving = leaving.clone();
                    Timeout::new(SLIDE_MS, move || leaving.set(None))
                });
                move || drop(timeout)
            },
            carousel.current(),
        );
    }

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::PointerEnter))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::PointerLeave))
    };
    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let render_card = |index: usize, class: &'static str, direction: SlideDirection| -> Html {
        let Some(item) = props.items.get(index) else {
            return html! {};
        };
        let on_avatar_error = {
            let broken_avatars = broken_avatars.clone();
            Callback::from(move |_: Event| {
                let mut broken = (*broken_avatars).clone();
                broken.insert(index);
                broken_avatars.set(broken);
            })
        };
        html! {
            <div
                key={format!("card-{}", index)}
                class={classes!("testimonial-card", class)}
                style={direction.offset_style()}
            >
                <div class="testimonial-avatar">
                    if broken_avatars.contains(&index) {
                        { item.initial() }
                    } else {
                        <img src={item.avatar} alt={item.name} onerror={on_avatar_error} />
                    }
                </div>
                <div>
                    <div class="testimonial-stars">
                        { for (0..5u8).map(|star| html! {
                            <i class={classes!("fas", "fa-star", (star < item.rating).then_some("filled"))}></i>
                        }) }
                    </div>
                    <p class="testimonial-quote">{ format!("\"{}\"", item.content) }</p>
                    <p><strong>{ item.name }</strong></p>
                    <p style="color: #999;">{ format!("{}, {}", item.role, item.company) }</p>
                </div>
            </div>
        }
    };

    let current = carousel.current();
    let mut cards = Vec::with_capacity(2);
    if let Some((index, direction)) = *leaving {
        if index != current {
            cards.push(render_card(index, "leaving", direction));
        }
    }
    cards.push(render_card(current, "entering", carousel.direction()));

    html! {
        <div class="testimonial-carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <style>{CAROUSEL_CSS}</style>
            <div class="testimonial-stage">
                { for cards }
            </div>
            <div class="testimonial-dots">
                { for (0..carousel.item_count()).map(|index| {
                    let carousel = carousel.clone();
                    html! {
                        <button
                            key={index}
                            class={classes!("testimonial-dot", (index == current).then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Jump(index)))}
                            aria-label={format!("Go to testimonial {}", index + 1)}
                        />
                    }
                }) }
            </div>
            <div class="testimonial-nav">
                <button onclick={on_prev} aria-label="Previous testimonial">
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button onclick={on_next} aria-label="Next testimonial">
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
