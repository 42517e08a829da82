use crate::animations::reveal::{Direction, RevealAction, RevealConfig, RevealState};
use crate::error::SiteError;
use crate::utils::dom;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds before the reveal starts.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(20.0)]
    pub distance: f64,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live IntersectionObserver registration, disconnected on drop.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(element: &Element, once: bool, on_change: Callback<bool>) -> Result<Observation, SiteError> {
    if !dom::supports_intersection_observer() {
        return Err(SiteError::ObserverUnavailable);
    }
    let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            on_change.emit(intersecting);
            if once && intersecting {
                observer.disconnect();
                return;
            }
        }
    });
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(element);
    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Fades and slides its children into place the first time they scroll into
/// view, or every time when `once` is false.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        let settled = state.is_settled(props.once);
        use_effect_with_deps(
            move |once: &bool| {
                let once = *once;
                let on_change = Callback::from(move |intersecting: bool| {
                    dispatcher.dispatch(RevealAction::Intersect { intersecting, once });
                });
                // A block that already revealed for good needs no observer.
                let observation = (!settled).then(|| {
                    node.cast::<Element>()
                        .ok_or(SiteError::NotMounted("reveal"))
                        .and_then(|element| observe(&element, once, on_change))
                });
                let observation = match observation {
                    Some(Ok(observation)) => Some(observation),
                    Some(Err(e)) => {
                        log::warn!("Reveal block stays hidden: {}", e);
                        None
                    }
                    None => None,
                };
                move || drop(observation)
            },
            props.once,
        );
    }

    let config = RevealConfig {
        delay: props.delay,
        direction: props.direction,
        duration: props.duration,
        once: props.once,
        distance: props.distance,
    };

    html! {
        <div
            ref={node}
            class={classes!("fade-in", props.class.clone())}
            style={config.style(state.visible)}
        >
            { for props.children.iter() }
        </div>
    }
}
