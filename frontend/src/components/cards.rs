use crate::animations::reveal::Direction;
use crate::components::fade_in::FadeIn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    /// Font Awesome icon class, e.g. `fa-bolt`.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(AttrValue::Static("#7EB2FF"))]
    pub color: AttrValue,
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <FadeIn delay={props.delay} direction={Direction::Up}>
            <div class="card feature-card">
                <div class="card-icon" style={format!("color: {};", props.color)}>
                    <i class={classes!("fas", props.icon.to_string())}></i>
                </div>
                <h3>{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
        </FadeIn>
    }
}

#[derive(Properties, PartialEq)]
pub struct PersonaCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub index: usize,
}

/// Wide card in the horizontally scrolling "who is it for" strip.
#[function_component(PersonaCard)]
pub fn persona_card(props: &PersonaCardProps) -> Html {
    html! {
        <FadeIn delay={0.1 * props.index as f64} class="persona-slot">
            <div class="card persona-card">
                <div class="card-icon"><i class={classes!("fas", props.icon.to_string())}></i></div>
                <h3>{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
        </FadeIn>
    }
}
