use crate::animations::scroll::{self, HeroTransform};
use crate::animations::typewriter::{Elapsed, Phase, Typewriter, TYPE_STEP_MS};
use crate::components::animated_gradient::AnimatedGradient;
use crate::components::cards::{FeatureCard, PersonaCard};
use crate::components::fade_in::FadeIn;
use crate::components::pricing_cta::PricingCta;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::config::SiteConfig;
use crate::content;
use crate::utils::dom;
use crate::utils::listener::WindowListener;
use crate::Route;
use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

const HERO_CODE: &str = r#"// Generate code with AI
const createComponent = async (prompt) => {
  const component = await ai.generate({
    prompt,
    language: 'react',
    test: true
  });

  return component;
};

// Example usage
const navbar = await createComponent(
  "Create a responsive navbar with logo and links"
);"#;

const PERSONAS: [(&str, &str, &str); 3] = [
    (
        "fa-user",
        "Solo Developers",
        "Multiply your productivity and take on larger projects with AI assistance that fills the gaps in your workflow.",
    ),
    (
        "fa-rocket",
        "Startups",
        "Move faster from ideation to production with automated code generation and testing, saving crucial time-to-market.",
    ),
    (
        "fa-users",
        "Enterprise Teams",
        "Standardize code quality across large teams and reduce onboarding time for new developers with intelligent assistance.",
    ),
];

#[function_component(CodeTypewriter)]
fn code_typewriter() -> Html {
    let typewriter = use_reducer(|| Typewriter::new(HERO_CODE));
    {
        let dispatcher = typewriter.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TYPE_STEP_MS, move || {
                    dispatcher.dispatch(Elapsed(TYPE_STEP_MS));
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="code-window">
            <div class="code-dots">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
            </div>
            <pre><code>
                { typewriter.visible(HERO_CODE) }
                <span class={classes!("cursor", (typewriter.phase() == Phase::Typing).then_some("typing"))}>{"|"}</span>
            </code></pre>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let hero_ref = use_node_ref();
    let hero_style = use_state(|| HeroTransform::at(0.0));

    // Fade the hero out as it scrolls away.
    {
        let hero_ref = hero_ref.clone();
        let hero_style = hero_style.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || {
                    let height = hero_ref
                        .cast::<HtmlElement>()
                        .map(|hero| hero.offset_height() as f64)
                        .unwrap_or(0.0);
                    let progress = scroll::progress(dom::scroll_y(), height);
                    hero_style.set(HeroTransform::at(progress));
                });
                if let Err(e) = &listener {
                    log::warn!("Hero scroll effect disabled: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let learn_more = Callback::from(|_: MouseEvent| dom::scroll_into_view("features"));

    html! {
        <div class="home-page">
            <section class="hero" ref={hero_ref} style={hero_style.style()}>
                <AnimatedGradient intensity={config.hero_intensity} colors={config.hero_colors.clone()} />
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <FadeIn delay={0.1}>
                            <h1 class="hero-title">
                                {"The AI Developer Agent That "}
                                <span class="gradient-text">{"Writes, Tests, and Deploys"}</span>
                                {" for You"}
                            </h1>
                        </FadeIn>
                        <FadeIn delay={0.2}>
                            <p class="hero-subtitle">
                                {"Automate your development process. Reduce coding time, improve testing, and scale effortlessly."}
                            </p>
                        </FadeIn>
                        <FadeIn delay={0.3}>
                            <div class="cta-buttons">
                                <Link<Route> to={Route::Pricing} classes="button primary">{"Get Started for Free"}</Link<Route>>
                                <button class="button outline" onclick={learn_more}>
                                    {"Learn More "}<i class="fas fa-arrow-right"></i>
                                </button>
                            </div>
                        </FadeIn>
                    </div>
                    <div class="hero-code">
                        <FadeIn delay={0.4}>
                            <CodeTypewriter />
                        </FadeIn>
                    </div>
                </div>
            </section>

            <section id="features" class="section alt">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Powerful Features to Supercharge Your Development Workflow"}</h2>
                            <p>{"Our AI-powered platform streamlines coding, testing, and deployment processes to help you build better software faster."}</p>
                        </div>
                    </FadeIn>
                    <div class="grid four">
                        { for content::CORE_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                            <FeatureCard
                                key={feature.title}
                                icon={feature.icon}
                                title={feature.title}
                                description={feature.description}
                                color={feature.color}
                                delay={0.1 * i as f64}
                            />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Who is it For?"}</h2>
                            <p>{ format!("{} is designed to help developers at every scale, from solo innovators to enterprise teams.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="persona-strip">
                        { for PERSONAS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <PersonaCard key={*title} icon={*icon} title={*title} description={*description} {index} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section alt">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Trusted by Developers"}</h2>
                            <p>{ format!("Hear what our users have to say about their experience with {}.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <TestimonialCarousel items={content::testimonials()} />
                </div>
            </section>

            <PricingCta />
        </div>
    }
}
