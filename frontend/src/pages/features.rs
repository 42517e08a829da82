use crate::components::cards::FeatureCard;
use crate::components::fade_in::FadeIn;
use crate::config::SiteConfig;
use crate::content::CORE_FEATURES;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const ADDITIONAL_FEATURES: [(&str, &str, &str); 6] = [
    (
        "fa-code-branch",
        "Version Control Integration",
        "Seamlessly works with Git, automatically creating branches, commits, and PRs based on changes.",
    ),
    (
        "fa-terminal",
        "CLI Support",
        "Use the powerful command-line interface for advanced workflows and automation scripts.",
    ),
    (
        "fa-database",
        "Schema Generation",
        "Automatically create database schemas and migrations from natural language descriptions.",
    ),
    (
        "fa-shield-halved",
        "Security Scanning",
        "Identify and fix security vulnerabilities in your code before they reach production.",
    ),
    (
        "fa-arrows-rotate",
        "Continuous Updates",
        "Stay current with the latest frameworks and best practices with automatic suggestions.",
    ),
    (
        "fa-globe",
        "Multi-language Support",
        "Works with JavaScript, TypeScript, Python, Java, Go, Ruby, and many other languages.",
    ),
];

const METRICS: [(&str, &str); 4] = [
    ("67%", "Average development time savings"),
    ("42%", "Reduction in bugs"),
    ("85%", "Increase in test coverage"),
    ("10K+", "Developers using Operarius daily"),
];

struct UseCase {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    points: [&'static str; 3],
}

const USE_CASES: [UseCase; 3] = [
    UseCase {
        icon: "fa-code",
        title: "Rapid Prototyping",
        summary: "Quickly bring ideas to life with AI-generated code scaffolding and working prototypes that can be refined over time.",
        points: [
            "Generate working components from descriptions",
            "Create interactive wireframes",
            "Iterate rapidly with instant feedback",
        ],
    },
    UseCase {
        icon: "fa-chart-column",
        title: "Quality Assurance",
        summary: "Automatically generate comprehensive test suites that catch bugs before they reach production.",
        points: [
            "Create unit and integration tests",
            "Generate edge case scenarios",
            "Maintain test coverage as code evolves",
        ],
    },
    UseCase {
        icon: "fa-clock",
        title: "Legacy Code Modernization",
        summary: "Transform outdated codebases into modern, maintainable systems with AI-assisted refactoring.",
        points: [
            "Upgrade to modern frameworks",
            "Refactor for readability and performance",
            "Add missing documentation and tests",
        ],
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    html! {
        <div class="features-page">
            <section class="page-hero">
                <div class="container narrow">
                    <FadeIn>
                        <h1>{"Powerful Features to Transform Your Development Workflow"}</h1>
                        <p class="hero-subtitle">
                            { format!("Discover how {} can help you build better software faster with AI-powered assistance at every step.", config.company_name) }
                        </p>
                        <Link<Route> to={Route::Pricing} classes="button primary">
                            { format!("Start Using {}", config.company_name) }
                        </Link<Route>>
                    </FadeIn>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Core Capabilities"}</h2>
                            <p>{ format!("Our flagship features that form the foundation of the {} platform.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="grid two">
                        { for CORE_FEATURES.iter().enumerate().map(|(i, feature)| html! {
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

            <section class="section alt metrics">
                <div class="container grid four">
                    { for METRICS.iter().enumerate().map(|(i, (value, label))| html! {
                        <FadeIn key={*label} delay={0.1 * i as f64}>
                            <div class="metric">
                                <FadeIn delay={0.2 * i as f64} class="metric-value">{ *value }</FadeIn>
                                <p>{ *label }</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Additional Features"}</h2>
                            <p>{ format!("Explore the full range of tools and capabilities available with {}.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="grid three">
                        { for ADDITIONAL_FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <FeatureCard key={*title} icon={*icon} title={*title} description={*description} delay={0.05 * i as f64} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section alt">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Use Cases"}</h2>
                            <p>{ format!("See how different teams leverage {} to improve their workflow.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="grid three">
                        { for USE_CASES.iter().enumerate().map(|(i, case)| html! {
                            <FadeIn key={case.title} delay={0.1 * (i + 1) as f64}>
                                <div class="card use-case">
                                    <div class="card-icon"><i class={classes!("fas", case.icon)}></i></div>
                                    <h3>{ case.title }</h3>
                                    <p>{ case.summary }</p>
                                    <ul class="check-list">
                                        { for case.points.iter().map(|point| html! {
                                            <li><span class="check">{"✓"}</span>{ *point }</li>
                                        }) }
                                    </ul>
                                </div>
                            </FadeIn>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section closing-cta">
                <div class="container narrow">
                    <FadeIn>
                        <h2>{"Ready to experience the future of development?"}</h2>
                        <p>{ format!("Join thousands of developers who are building faster and smarter with {}.", config.company_name) }</p>
                        <div class="cta-buttons">
                            <Link<Route> to={Route::Pricing} classes="button primary">{"Get Started Free"}</Link<Route>>
                            <Link<Route> to={Route::Pricing} classes="button outline">{"View Pricing"}</Link<Route>>
                        </div>
                    </FadeIn>
                </div>
            </section>
        </div>
    }
}
