use crate::components::fade_in::FadeIn;
use crate::config::SiteConfig;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub price_monthly: &'static str,
    pub price_yearly: &'static str,
    pub yearly_discount: Option<&'static str>,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub cta_route: Route,
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => self.price_monthly,
            BillingCycle::Yearly => self.price_yearly,
        }
    }

    /// `/month` or `/year`; free plans carry no suffix.
    pub fn suffix(&self, cycle: BillingCycle) -> Option<String> {
        (self.name != "Free").then(|| format!("/{}", cycle.period()))
    }

    pub fn discount(&self, cycle: BillingCycle) -> Option<&'static str> {
        match cycle {
            BillingCycle::Yearly => self.yearly_discount,
            BillingCycle::Monthly => None,
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        description: "For individual developers getting started with AI assistance.",
        price_monthly: "$0",
        price_yearly: "$0",
        yearly_discount: None,
        features: &[
            "AI code generation (100 requests/month)",
            "Basic project templates",
            "GitHub integration",
            "Community support",
        ],
        cta: "Get Started",
        cta_route: Route::Docs,
        popular: false,
    },
    Plan {
        name: "Pro",
        description: "For professional developers and small teams.",
        price_monthly: "$19",
        price_yearly: "$190",
        yearly_discount: Some("Save $38"),
        features: &[
            "AI code generation (unlimited)",
            "Automated testing & QA",
            "Custom project templates",
            "Priority support",
            "API access",
            "Advanced IDE integrations",
        ],
        cta: "Start Free Trial",
        cta_route: Route::Docs,
        popular: true,
    },
    Plan {
        name: "Team",
        description: "For development teams and organizations.",
        price_monthly: "$49",
        price_yearly: "$490",
        yearly_discount: Some("Save $98"),
        features: &[
            "Everything in Pro",
            "Team collaboration features",
            "Advanced security controls",
            "Custom model training",
            "Usage analytics",
            "Dedicated support",
            "SSO & enterprise auth",
        ],
        cta: "Contact Sales",
        cta_route: Route::About,
        popular: false,
    },
];

const FAQS: [(&str, &str); 4] = [
    (
        "How does the free trial work?",
        "Our 14-day free trial gives you full access to all Pro features with no credit card required. At the end of your trial, you can choose to subscribe or downgrade to the Free plan.",
    ),
    (
        "Can I change plans later?",
        "Yes, you can upgrade, downgrade, or cancel your subscription at any time. If you upgrade, the new rate will be prorated for the remainder of your billing cycle.",
    ),
    (
        "Is there a limit to the AI code generation?",
        "The Free plan includes 100 AI code generation requests per month. Pro and Team plans offer unlimited requests, subject to fair usage policies to prevent abuse.",
    ),
    (
        "Do you offer educational or non-profit discounts?",
        "Yes, we offer special pricing for educational institutions, non-profit organizations, and open source projects. Please contact our support team for more information.",
    ),
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let cycle = use_state(BillingCycle::default);

    let toggle = |option: BillingCycle| -> Html {
        let onclick = {
            let cycle = cycle.clone();
            Callback::from(move |_: MouseEvent| cycle.set(option))
        };
        html! {
            <button class={classes!("cycle-option", (*cycle == option).then_some("active"))} {onclick}>
                { option.label() }
                if option == BillingCycle::Yearly {
                    <span class="cycle-badge">{"Save 20%"}</span>
                }
            </button>
        }
    };

    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <div class="container narrow">
                    <FadeIn>
                        <h1>{"Simple, Transparent Pricing"}</h1>
                        <p class="hero-subtitle">{"Choose the plan that's right for you and start building better software faster."}</p>
                        <div class="cycle-toggle">
                            { toggle(BillingCycle::Monthly) }
                            { toggle(BillingCycle::Yearly) }
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section class="section">
                <div class="container grid three plans">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <FadeIn key={plan.name} delay={0.1 * i as f64}>
                            <div class={classes!("card", "plan-card", plan.popular.then_some("popular"))}>
                                if plan.popular {
                                    <span class="plan-badge">{"Most Popular"}</span>
                                }
                                <h3>{ plan.name }</h3>
                                <p class="plan-description">{ plan.description }</p>
                                <div class="plan-price">
                                    <span class="amount">{ plan.price(*cycle) }</span>
                                    if let Some(suffix) = plan.suffix(*cycle) {
                                        <span class="period">{ suffix }</span>
                                    }
                                    if let Some(discount) = plan.discount(*cycle) {
                                        <p class="plan-discount">{ discount }</p>
                                    }
                                </div>
                                <ul class="check-list">
                                    { for plan.features.iter().map(|feature| html! {
                                        <li key={*feature}><i class="fas fa-check"></i><span>{ *feature }</span></li>
                                    }) }
                                </ul>
                                <Link<Route>
                                    to={plan.cta_route.clone()}
                                    classes={classes!("button", "wide", if plan.popular { "primary" } else { "outline" })}
                                >
                                    { plan.cta }
                                </Link<Route>>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section class="section alt">
                <div class="container narrow">
                    <FadeIn>
                        <div class="card enterprise">
                            <div>
                                <h2>{"Enterprise Solutions"}</h2>
                                <p>{"Need a custom solution for your organization? Our enterprise plan includes dedicated support, custom integrations, advanced security features, and more."}</p>
                                <ul class="check-list">
                                    <li><i class="fas fa-check"></i><span>{"Custom AI model training on your codebase"}</span></li>
                                    <li><i class="fas fa-check"></i><span>{"Advanced security & compliance features"}</span></li>
                                    <li><i class="fas fa-check"></i><span>{"Dedicated support and implementation team"}</span></li>
                                </ul>
                            </div>
                            <Link<Route> to={Route::About} classes="button primary">{"Contact Sales"}</Link<Route>>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Frequently Asked Questions"}</h2>
                            <p>{"Everything you need to know about pricing and plans."}</p>
                        </div>
                    </FadeIn>
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| html! {
                        <FadeIn key={i} delay={0.1 * i as f64}>
                            <div class="faq-item">
                                <h3>{ *question }</h3>
                                <p>{ *answer }</p>
                            </div>
                        </FadeIn>
                    }) }
                    <FadeIn delay={0.4}>
                        <div class="faq-more">
                            <p>{"Have more questions?"}</p>
                            <a class="button outline" href={format!("mailto:{}", config.contact_email)}>{"Contact Support"}</a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section class="section alt">
                <div class="container narrow">
                    <FadeIn>
                        <h2>{"100% Satisfaction Guarantee"}</h2>
                        <p>
                            { format!("If you're not completely satisfied with {} within the first 30 days, we'll refund your payment. No questions asked.", config.company_name) }
                        </p>
                    </FadeIn>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_is_the_default_cycle() {
        assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
    }

    #[test]
    fn prices_follow_the_cycle() {
        let pro = &PLANS[1];
        assert_eq!(pro.price(BillingCycle::Monthly), "$19");
        assert_eq!(pro.price(BillingCycle::Yearly), "$190");
        assert_eq!(PLANS[2].price(BillingCycle::Yearly), "$490");
    }

    #[test]
    fn free_plan_has_no_suffix() {
        assert_eq!(PLANS[0].suffix(BillingCycle::Monthly), None);
        assert_eq!(PLANS[0].suffix(BillingCycle::Yearly), None);
        assert_eq!(PLANS[1].suffix(BillingCycle::Monthly).as_deref(), Some("/month"));
        assert_eq!(PLANS[2].suffix(BillingCycle::Yearly).as_deref(), Some("/year"));
    }

    #[test]
    fn discount_only_shows_for_yearly_billing() {
        assert_eq!(PLANS[1].discount(BillingCycle::Monthly), None);
        assert_eq!(PLANS[1].discount(BillingCycle::Yearly), Some("Save $38"));
        assert_eq!(PLANS[2].discount(BillingCycle::Yearly), Some("Save $98"));
        assert_eq!(PLANS[0].discount(BillingCycle::Yearly), None);
    }

    #[test]
    fn exactly_one_plan_is_marked_popular() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }
}
