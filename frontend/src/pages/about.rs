use crate::animations::reveal::Direction;
use crate::components::fade_in::FadeIn;
use crate::config::SiteConfig;
use crate::Route;
use web_sys::HtmlFormElement;
use yew::prelude::*;
use yew_router::prelude::*;

const VALUES: [(&str, &str, &str); 4] = [
    (
        "fa-heart",
        "Developer Empathy",
        "We build with developers in mind, focusing on tools that feel natural and solve real pain points.",
    ),
    (
        "fa-users",
        "Team Collaboration",
        "We believe great software is built by teams, and our tools are designed to enhance collaboration.",
    ),
    (
        "fa-bullseye",
        "Continuous Innovation",
        "We're committed to pushing the boundaries of what's possible with AI and development tools.",
    ),
    (
        "fa-award",
        "Quality Obsession",
        "We refuse to compromise on quality, ensuring our tools produce code that meets the highest standards.",
    ),
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    bio: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Jennifer Smith",
        role: "CEO & Co-Founder",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=250&auto=format&fit=crop",
        bio: "Former AI research lead with 15+ years in the software industry, passionate about using AI to solve real developer problems.",
    },
    TeamMember {
        name: "Michael Chen",
        role: "CTO & Co-Founder",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=250&auto=format&fit=crop",
        bio: "Previously built developer tools at Microsoft, with deep expertise in machine learning and software architecture.",
    },
    TeamMember {
        name: "Sophia Rodriguez",
        role: "Head of Product",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=250&auto=format&fit=crop",
        bio: "Product veteran with experience scaling SaaS platforms from zero to millions of users at leading tech companies.",
    },
    TeamMember {
        name: "David Jackson",
        role: "Lead ML Engineer",
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=250&auto=format&fit=crop",
        bio: "PhD in machine learning with a focus on NLP, bringing cutting-edge AI research into practical applications.",
    },
];

const MILESTONES: [(&str, &str, &str); 5] = [
    ("2020", "Company Founded", "Began as a research project at a leading university AI lab."),
    ("2021", "Seed Funding", "Raised $3.5M to build out the core AI platform and expand the team."),
    ("2022", "Beta Launch", "Released our private beta to 500 developers, achieving 92% user retention."),
    ("2023", "Series A Funding", "Secured $12M to scale the platform and integrate with major development tools."),
    ("2024", "Public Launch", "Official launch to the public, surpassing 10,000 active users."),
];

/// Timeline entries alternate sides; each slides in from its own side.
fn milestone_side(index: usize) -> (&'static str, Direction) {
    if index % 2 == 0 {
        ("right", Direction::Left)
    } else {
        ("left", Direction::Right)
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let sent = use_state(|| false);

    let on_submit = {
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Nothing leaves the browser; the form only acknowledges.
            log::info!("Contact form acknowledged");
            sent.set(true);
            if let Some(form) = e.target_dyn_into::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="container narrow">
                    <FadeIn>
                        <h1>{"Our Mission"}</h1>
                        <p class="hero-subtitle">
                            { format!("At {}, we're building the future of software development by combining human creativity with AI precision.", config.company_name) }
                        </p>
                        <p>
                            {"We believe that AI should augment human capabilities, not replace them. Our mission is to empower developers to build better software faster by handling the repetitive tasks and leaving the creative decisions to the humans."}
                        </p>
                    </FadeIn>
                </div>
            </section>

            <section class="section alt">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Our Values"}</h2>
                            <p>{ format!("The core principles that guide everything we do at {}.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="grid four">
                        { for VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <FadeIn key={*title} delay={0.1 * i as f64}>
                                <div class="card value-card">
                                    <div class="card-icon"><i class={classes!("fas", *icon)}></i></div>
                                    <h3>{ *title }</h3>
                                    <p>{ *description }</p>
                                </div>
                            </FadeIn>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Meet Our Team"}</h2>
                            <p>{ format!("The passionate people behind {} who make everything possible.", config.company_name) }</p>
                        </div>
                    </FadeIn>
                    <div class="grid four">
                        { for TEAM.iter().enumerate().map(|(i, member)| html! {
                            <FadeIn key={member.name} delay={0.1 * i as f64}>
                                <div class="card team-card">
                                    <div class="team-photo">
                                        <img src={member.image} alt={member.name} loading="lazy" />
                                        <div class="team-social">
                                            <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                                            <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin"></i></a>
                                            <a href="#" aria-label="GitHub"><i class="fab fa-github"></i></a>
                                        </div>
                                    </div>
                                    <h3>{ member.name }</h3>
                                    <p class="team-role">{ member.role }</p>
                                    <p>{ member.bio }</p>
                                </div>
                            </FadeIn>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section alt">
                <div class="container narrow">
                    <FadeIn>
                        <div class="section-heading">
                            <h2>{"Our Journey"}</h2>
                            <p>{"From humble beginnings to where we are today."}</p>
                        </div>
                    </FadeIn>
                    <div class="timeline">
                        <div class="timeline-line"></div>
                        { for MILESTONES.iter().enumerate().map(|(i, (year, title, description))| {
                            let (side, direction) = milestone_side(i);
                            html! {
                                <FadeIn key={*year} delay={0.1 * i as f64} {direction} class={classes!("timeline-entry", side)}>
                                    <div class="card">
                                        <span class="timeline-year">{ *year }</span>
                                        <h3>{ *title }</h3>
                                        <p>{ *description }</p>
                                    </div>
                                    <div class="timeline-dot"></div>
                                </FadeIn>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container contact-grid">
                    <FadeIn>
                        <h2>{"Get in Touch"}</h2>
                        <p>{"We'd love to hear from you. Reach out with questions, feedback, or partnership opportunities."}</p>
                        <ul class="contact-details">
                            <li>
                                <i class="fas fa-envelope"></i>
                                <div>
                                    <h3>{"Email"}</h3>
                                    <a href={format!("mailto:{}", config.contact_email)}>{ config.contact_email.clone() }</a>
                                </div>
                            </li>
                            <li>
                                <i class="fas fa-location-dot"></i>
                                <div><h3>{"Office"}</h3><p>{"123 Innovation Way, San Francisco, CA 94107"}</p></div>
                            </li>
                            <li>
                                <i class="fas fa-phone"></i>
                                <div><h3>{"Phone"}</h3><p>{"+1 (555) 123-4567"}</p></div>
                            </li>
                        </ul>
                        <h3>{"Follow Us"}</h3>
                        <div class="footer-social">
                            <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                            <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin"></i></a>
                            <a href="#" aria-label="GitHub"><i class="fab fa-github"></i></a>
                            <a href="#" aria-label="Website"><i class="fas fa-globe"></i></a>
                        </div>
                    </FadeIn>
                    <FadeIn delay={0.2}>
                        <div class="card contact-form">
                            <h3>{"Send us a Message"}</h3>
                            <form onsubmit={on_submit}>
                                <div class="form-row">
                                    <label for="name">{"Name"}</label>
                                    <input type="text" id="name" placeholder="Your name" required=true />
                                </div>
                                <div class="form-row">
                                    <label for="email">{"Email"}</label>
                                    <input type="email" id="email" placeholder="Your email" required=true />
                                </div>
                                <div class="form-row">
                                    <label for="subject">{"Subject"}</label>
                                    <input type="text" id="subject" placeholder="Message subject" />
                                </div>
                                <div class="form-row">
                                    <label for="message">{"Message"}</label>
                                    <textarea id="message" rows="5" placeholder="Your message..."></textarea>
                                </div>
                                <button type="submit" class="button primary wide">{"Send Message"}</button>
                            </form>
                            if *sent {
                                <p class="form-notice">{"Thanks for reaching out! We'll get back to you soon."}</p>
                            }
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section class="section alt closing-cta">
                <div class="container narrow">
                    <FadeIn>
                        <h2>{"Join Us in Shaping the Future of Development"}</h2>
                        <p>{"Whether you're a developer, investor, or potential team member, we'd love to connect and explore how we can work together."}</p>
                        <div class="cta-buttons">
                            <Link<Route> to={Route::Pricing} classes="button primary">{"Get Started Free"}</Link<Route>>
                            <a class="button outline" href={format!("mailto:{}", config.contact_email)}>{"Contact Us"}</a>
                        </div>
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
    fn milestones_alternate_sides() {
        let sides: Vec<_> = (0..MILESTONES.len()).map(|i| milestone_side(i).0).collect();
        assert_eq!(sides, vec!["right", "left", "right", "left", "right"]);
        assert_eq!(milestone_side(0).1, Direction::Left);
        assert_eq!(milestone_side(1).1, Direction::Right);
    }
}
