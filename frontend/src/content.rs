//! Copy shared by more than one page.

#[derive(Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Feature {
    /// Font Awesome class.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Alex Chen",
            role: "CTO",
            company: "TechForward",
            content: "Operarius has transformed our development process. We're shipping features twice as fast with half the bugs. The AI code suggestions are uncannily accurate.",
            rating: 5,
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=100&auto=format&fit=crop",
        },
        Testimonial {
            name: "Sarah Johnson",
            role: "Lead Developer",
            company: "InnovateCorp",
            content: "As a tech lead, I was skeptical about AI coding tools, but Operarius changed my mind. It handles the repetitive tasks while allowing our team to focus on complex architecture decisions.",
            rating: 5,
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=100&auto=format&fit=crop",
        },
        Testimonial {
            name: "Miguel Rodriguez",
            role: "Solo Developer",
            company: "Freelancer",
            content: "For independent developers like me, Operarius is like having a team of junior devs at your fingertips. It's helped me take on larger projects with confidence.",
            rating: 4,
            avatar: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?q=80&w=100&auto=format&fit=crop",
        },
    ]
}

pub const CORE_FEATURES: [Feature; 4] = [
    Feature {
        icon: "fa-bolt",
        title: "AI-Powered Code Writing",
        description: "Generate high-quality code from natural language descriptions, reducing development time by up to 70%.",
        color: "#a855f7",
    },
    Feature {
        icon: "fa-file-circle-check",
        title: "Automated Testing",
        description: "Create comprehensive test suites automatically, ensuring better code quality and fewer bugs.",
        color: "#3b82f6",
    },
    Feature {
        icon: "fa-gear",
        title: "Customizable Agent",
        description: "Train the AI on your codebase and style preferences for personalized code suggestions.",
        color: "#14b8a6",
    },
    Feature {
        icon: "fa-layer-group",
        title: "Seamless Integrations",
        description: "Works with your existing tools including GitHub, GitLab, VS Code, and more with easy setup.",
        color: "#f59e0b",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_are_rateable() {
        let items = testimonials();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|t| t.rating <= 5));
        assert_eq!(items[2].initial(), "M");
    }
}
