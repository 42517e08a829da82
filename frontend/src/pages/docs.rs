use crate::components::fade_in::FadeIn;
use crate::config::SiteConfig;
use crate::utils::dom;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// How long a copy button shows its confirmation.
const COPIED_MS: u32 = 2_000;

pub struct Category {
    pub title: &'static str,
    pub icon: &'static str,
    pub topics: [&'static str; 3],
}

pub const CATEGORIES: [Category; 6] = [
    Category { title: "Getting Started", icon: "fa-book-open", topics: ["Installation", "Quick Start Guide", "Configuration"] },
    Category { title: "Core Concepts", icon: "fa-file-lines", topics: ["AI Assistance", "Code Generation", "Testing Framework"] },
    Category { title: "API Reference", icon: "fa-server", topics: ["Endpoints", "Authentication", "Rate Limits"] },
    Category { title: "Examples", icon: "fa-code", topics: ["React Components", "Custom Hooks", "Integration Samples"] },
    Category { title: "Advanced Topics", icon: "fa-terminal", topics: ["Custom Workflows", "Enterprise Integration", "Performance Tuning"] },
    Category { title: "Database", icon: "fa-database", topics: ["Schema Design", "Migrations", "Query Optimization"] },
];

pub struct Command {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

const INSTALL_STEPS: [Command; 3] = [
    Command {
        title: "1. Install the CLI",
        description: "First, install our command-line interface using npm, yarn, or pnpm:",
        command: "npm install -g operarius-cli",
    },
    Command {
        title: "2. Initialize Your Project",
        description: "Create a new project or initialize Operarius in an existing project:",
        command: "operarius init my-project",
    },
    Command {
        title: "3. Configure Your Settings",
        description: "Set up your preferences and API keys in the configuration file:",
        command: "operarius config --api-key YOUR_API_KEY",
    },
];

const USAGE_COMMANDS: [Command; 3] = [
    Command {
        title: "Generating Components",
        description: "Create new React components with a simple command:",
        command: r#"operarius generate component Button --type="primary" --variant="outlined""#,
    },
    Command {
        title: "Running AI Tests",
        description: "Automatically generate and run tests for your components:",
        command: "operarius test --component=Button --coverage",
    },
    Command {
        title: "Refactoring Code",
        description: "Use AI to refactor existing code to improve quality and performance:",
        command: "operarius refactor --file=src/components/OldComponent.tsx --target=modern",
    },
];

pub struct CodeExample {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub const CODE_EXAMPLES: [CodeExample; 3] = [
    CodeExample {
        title: "Generate Component",
        language: "javascript",
        code: r#"const Button = () => {
  return (
    <button className="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600">
      Click Me
    </button>
  );
};"#,
    },
    CodeExample {
        title: "Custom Hook",
        language: "typescript",
        code: r#"import { useState, useEffect } from 'react';

export const useLocalStorage = <T,>(key: string, initialValue: T) => {
  const [value, setValue] = useState<T>(() => {
    const storedValue = localStorage.getItem(key);
    return storedValue ? JSON.parse(storedValue) : initialValue;
  });

  useEffect(() => {
    localStorage.setItem(key, JSON.stringify(value));
  }, [key, value]);

  return [value, setValue] as const;
};"#,
    },
    CodeExample {
        title: "API Request",
        language: "typescript",
        code: r#"const fetchUserData = async (userId: string) => {
  try {
    const response = await fetch(`https://api.example.com/users/${userId}`);
    if (!response.ok) {
      throw new Error('Failed to fetch user data');
    }
    return await response.json();
  } catch (error) {
    console.error(error);
    throw error;
  }
};"#,
    },
];

/// Case-insensitive substring match over any of `fields`. A blank query matches everything.
pub fn matches(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&query))
}

impl Category {
    fn matches(&self, query: &str) -> bool {
        matches(query, &[self.title]) || matches(query, &self.topics)
    }
}

impl Command {
    fn matches(&self, query: &str) -> bool {
        matches(query, &[self.title, self.description, self.command])
    }
}

impl CodeExample {
    fn matches(&self, query: &str) -> bool {
        matches(query, &[self.title, self.language])
    }
}

/// Single-open accordion: clicking the open section closes it.
pub fn toggle_section(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum DocsTab {
    #[default]
    Installation,
    Usage,
    Examples,
}

impl DocsTab {
    const ALL: [DocsTab; 3] = [DocsTab::Installation, DocsTab::Usage, DocsTab::Examples];

    fn label(self) -> &'static str {
        match self {
            DocsTab::Installation => "Installation",
            DocsTab::Usage => "Usage",
            DocsTab::Examples => "Examples",
        }
    }
}

/// Copy buttons are numbered: install steps, then usage commands, then code examples.
fn copy_slot(tab: DocsTab, index: usize) -> usize {
    match tab {
        DocsTab::Installation => index,
        DocsTab::Usage => INSTALL_STEPS.len() + index,
        DocsTab::Examples => INSTALL_STEPS.len() + USAGE_COMMANDS.len() + index,
    }
}

#[function_component(Docs)]
pub fn docs() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let query = use_state(String::new);
    let open_section = use_state(|| Some(0usize));
    let tab = use_state(DocsTab::default);
    let copied = use_state(|| None::<usize>);
    let copied_reset = use_mut_ref(|| None::<Timeout>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let copy = {
        let copied = copied.clone();
        let copied_reset = copied_reset.clone();
        move |slot: usize, text: &'static str| {
            let copied = copied.clone();
            let copied_reset = copied_reset.clone();
            Callback::from(move |_: MouseEvent| {
                let copied = copied.clone();
                let copied_reset = copied_reset.clone();
                spawn_local(async move {
                    match dom::write_clipboard(text).await {
                        Ok(()) => {
                            copied.set(Some(slot));
                            let clear = {
                                let copied = copied.clone();
                                Timeout::new(COPIED_MS, move || copied.set(None))
                            };
                            // Replacing the handle cancels the previous reset.
                            *copied_reset.borrow_mut() = Some(clear);
                        }
                        Err(e) => log::warn!("Copy to clipboard failed: {}", e),
                    }
                });
            })
        }
    };

    let copy_button = |slot: usize, text: &'static str| -> Html {
        let done = *copied == Some(slot);
        html! {
            <button class={classes!("copy-button", done.then_some("copied"))} onclick={copy(slot, text)} aria-label="Copy to clipboard">
                <i class={classes!("fas", if done { "fa-check" } else { "fa-copy" })}></i>
                if done {
                    <span>{"Copied"}</span>
                }
            </button>
        }
    };

    let command_block = |tab_kind: DocsTab, index: usize, step: &Command| -> Html {
        html! {
            <div class="doc-step">
                <h3>{ step.title }</h3>
                <p>{ step.description }</p>
                <div class="command-line">
                    <code>{ step.command }</code>
                    { copy_button(copy_slot(tab_kind, index), step.command) }
                </div>
            </div>
        }
    };

    let categories: Vec<(usize, &Category)> = CATEGORIES
        .iter()
        .enumerate()
        .filter(|(_, c)| c.matches(&query))
        .collect();

    let tab_body = match *tab {
        DocsTab::Installation => {
            let steps: Vec<Html> = INSTALL_STEPS
                .iter()
                .enumerate()
                .filter(|(_, s)| s.matches(&query))
                .map(|(i, s)| command_block(DocsTab::Installation, i, s))
                .collect();
            html! {
                <div class="doc-panel">
                    <h2>{"Installation"}</h2>
                    <p>{ format!("Getting started with {} is quick and easy. Follow these steps to install and configure the platform for your development environment.", config.company_name) }</p>
                    if steps.is_empty() {
                        <p class="no-results">{"No matching results."}</p>
                    } else {
                        { for steps }
                    }
                    <div class="doc-note">
                        <i class="fas fa-circle-info"></i>
                        <p><strong>{"Note:"}</strong>{" For Windows users, you may need to run PowerShell as an administrator when installing the CLI globally."}</p>
                    </div>
                </div>
            }
        }
        DocsTab::Usage => {
            let commands: Vec<Html> = USAGE_COMMANDS
                .iter()
                .enumerate()
                .filter(|(_, c)| c.matches(&query))
                .map(|(i, c)| command_block(DocsTab::Usage, i, c))
                .collect();
            html! {
                <div class="doc-panel">
                    <h2>{"Basic Usage"}</h2>
                    <p>{ format!("Learn how to use {} to streamline your development workflow. Below are common commands and patterns to help you get the most out of the platform.", config.company_name) }</p>
                    if commands.is_empty() {
                        <p class="no-results">{"No matching results."}</p>
                    } else {
                        { for commands }
                    }
                </div>
            }
        }
        DocsTab::Examples => {
            let examples: Vec<Html> = CODE_EXAMPLES
                .iter()
                .enumerate()
                .filter(|(_, e)| e.matches(&query))
                .map(|(i, example)| html! {
                    <div key={example.title} class="code-example">
                        <h3>{ example.title }</h3>
                        <div class="code-block">
                            <pre><code>{ example.code }</code></pre>
                            { copy_button(copy_slot(DocsTab::Examples, i), example.code) }
                        </div>
                    </div>
                })
                .collect();
            html! {
                <div class="doc-panel">
                    <h2>{"Code Examples"}</h2>
                    <p>{ format!("Learn from practical examples of how to integrate {} into your projects. These code snippets show common patterns and best practices.", config.company_name) }</p>
                    if examples.is_empty() {
                        <p class="no-results">{"No matching examples."}</p>
                    } else {
                        { for examples }
                    }
                </div>
            }
        }
    };

    html! {
        <div class="docs-page">
            <section class="page-hero">
                <div class="container narrow">
                    <FadeIn>
                        <h1>{"Documentation"}</h1>
                        <p class="hero-subtitle">{ format!("Everything you need to know about using {} effectively.", config.company_name) }</p>
                        <div class="search-box">
                            <i class="fas fa-magnifying-glass"></i>
                            <input
                                type="search"
                                placeholder="Search documentation..."
                                value={(*query).clone()}
                                oninput={on_search}
                            />
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section class="section">
                <div class="container docs-layout">
                    <aside class="docs-sidebar">
                        <FadeIn>
                            <div class="card">
                                <h3>{"Categories"}</h3>
                                if categories.is_empty() {
                                    <p class="no-results">{"No categories match your search."}</p>
                                }
                                { for categories.into_iter().map(|(index, category)| {
                                    let expanded = *open_section == Some(index);
                                    let onclick = {
                                        let open_section = open_section.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            open_section.set(toggle_section(*open_section, index));
                                        })
                                    };
                                    html! {
                                        <div key={category.title} class={classes!("accordion-item", expanded.then_some("open"))}>
                                            <button class="accordion-trigger" {onclick} aria-expanded={expanded.to_string()}>
                                                <i class={classes!("fas", category.icon)}></i>
                                                <span>{ category.title }</span>
                                                <i class={classes!("fas", "chevron", if expanded { "fa-chevron-up" } else { "fa-chevron-down" })}></i>
                                            </button>
                                            if expanded {
                                                <ul class="accordion-content">
                                                    { for category.topics.iter().map(|topic| html! { <li>{ *topic }</li> }) }
                                                </ul>
                                            }
                                        </div>
                                    }
                                }) }
                            </div>
                        </FadeIn>
                    </aside>

                    <div class="docs-main">
                        <FadeIn>
                            <div class="card">
                                <div class="tab-list" role="tablist">
                                    { for DocsTab::ALL.iter().map(|option| {
                                        let onclick = {
                                            let tab = tab.clone();
                                            let option = *option;
                                            Callback::from(move |_: MouseEvent| tab.set(option))
                                        };
                                        html! {
                                            <button
                                                role="tab"
                                                class={classes!("tab", (*tab == *option).then_some("active"))}
                                                {onclick}
                                            >
                                                { option.label() }
                                            </button>
                                        }
                                    }) }
                                </div>
                                { tab_body }
                            </div>
                        </FadeIn>
                        <FadeIn>
                            <div class="card docs-help">
                                <div>
                                    <h3>{"Need more help?"}</h3>
                                    <p>{"If you can't find what you're looking for in our documentation"}</p>
                                </div>
                                <div class="cta-buttons">
                                    <a class="button outline" href="#"><i class="fas fa-arrow-up-right-from-square"></i>{" Community Forum"}</a>
                                    <a class="button primary" href={format!("mailto:{}", config.contact_email)}>{"Contact Support"}</a>
                                </div>
                            </div>
                        </FadeIn>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches("", &["anything"]));
        assert!(matches("   ", &[]));
        assert!(CATEGORIES.iter().all(|c| c.matches("")));
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches("HOOK", &["Custom Hook"]));
        assert!(matches("custom h", &["Custom Hook"]));
        assert!(!matches("hooks!", &["Custom Hook"]));
    }

    #[test]
    fn categories_match_on_topics() {
        let hits: Vec<_> = CATEGORIES
            .iter()
            .filter(|c| c.matches("migrations"))
            .map(|c| c.title)
            .collect();
        assert_eq!(hits, vec!["Database"]);
    }

    #[test]
    fn examples_match_on_title_or_language() {
        let typescript = CODE_EXAMPLES.iter().filter(|e| e.matches("typescript")).count();
        assert_eq!(typescript, 2);
        assert!(CODE_EXAMPLES[2].matches("api"));
        assert!(!CODE_EXAMPLES.iter().any(|e| e.matches("cobol")));
    }

    #[test]
    fn accordion_keeps_a_single_section_open() {
        assert_eq!(toggle_section(Some(0), 2), Some(2));
        assert_eq!(toggle_section(Some(2), 2), None);
        assert_eq!(toggle_section(None, 1), Some(1));
    }

    #[test]
    fn copy_slots_do_not_collide() {
        let mut slots = Vec::new();
        for tab in DocsTab::ALL {
            for i in 0..3 {
                slots.push(copy_slot(tab, i));
            }
        }
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots, (0..9).collect::<Vec<_>>());
    }
}
