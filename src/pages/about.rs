use yew::prelude::*;

use crate::components::cta::{CtaSection, CtaTarget};
use crate::components::feature_card::{Feature, FeatureCard};
use crate::components::hero::PageHero;
use crate::components::page::Page;
use crate::config;
use crate::reveal::{stagger_delay, CANDIDATE};
use crate::Route;

const WHY_US: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Fast Delivery",
        description: "Most projects completed in 7-14 days. No endless delays.",
    },
    Feature {
        icon: "💲",
        title: "Affordable",
        description: "Small business pricing without enterprise-level costs.",
    },
    Feature {
        icon: "❤",
        title: "Simple & Stress-Free",
        description: "No tech jargon. We explain everything in plain language.",
    },
    Feature {
        icon: "👥",
        title: "Personal Support",
        description: "Local, dedicated support. We're your digital partner.",
    },
];

const VALUES: [(&str, &str); 3] = [
    ("Simplicity", "We make complex things simple. Every solution should be easy to understand and use."),
    ("Results", "We focus on what matters: growing your business. Every project has measurable goals."),
    ("Partnership", "We're not just vendors — we're your digital partners invested in your success."),
];

const STORY: [&str; 4] = [
    "Shosh Digital was founded with a simple mission: to make digital solutions accessible, understandable, and effective for small businesses.",
    "We noticed that many small business owners felt overwhelmed by technology. Website builders, marketing jargon, complicated tools — it was all too much. Meanwhile, they were losing customers to competitors with better online presence.",
    "That's why we created Shosh Digital. We focus on what matters: getting you more customers with less work. No unnecessary complexity, no confusing tech speak — just clear solutions that grow your business.",
    "We become your digital partner — from initial ideas to full execution. Whether you need a simple website, an automated chatbot, or a complete digital transformation, we're here to help.",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Page class="about-page">
            <PageHero
                title="About"
                highlight={config::SITE_NAME}
                subtitle="We're a modern digital agency helping small businesses grow online. Simplicity, speed, and results."
            />

            // Story
            <section class="section">
                <div class={classes!("container", "narrow", "story", CANDIDATE)}>
                    <h2>{"Our Story"}</h2>
                    { for STORY.iter().map(|paragraph| html! { <p class="muted-text">{*paragraph}</p> }) }
                </div>
            </section>

            // Mission
            <section class="section muted">
                <div class={classes!("container", "narrow", "mission", CANDIDATE)}>
                    <h2>{"Our Mission"}</h2>
                    <p class="mission-text">
                        {"To empower small businesses with digital tools that "}
                        <span class="gradient-text">{"bring more customers"}</span>
                        {" and "}
                        <span class="gradient-text">{"reduce manual work"}</span>
                        {" — making technology feel simple, not scary."}
                    </p>
                </div>
            </section>

            // Why Us
            <section class="section">
                <div class="container">
                    <div class={classes!("section-heading", CANDIDATE)}>
                        <h2>{"Why Work With Us"}</h2>
                        <p class="muted-text">{"We're not just another agency. Here's what makes us different."}</p>
                    </div>
                    <div class="grid grid-4 why-grid">
                        {
                            WHY_US.iter().enumerate().map(|(index, feature)| html! {
                                <FeatureCard key={feature.title} feature={*feature} index={index} centered={true} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Values
            <section class="section muted">
                <div class="container narrow">
                    <h2 class={classes!("values-title", CANDIDATE)}>{"Our Values"}</h2>
                    <div class="grid grid-3">
                        {
                            VALUES.iter().enumerate().map(|(index, (title, description))| html! {
                                <div key={*title} class={classes!("value", CANDIDATE)} style={stagger_delay(index)}>
                                    <h3 class="gradient-text">{*title}</h3>
                                    <p class="muted-text">{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <CtaSection
                title="Let's Grow Together"
                text="Ready to take your business online? We'd love to hear about your goals and how we can help."
                action="Get in Touch"
                target={CtaTarget::Page(Route::Contact)}
            />

            <style>
                {r#"
                    .story h2, .mission h2, .values-title {
                        font-size: 1.9rem;
                        margin-bottom: 1.5rem;
                    }
                    .story p {
                        line-height: 1.7;
                    }
                    .mission {
                        text-align: center;
                    }
                    .mission-text {
                        font-size: 1.5rem;
                        line-height: 1.6;
                    }
                    .mission-text .gradient-text {
                        font-weight: 600;
                    }
                    .why-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .feature-card.centered {
                        text-align: center;
                    }
                    .feature-card.centered .icon-badge {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .values-title, .value {
                        text-align: center;
                    }
                    .value h3 {
                        font-size: 1.3rem;
                    }
                "#}
            </style>
        </Page>
    }
}
