use yew::prelude::*;

use crate::components::cta::{CtaSection, CtaTarget};
use crate::components::hero::PageHero;
use crate::components::page::Page;
use crate::reveal::CANDIDATE;
use crate::Route;

struct Step {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 5] = [
    Step {
        number: "01",
        icon: "🔍",
        title: "Discovery",
        description: "We start by learning about your business, goals, and target customers. What problems are you solving? Who are you trying to reach?",
    },
    Step {
        number: "02",
        icon: "📄",
        title: "Planning",
        description: "We create a digital strategy and roadmap tailored to your needs. Clear milestones, realistic timelines, and no surprises.",
    },
    Step {
        number: "03",
        icon: "🖌",
        title: "Design & Development",
        description: "Our team builds your website, app, or automation system. You'll see progress along the way and have opportunities for feedback.",
    },
    Step {
        number: "04",
        icon: "🚀",
        title: "Launch",
        description: "We deploy your project and make sure everything works perfectly. Testing, optimization, and a smooth go-live experience.",
    },
    Step {
        number: "05",
        icon: "📈",
        title: "Growth",
        description: "We don't just launch and leave. Continuous support, optimization, and marketing help your business grow over time.",
    },
];

const TIMELINE: [(&str, &str); 4] = [
    ("Discovery", "1-2 days"),
    ("Design", "3-5 days"),
    ("Development", "5-10 days"),
    ("Launch", "1-2 days"),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <Page class="how-page">
            <PageHero
                title="How It"
                highlight="Works"
                subtitle="Our simple 5-step process takes you from idea to launch and beyond. Clear, transparent, and stress-free."
            />

            // Steps
            <section class="section steps-section">
                <div class="container steps">
                    <div class="steps-line"></div>
                    {
                        STEPS.iter().map(|step| html! {
                            <div key={step.number} class={classes!("step", CANDIDATE)}>
                                <div class="step-badge gradient-bg" aria-hidden="true">{step.icon}</div>
                                <div class="step-body">
                                    <div class="step-heading">
                                        <span class="step-number">{step.number}</span>
                                        <h3>{step.title}</h3>
                                    </div>
                                    <p class="muted-text">{step.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Timeline Summary
            <section class="section muted">
                <div class="container timeline">
                    <div class={classes!("section-heading", CANDIDATE)}>
                        <h2>{"Typical Project Timeline"}</h2>
                        <p class="muted-text">
                            {"Most projects are completed within 7–14 days, depending on complexity."}
                        </p>
                    </div>
                    <div class={classes!("grid", "grid-4", CANDIDATE)}>
                        {
                            TIMELINE.iter().map(|(label, time)| html! {
                                <div key={*label} class="card timeline-card">
                                    <p class="timeline-time gradient-text">{*time}</p>
                                    <p class="muted-text">{*label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <CtaSection
                title="Ready to Start Your Project?"
                text="Let's begin with a free discovery call. We'll learn about your business and create a plan together."
                action="Book a Free Consultation"
                target={CtaTarget::Page(Route::Contact)}
            />

            <style>
                {r#"
                    .steps {
                        max-width: 56rem;
                        position: relative;
                    }
                    .steps-line {
                        position: absolute;
                        left: 3rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, var(--primary), var(--secondary), var(--accent));
                    }
                    .step {
                        position: relative;
                        display: flex;
                        gap: 2.5rem;
                        margin-bottom: 4rem;
                    }
                    .step-badge {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                        flex-shrink: 0;
                        z-index: 1;
                        box-shadow: 0 8px 20px rgba(109, 74, 255, 0.25);
                    }
                    .step-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .step-heading h3 {
                        font-size: 1.5rem;
                        margin: 0;
                    }
                    .step-number {
                        color: var(--primary);
                        font-weight: 600;
                        font-size: 0.9rem;
                    }
                    .timeline {
                        max-width: 56rem;
                    }
                    .timeline-card {
                        text-align: center;
                    }
                    .timeline-time {
                        font-size: 1.8rem;
                        font-weight: 700;
                        margin: 0 0 0.25rem;
                    }
                    @media (max-width: 768px) {
                        .steps-line { display: none; }
                        .step { gap: 1.5rem; }
                        .step-badge { width: 3rem; height: 3rem; font-size: 1.2rem; }
                    }
                "#}
            </style>
        </Page>
    }
}
