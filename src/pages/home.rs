use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::{CtaSection, CtaTarget};
use crate::components::feature_card::{Feature, FeatureCard};
use crate::components::page::Page;
use crate::config;
use crate::reveal::{entrance_delay, stagger_delay, CANDIDATE, REVEALED_CLASS};
use crate::Route;

const WHY_CHOOSE_US: [Feature; 4] = [
    Feature {
        icon: "🌐",
        title: "Simple & Fast Websites",
        description: "Clean, mobile-friendly websites that load fast and convert visitors into customers.",
    },
    Feature {
        icon: "🤖",
        title: "Automation & 24/7 Support",
        description: "Chatbots and workflows that handle customer queries even while you sleep.",
    },
    Feature {
        icon: "⚡",
        title: "Affordable & Focused",
        description: "Solutions designed specifically for small businesses, without enterprise pricing.",
    },
    Feature {
        icon: "🎨",
        title: "Clear Branding & Marketing",
        description: "Stand out with professional branding and marketing strategies that work.",
    },
];

const SERVICES_PREVIEW: [Feature; 4] = [
    Feature {
        icon: "🌐",
        title: "Website & App Development",
        description: "Responsive websites and mobile apps that drive results.",
    },
    Feature {
        icon: "⚡",
        title: "Digital Marketing",
        description: "SEO, social media, and ads that bring real customers.",
    },
    Feature {
        icon: "🎨",
        title: "Branding & Design",
        description: "Logos and visual identity that make you memorable.",
    },
    Feature {
        icon: "🤖",
        title: "Automation & Chatbots",
        description: "Smart automation that saves time and never sleeps.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Page class="home-page">
            // Hero Section
            <section class="section home-hero">
                <div class="hero-glow"></div>
                <div class="hero-orb"></div>
                <div class="container hero-inner">
                    <h1 class={REVEALED_CLASS}>
                        {"More Customers, Less Work — "}
                        <span class="gradient-text">{"Simple Websites & Smart Automation"}</span>
                    </h1>
                    <p class={classes!("hero-subtitle", REVEALED_CLASS)} style={entrance_delay(0.1)}>
                        {"We help small businesses grow online with professional websites, mobile apps, chatbots, branding, and marketing."}
                    </p>
                    <div class={classes!("hero-actions", REVEALED_CLASS)} style={entrance_delay(0.2)}>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary btn-large">
                            {"Get a Free Consultation →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="btn btn-outline btn-large">
                            {"See Our Services"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            // Why Choose Us
            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2 class={CANDIDATE}>
                            {"Why Choose "}<span class="gradient-text">{config::SITE_NAME}</span>
                        </h2>
                        <p class={classes!("muted-text", CANDIDATE)}>
                            {"We make digital simple. No tech jargon, just results that grow your business."}
                        </p>
                    </div>
                    <div class="grid grid-4">
                        {
                            WHY_CHOOSE_US.iter().enumerate().map(|(index, feature)| html! {
                                <FeatureCard key={feature.title} feature={*feature} index={index} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Services Preview
            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class={CANDIDATE}>
                            {"Our "}<span class="gradient-text">{"Services"}</span>
                        </h2>
                        <p class={classes!("muted-text", CANDIDATE)}>
                            {"Everything you need to grow your business online, all in one place."}
                        </p>
                    </div>
                    <div class="grid grid-2 preview-grid">
                        {
                            SERVICES_PREVIEW.iter().enumerate().map(|(index, service)| html! {
                                <div key={service.title} class={CANDIDATE} style={stagger_delay(index)}>
                                    <Link<Route> to={Route::Services} classes="preview-link">
                                        <div class="card preview-card">
                                            <div class="icon-badge preview-icon" aria-hidden="true">{service.icon}</div>
                                            <div>
                                                <h3>{service.title}{" ›"}</h3>
                                                <p class="muted-text">{service.description}</p>
                                            </div>
                                        </div>
                                    </Link<Route>>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class={classes!("view-all", CANDIDATE)}>
                        <Link<Route> to={Route::Services} classes="btn btn-outline btn-large">
                            {"View All Services →"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <CtaSection
                title="Ready to Grow Your Business?"
                text="Let's discuss how we can help you get more customers with less work. Free consultation, no strings attached."
                action="Start Your Project"
                target={CtaTarget::Page(Route::Contact)}
            />

            <style>
                {r#"
                    .home-hero {
                        padding: 8rem 0;
                    }
                    .hero-orb {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 600px;
                        height: 600px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(109, 74, 255, 0.1);
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .hero-inner {
                        position: relative;
                        max-width: 56rem;
                        text-align: center;
                    }
                    .hero-inner h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-top: 2rem;
                    }
                    .preview-grid {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .preview-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        height: 100%;
                    }
                    .preview-icon {
                        background: rgba(109, 74, 255, 0.1);
                        flex-shrink: 0;
                    }
                    .preview-card h3 {
                        font-size: 1.1rem;
                        margin-bottom: 0.25rem;
                    }
                    .view-all {
                        text-align: center;
                        margin-top: 2.5rem;
                    }
                    @media (max-width: 768px) {
                        .home-hero { padding: 5rem 0; }
                        .hero-inner h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
        </Page>
    }
}
