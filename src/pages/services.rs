use yew::prelude::*;

use crate::components::cta::{CtaSection, CtaTarget};
use crate::components::hero::PageHero;
use crate::components::page::Page;
use crate::reveal::CANDIDATE;
use crate::Route;

struct Service {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 6],
}

const SERVICES: [Service; 5] = [
    Service {
        id: "web-dev",
        icon: "🌐",
        title: "Website & App Development",
        description: "We build clean, mobile-friendly websites and apps that load fast and convert visitors into customers.",
        features: [
            "Responsive, mobile-first design",
            "Fast loading & SEO-ready",
            "Business websites & landing pages",
            "E-commerce & online stores",
            "Web & mobile applications",
            "User-friendly interfaces",
        ],
    },
    Service {
        id: "marketing",
        icon: "📈",
        title: "Digital Marketing",
        description: "Attract real customers with targeted marketing campaigns across social media, search engines, and email.",
        features: [
            "Social media strategy & ads",
            "Instagram, TikTok & Facebook campaigns",
            "SEO & Google Ads",
            "Email marketing & newsletters",
            "Content strategy & planning",
            "Analytics & performance tracking",
        ],
    },
    Service {
        id: "branding",
        icon: "🎨",
        title: "Branding & Design",
        description: "Stand out with a professional brand identity that makes you memorable and builds trust with customers.",
        features: [
            "Logo design & brand identity",
            "Brand colors & typography",
            "Marketing materials",
            "Social media graphics",
            "Visual identity guidelines",
            "Cohesive brand presence",
        ],
    },
    Service {
        id: "automation",
        icon: "🤖",
        title: "Automation & Chatbots",
        description: "Save time and never miss a customer with 24/7 automated chat support and workflow automation.",
        features: [
            "Website chatbots",
            "WhatsApp & Telegram bots",
            "FAQ auto-response systems",
            "Booking & appointment automation",
            "CRM & workflow automation",
            "Lead capture & follow-up",
        ],
    },
    Service {
        id: "support",
        icon: "🔧",
        title: "Ongoing Support & Maintenance",
        description: "Keep your digital presence running smoothly with continuous support, updates, and optimization.",
        features: [
            "Website updates & improvements",
            "Performance optimization",
            "Security monitoring & updates",
            "Technical support",
            "Chatbot maintenance",
            "Content updates",
        ],
    },
];

fn service_row(index: usize, service: &Service) -> Html {
    // every other row puts the illustration first
    let flipped = index % 2 == 1;
    html! {
        <div key={service.id} id={service.id} class={classes!("service-row", CANDIDATE, flipped.then(|| "flipped"))}>
            <div class="service-copy">
                <div class="service-title">
                    <div class="icon-badge gradient-bg" aria-hidden="true">{service.icon}</div>
                    <h2>{service.title}</h2>
                </div>
                <p class="muted-text service-description">{service.description}</p>
                <ul class="service-features">
                    {
                        service.features.iter().map(|feature| html! {
                            <li key={*feature}>
                                <span class="check" aria-hidden="true">{"✓"}</span>
                                <span>{*feature}</span>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
            <div class="card service-art">
                <div class="service-art-inner" aria-hidden="true">{service.icon}</div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Page class="services-page">
            <PageHero
                title="Our"
                highlight="Services"
                subtitle="Everything you need to grow your business online. From websites to automation, we've got you covered."
            />

            <section class="section service-list">
                <div class="container">
                    { for SERVICES.iter().enumerate().map(|(index, service)| service_row(index, service)) }
                </div>
            </section>

            <CtaSection
                title="Ready to Get Started?"
                text="Let's discuss which services are right for your business. Free consultation, no obligations."
                action="Get a Free Consultation"
                target={CtaTarget::Page(Route::Contact)}
            />

            <style>
                {r#"
                    .service-list {
                        padding-top: 3rem;
                    }
                    .service-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 6rem;
                    }
                    .service-row.flipped .service-copy {
                        order: 2;
                    }
                    .service-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .service-title .icon-badge {
                        margin-bottom: 0;
                    }
                    .service-title h2 {
                        font-size: 1.9rem;
                        margin: 0;
                    }
                    .service-description {
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-features {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .service-features li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .check {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: rgba(20, 184, 166, 0.2);
                        color: var(--secondary);
                        font-size: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }
                    .service-art {
                        padding: 3rem;
                    }
                    .service-art-inner {
                        aspect-ratio: 16 / 9;
                        border-radius: 0.8rem;
                        background: linear-gradient(135deg, rgba(109, 74, 255, 0.1), rgba(20, 184, 166, 0.1));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 5rem;
                        opacity: 0.4;
                    }
                    @media (max-width: 1024px) {
                        .service-row { grid-template-columns: 1fr; }
                        .service-row.flipped .service-copy { order: 0; }
                    }
                "#}
            </style>
        </Page>
    }
}
