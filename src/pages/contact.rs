use yew::prelude::*;

use crate::components::cta::{CtaSection, CtaTarget};
use crate::components::hero::PageHero;
use crate::components::page::Page;
use crate::config::{self, ContactChannel};
use crate::reveal::{stagger_delay, CANDIDATE};

struct ContactMethod {
    channel: ContactChannel,
    icon: &'static str,
    description: &'static str,
    action: &'static str,
    button_class: &'static str,
}

fn contact_method(channel: ContactChannel) -> ContactMethod {
    let (icon, description, action, button_class) = match channel {
        ContactChannel::WhatsApp => ("💬", "Chat with us instantly", "Open WhatsApp", "btn-whatsapp"),
        ContactChannel::Telegram => ("✈", "Message us on Telegram", "Open Telegram", "btn-telegram"),
        ContactChannel::Email => ("✉", config::EMAIL, "Send Email", "btn-primary"),
        ContactChannel::Phone => ("☎", config::PHONE_DISPLAY, "Call Us", "btn-accent"),
    };
    ContactMethod {
        channel,
        icon,
        description,
        action,
        button_class,
    }
}

const FAQ: [(&str, &str); 3] = [
    (
        "How long does it take to build a website?",
        "Most websites are completed within 7-14 days, depending on complexity. We'll give you a specific timeline during our initial consultation.",
    ),
    (
        "How much does it cost?",
        "Pricing depends on your specific needs. We offer affordable solutions for small businesses. Contact us for a free quote.",
    ),
    (
        "Do you offer ongoing support?",
        "Yes! We offer maintenance and support packages to keep your website running smoothly and help your business continue to grow.",
    ),
];

fn channel_link(channel: ContactChannel, class: Classes, children: Html) -> Html {
    if channel.opens_new_tab() {
        html! {
            <a href={channel.href()} target="_blank" rel="noopener noreferrer" class={class}>{children}</a>
        }
    } else {
        html! {
            <a href={channel.href()} class={class}>{children}</a>
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <Page class="contact-page">
            <PageHero
                title="Let's"
                highlight="Connect"
                subtitle="Ready to grow your business? Reach out through any of these channels — we typically respond within a few hours."
            />

            // Contact Methods
            <section class="section methods-section">
                <div class="container methods">
                    <div class="grid grid-2">
                        {
                            ContactChannel::ALL.into_iter().map(contact_method).enumerate().map(|(index, method)| html! {
                                <div
                                    key={method.channel.label()}
                                    class={classes!("card", "method-card", CANDIDATE)}
                                    style={stagger_delay(index)}
                                >
                                    <div class="icon-badge method-icon" aria-hidden="true">{method.icon}</div>
                                    <div>
                                        <h3>{method.channel.label()}</h3>
                                        <p class="muted-text">{method.description}</p>
                                        {channel_link(
                                            method.channel,
                                            classes!("btn", method.button_class),
                                            html! { {method.action} },
                                        )}
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Quick Message Section
            <section class="section muted">
                <div class={classes!("container", "narrow", "quick-chat", CANDIDATE)}>
                    <h2>{"Prefer a Quick Chat?"}</h2>
                    <p class="muted-text">
                        {"The fastest way to reach us is through WhatsApp or Telegram. We're usually online and respond within minutes during business hours."}
                    </p>
                    <div class="quick-chat-actions">
                        {channel_link(
                            ContactChannel::WhatsApp,
                            classes!("btn", "btn-large", "btn-whatsapp"),
                            html! { {"💬 WhatsApp Us"} },
                        )}
                        {channel_link(
                            ContactChannel::Telegram,
                            classes!("btn", "btn-large", "btn-telegram"),
                            html! { {"✈ Telegram Us"} },
                        )}
                    </div>
                </div>
            </section>

            // FAQ Teaser
            <section class="section">
                <div class="container narrow">
                    <h2 class={classes!("faq-title", CANDIDATE)}>{"Common Questions"}</h2>
                    {
                        FAQ.iter().enumerate().map(|(index, (question, answer))| html! {
                            <div key={*question} class={classes!("card", "faq-item", CANDIDATE)} style={stagger_delay(index)}>
                                <h3>{*question}</h3>
                                <p class="muted-text">{*answer}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <CtaSection
                title="Let's Grow Your Business Together"
                text="No pressure, no obligations. Just a friendly conversation about your business goals."
                action="💬 Start a Conversation"
                target={CtaTarget::External(ContactChannel::WhatsApp.href())}
            />

            <style>
                {r#"
                    .methods {
                        max-width: 56rem;
                    }
                    .method-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                    }
                    .method-icon {
                        background: rgba(109, 74, 255, 0.1);
                        flex-shrink: 0;
                    }
                    .method-card h3 {
                        margin-bottom: 0.25rem;
                    }
                    .method-card p {
                        margin: 0 0 1rem;
                    }
                    .btn-accent {
                        background: var(--accent);
                        color: #fff;
                    }
                    .quick-chat {
                        text-align: center;
                    }
                    .quick-chat p {
                        margin-bottom: 2rem;
                    }
                    .quick-chat-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .faq-title {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .faq-item {
                        margin-bottom: 1.5rem;
                    }
                    .faq-item h3 {
                        font-size: 1.1rem;
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
        </Page>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_gets_a_contact_card() {
        let methods: Vec<_> = ContactChannel::ALL.into_iter().map(contact_method).collect();
        assert_eq!(methods.len(), 4);
        for (method, channel) in methods.iter().zip(ContactChannel::ALL) {
            assert_eq!(method.channel, channel);
            assert!(method.button_class.starts_with("btn-"));
        }
        assert_eq!(methods[2].description, config::EMAIL);
    }
}
