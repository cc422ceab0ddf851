use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::CANDIDATE;
use crate::Route;

#[derive(Clone, PartialEq)]
pub enum CtaTarget {
    Page(Route),
    External(String),
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub action: AttrValue,
    pub target: CtaTarget,
}

/// Closing call to action at the bottom of each page.
#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let button = match &props.target {
        CtaTarget::Page(route) => html! {
            <Link<Route> to={route.clone()} classes="btn btn-primary btn-large">
                {&props.action}{" →"}
            </Link<Route>>
        },
        CtaTarget::External(href) => html! {
            <a href={href.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-large">
                {&props.action}
            </a>
        },
    };

    html! {
        <section class="section cta-section">
            <div class="cta-glow gradient-bg"></div>
            <div class={classes!("container", "narrow", "cta-content", CANDIDATE)}>
                <h2>{&props.title}</h2>
                <p class="muted-text">{&props.text}</p>
                {button}
            </div>
            <style>
                {r#"
                    .cta-glow {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        pointer-events: none;
                    }
                    .cta-content {
                        position: relative;
                        text-align: center;
                    }
                    .cta-content h2 {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .cta-content p {
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
        </section>
    }
}
