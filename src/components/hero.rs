use yew::prelude::*;

use crate::reveal::{entrance_delay, REVEALED_CLASS};

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    /// Trailing part of the title drawn with the brand gradient.
    pub highlight: AttrValue,
    pub subtitle: AttrValue,
}

/// Top banner of the inner pages. Animates in on load, not on scroll.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="section page-hero">
            <div class="hero-glow"></div>
            <div class="container narrow hero-text">
                <h1 class={REVEALED_CLASS}>
                    {&props.title}{" "}<span class="gradient-text">{&props.highlight}</span>
                </h1>
                <p class={classes!("hero-subtitle", REVEALED_CLASS)} style={entrance_delay(0.1)}>
                    {&props.subtitle}
                </p>
            </div>
            <style>
                {r#"
                    .page-hero {
                        padding: 6rem 0 5rem;
                    }
                    .hero-text {
                        text-align: center;
                        position: relative;
                    }
                    .hero-text h1 {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .hero-text h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
        </section>
    }
}
