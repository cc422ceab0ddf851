use yew::prelude::*;

use crate::reveal::{stagger_delay, CANDIDATE};

/// Icon, title and blurb. The same shape backs every card grid on the site.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    /// Position in its row, drives the stagger.
    pub index: usize,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = props.feature;
    html! {
        <div
            class={classes!("card", "feature-card", CANDIDATE, props.centered.then(|| "centered"))}
            style={stagger_delay(props.index)}
        >
            <div class="icon-badge gradient-bg" aria-hidden="true">{icon}</div>
            <h3>{title}</h3>
            <p class="muted-text">{description}</p>
        </div>
    }
}
