use yew::prelude::*;

use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Container every page renders into. Owns the scroll reveal session for
/// everything inside it.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    let container = use_scroll_reveal();

    html! {
        <main ref={container} class={classes!("page", props.class.clone())}>
            { for props.children.iter() }
        </main>
    }
}
