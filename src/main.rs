use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod reveal;
mod theme;
mod components {
    pub mod cta;
    pub mod feature_card;
    pub mod footer;
    pub mod hero;
    pub mod page;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod how_it_works;
    pub mod not_found;
    pub mod services;
}

use components::footer::Footer;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    how_it_works::HowItWorks,
    not_found::NotFound,
    services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages listed in the navigation bar and the footer, in display order.
    pub const NAV: [(Route, &'static str); 5] = [
        (Route::Home, "Home"),
        (Route::Services, "Services"),
        (Route::HowItWorks, "How It Works"),
        (Route::About, "About"),
        (Route::Contact, "Contact"),
    ];
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y > 20.0);
                        }
                    }
                });
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Failed to attach scroll listener: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="gradient-text">{config::SITE_NAME}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        Route::NAV.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary nav-cta">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{theme::SITE_CSS}</style>
            <style>{reveal::REVEAL_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_routes_resolve_to_their_paths() {
        let paths: Vec<String> = Route::NAV.iter().map(|(route, _)| route.to_path()).collect();
        assert_eq!(paths, vec!["/", "/services", "/how-it-works", "/about", "/contact"]);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        let route = Route::recognize("/pricing").or_else(Route::not_found_route);
        assert_eq!(route, Some(Route::NotFound));
        assert_eq!(Route::recognize("/how-it-works"), Some(Route::HowItWorks));
    }
}
