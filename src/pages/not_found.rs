use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::Page;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Page class="not-found-page">
            <section class="section">
                <div class="container narrow not-found">
                    <h1 class="gradient-text">{"404"}</h1>
                    <p class="muted-text">{"Oops! This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Return to Home"}
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                    .not-found {
                        text-align: center;
                        min-height: 50vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
        </Page>
    }
}
