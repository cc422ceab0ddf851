use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, ContactChannel};
use crate::Route;

const SERVICES: [&str; 5] = [
    "Website Development",
    "Mobile Apps",
    "Digital Marketing",
    "Branding & Design",
    "Automation & Chatbots",
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="gradient-text">{config::SITE_NAME}</span>
                    </Link<Route>>
                    <p class="muted-text">
                        {"Helping small businesses grow online with professional websites, apps, and automation."}
                    </p>
                    <div class="footer-social">
                        <a href={ContactChannel::WhatsApp.href()} target="_blank" rel="noopener noreferrer"
                            class="social-button" aria-label="WhatsApp">{"💬"}</a>
                        <a href={ContactChannel::Telegram.href()} target="_blank" rel="noopener noreferrer"
                            class="social-button" aria-label="Telegram">{"✈"}</a>
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {
                            Route::NAV.iter().map(|(route, label)| html! {
                                <li>
                                    <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        {
                            SERVICES.iter().map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::Services} classes="footer-link">{*service}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact Us"}</h4>
                    <ul>
                        <li>
                            <a href={ContactChannel::Email.href()} class="footer-link">{"✉ "}{config::EMAIL}</a>
                        </li>
                        <li>
                            <a href={ContactChannel::Phone.href()} class="footer-link">{"☎ "}{config::PHONE_DISPLAY}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p class="muted-text">{copyright_line(year)}</p>
                <p class="muted-text">{config::TAGLINE}</p>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: var(--card);
                        border-top: 1px solid var(--border);
                        padding: 4rem 0 2rem;
                        font-size: 0.9rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.75rem;
                    }
                    .footer-link {
                        color: var(--muted);
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover {
                        color: var(--primary);
                    }
                    .footer-social {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .social-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: 1px solid var(--border);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_site() {
        assert_eq!(copyright_line(2026), "© 2026 Shosh Digital. All rights reserved.");
    }
}
