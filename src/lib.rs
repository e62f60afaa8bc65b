//! Client-side app for the Forge Structural marketing site.
//!
//! One routed page plus a fixed nav whose highlight, menu and condensed
//! states track the scroll position. The behavior modules under `src/`
//! keep their rules separate from the markup so they can be tested
//! without a browser.

use log::info;
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod counters;
pub mod phone;
pub mod reveal;
pub mod sections;
pub mod visual;

pub mod components {
    pub mod contact_form;
}
pub mod pages {
    pub mod home;
}

use pages::home::Home;

/// Sections the nav links to, in page order.
const NAV_LINKS: [(&str, &str); 7] = [
    ("services", "Services"),
    ("projects", "Projects"),
    ("process", "Process"),
    ("about", "About"),
    ("areas", "Areas"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// Rules several components rely on but none owns: the nav highlight, the
/// form validation marks and the hovered-card accent. Injected once for
/// the whole page.
const GLOBAL_RULES: &str = r#"
    .nav-links a.active {
        color: var(--color-text);
    }

    .nav-links a.active::after {
        width: 100%;
    }

    .form-group input.error,
    .form-group select.error,
    .form-group textarea.error {
        border-color: #ef4444;
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
    }

    .service-card.highlighted {
        border-color: var(--color-accent);
        transform: translateY(-4px);
    }
"#;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the site"}</Link<Route>>
            </main>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::NAV_SCROLLED_OFFSET);
                    let spans = sections::measure(&document);
                    active.set(sections::active_section(&spans, scroll_y).map(str::to_string));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Prime the highlight for wherever the page loaded.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = if let Some(document) = document {
                    let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" {
                            menu_open.set(false);
                        }
                    })
                        as Box<dyn FnMut(KeyboardEvent)>);

                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            keydown_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    Box::new(move || {
                        document
                            .remove_event_listener_with_callback(
                                "keydown",
                                keydown_callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        sections::scroll_to_section("home");
    });

    let nav_link = {
        let menu_open = menu_open.clone();
        let active = active.clone();
        move |id: &'static str, label: &'static str| -> Html {
            let onclick = {
                let menu_open = menu_open.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    sections::scroll_to_section(id);
                })
            };
            let class = classes!(
                "nav-link",
                ((*active).as_deref() == Some(id)).then(|| visual::ACTIVE)
            );
            html! {
                <a href={format!("#{id}")} class={class} onclick={onclick}>{label}</a>
            }
        }
    };

    html! {
        <nav class={classes!("site-nav", (*is_scrolled).then(|| visual::SCROLLED))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={logo_click}>
                    {"Forge"}<span class="logo-accent">{"Structural"}</span>
                </a>
                <button
                    class={classes!("nav-toggle", (*menu_open).then(|| visual::ACTIVE))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| visual::ACTIVE))}>
                    { for NAV_LINKS.iter().map(|&(id, label)| nav_link(id, label)) }
                </div>
            </div>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.1rem 1.5rem;
                    transition: padding 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                }

                .site-nav.scrolled {
                    padding: 0.6rem 1.5rem;
                    background: rgba(12, 10, 9, 0.92);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 var(--color-border);
                }

                .nav-content {
                    max-width: 1120px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 800;
                    font-size: 1.15rem;
                    letter-spacing: 0.01em;
                }

                .logo-accent {
                    color: var(--color-accent);
                    margin-left: 0.3rem;
                }

                .nav-links {
                    display: flex;
                    gap: 1.75rem;
                }

                .nav-links a {
                    position: relative;
                    color: var(--color-text-muted);
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }

                .nav-links a:hover {
                    color: var(--color-text);
                }

                .nav-links a::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -6px;
                    width: 0;
                    height: 2px;
                    background: var(--color-accent);
                    transition: width 0.25s ease;
                }

                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .nav-toggle span {
                    width: 22px;
                    height: 2px;
                    background: var(--color-text);
                    transition: transform 0.25s ease, opacity 0.25s ease;
                }

                .nav-toggle.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .nav-toggle.active span:nth-child(2) {
                    opacity: 0;
                }

                .nav-toggle.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 820px) {
                    .nav-toggle {
                        display: flex;
                    }

                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: rgba(12, 10, 9, 0.97);
                        border-bottom: 1px solid var(--color-border);
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .nav-links.active {
                        max-height: 420px;
                    }

                    .nav-links a {
                        padding: 1rem 1.5rem;
                    }

                    .nav-links a::after {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={GLOBAL_RULES} />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
