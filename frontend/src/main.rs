use log::{error, info};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod carousel;
mod config;
mod contact;
mod data;
mod components {
    pub mod blog;
    pub mod contact_form;
    pub mod footer;
    pub mod hero;
    pub mod illustration;
    pub mod loader;
    pub mod portfolio;
    pub mod section_boundary;
    pub mod services;
    pub mod skills;
    pub mod team;
}
mod pages {
    pub mod blog_post;
    pub mod home;
    pub mod not_found;
}

use animation::{use_scroll_y, AnimationsProvider};
use components::{footer::SECTION_LINKS, loader::Loader};
use pages::{blog_post::BlogPost as BlogPostPage, home::Home, not_found::NotFound};

const SCROLLED_AFTER_PX: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <>
                    <Loader />
                    <Home />
                </>
            }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Smooth-scrolls to a section if it is mounted.
fn scroll_to_section(href: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(href.trim_start_matches('#')))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_y = use_scroll_y();
    let navigator = use_navigator();
    let on_home = use_route::<Route>().map_or(true, |route| route == Route::Home);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |href: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            if on_home && scroll_to_section(href) {
                e.prevent_default();
            } else if let Some(navigator) = &navigator {
                e.prevent_default();
                navigator.push(&Route::Home);
            } else {
                error!("No navigator available for {}", href);
            }
        });
        html! {
            <a key={href} class="nav-link" {href} {onclick}>{label}</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (scroll_y > SCROLLED_AFTER_PX).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logo.png" alt="SurCode" />
                </Link<Route>>
                <button class="burger-menu" aria-label="Menú" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={menu_class}>
                    { for SECTION_LINKS.iter().map(|&(href, label)| link(href, label)) }
                </nav>
                { link("#contact", "Contactanos!") }
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <AnimationsProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AnimationsProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
