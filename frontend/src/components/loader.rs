use gloo_timers::callback::Timeout;
use yew::prelude::*;

const LOADER_MS: u32 = 1_200;

/// Full-screen intro loader, removed after a short delay.
#[function_component(Loader)]
pub fn loader() -> Html {
    let done = use_state(|| false);
    {
        let done = done.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADER_MS, move || done.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    if *done {
        return html! {};
    }

    html! {
        <div class="loader-overlay">
            <div class="banter-loader">
                { for (0..9).map(|i| html! { <div key={i} class="banter-loader__box"></div> }) }
            </div>
        </div>
    }
}
