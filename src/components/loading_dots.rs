use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::config;

/// Animated "Loading." / "Loading.." / "Loading..." indicator shown while a
/// simulated fetch is pending. The interval handle is dropped in the effect
/// cleanup, so the tick stops as soon as the indicator unmounts.
#[function_component(LoadingDots)]
pub fn loading_dots() -> Html {
    let dots = use_state(|| ".".to_string());

    {
        let dots = dots.clone();
        use_effect_with_deps(
            move |_| {
                let mut count = 1usize;
                let interval = Interval::new(config::DOTS_TICK_MS, move || {
                    count = if count < 3 { count + 1 } else { 1 };
                    dots.set(".".repeat(count));
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <span style="color: #888; font-size: 13px;">{ format!("Loading{}", *dots) }</span>
    }
}
