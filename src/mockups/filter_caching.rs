use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::loading_dots::LoadingDots;
use crate::components::mockup::PhaseProps;
use crate::config;

pub const OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Session state for the single status dropdown: closed, open while the
/// simulated fetch is pending, or open with options showing. `cached` sticks
/// for the lifetime of the instance once the first fetch completes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CacheState {
    pub open: bool,
    pub loading: bool,
    pub cached: bool,
}

impl CacheState {
    /// Before phase: every open transition re-fetches. Closing never loads.
    pub fn toggle_reload(self) -> Self {
        if self.open {
            Self { open: false, loading: false, ..self }
        } else {
            Self { open: true, loading: true, ..self }
        }
    }

    /// After phase: only the first open fetches; once cached, opens are
    /// instant. Closing never re-enters loading, cached or not.
    pub fn toggle_cached(self) -> Self {
        if self.open {
            Self { open: false, loading: false, ..self }
        } else {
            Self { open: true, loading: !self.cached, ..self }
        }
    }

    /// Fetch completion when the result is kept for later opens.
    pub fn finish_and_cache(self) -> Self {
        if self.loading {
            Self { loading: false, cached: true, ..self }
        } else {
            self
        }
    }

    /// Fetch completion when nothing is kept (the before phase).
    pub fn finish_discard(self) -> Self {
        if self.loading {
            Self { loading: false, ..self }
        } else {
            self
        }
    }

    pub fn status_label(self) -> &'static str {
        if self.cached {
            "cached"
        } else {
            "loads on click"
        }
    }
}

/// One status dropdown contrasting re-fetch-on-every-open with
/// fetch-once-then-cache.
#[function_component(FilterCachingMockup)]
pub fn filter_caching_mockup(props: &PhaseProps) -> Html {
    let state = use_state(CacheState::default);
    // Pending simulated fetch; replacing the handle cancels a stale one.
    let pending = use_mut_ref(|| None::<Timeout>);
    let caching = props.phase.is_after();

    let onclick = {
        let state = state.clone();
        let pending = pending.clone();
        Callback::from(move |_| {
            let next = if caching {
                state.toggle_cached()
            } else {
                state.toggle_reload()
            };
            *pending.borrow_mut() = None;
            if next.loading {
                let state = state.clone();
                *pending.borrow_mut() = Some(Timeout::new(config::CACHE_LOAD_MS, move || {
                    let done = if caching {
                        next.finish_and_cache()
                    } else {
                        next.finish_discard()
                    };
                    state.set(done);
                }));
            }
            state.set(next);
        })
    };

    let intro = if caching {
        "Caching added. Loads once, then opens instantly:"
    } else {
        "No caching. Dropdown loads every time it is opened:"
    };

    let hint = if caching && state.cached {
        html! { <span style="font-size: 11px; color: #1a7f37; margin-top: 4px; min-height: 16px; display: block; text-align: center; font-weight: 500;">{ state.status_label() }</span> }
    } else {
        html! { <span style="font-size: 11px; color: #888; margin-top: 4px; min-height: 16px; display: block; text-align: center;">{ state.status_label() }</span> }
    };

    html! {
        <div style="margin-bottom: 18px; max-width: 320px; display: flex; flex-direction: column; align-items: center;">
            <div style="font-size: 13px; color: #888; margin-bottom: 8px;">{ intro }</div>
            <div style="display: flex; flex-direction: column; align-items: center; min-width: 140px; position: relative;">
                <button
                    style="width: 140px; padding: 6px 0; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;"
                    onclick={onclick}
                >
                    {"Status ▼"}
                </button>
                { hint }
                {
                    if state.open {
                        html! {
                            <div style="position: absolute; top: 36px; left: 0; width: 140px; background: #fff; border: 1px solid #bbb; border-radius: 0 0 6px 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); z-index: 1;">
                                {
                                    if state.loading {
                                        html! { <div style="padding: 12px; text-align: center;"><LoadingDots /></div> }
                                    } else {
                                        OPTIONS.iter().map(|opt| html! {
                                            <div key={*opt} style="padding: 7px 12px; font-size: 13px; color: #444; cursor: pointer;">{ *opt }</div>
                                        }).collect::<Html>()
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::CacheState;

    #[test]
    fn first_open_loads_then_caches() {
        let s = CacheState::default();
        assert_eq!(s.status_label(), "loads on click");

        let s = s.toggle_cached();
        assert!(s.open && s.loading && !s.cached);

        let s = s.finish_and_cache();
        assert!(s.open && !s.loading && s.cached);
        assert_eq!(s.status_label(), "cached");
    }

    #[test]
    fn second_cycle_skips_loading() {
        let s = CacheState::default().toggle_cached().finish_and_cache();
        let s = s.toggle_cached(); // close
        assert!(!s.open && !s.loading);

        let s = s.toggle_cached(); // instant re-open
        assert!(s.open && !s.loading && s.cached);
    }

    #[test]
    fn closing_never_reenters_loading() {
        // mid-load close
        let s = CacheState::default().toggle_cached();
        let s = s.toggle_cached();
        assert!(!s.open && !s.loading);

        // cached close
        let s = CacheState::default().toggle_cached().finish_and_cache().toggle_cached();
        assert!(!s.open && !s.loading);
    }

    #[test]
    fn reload_phase_fetches_on_every_open() {
        let s = CacheState::default().toggle_reload();
        assert!(s.open && s.loading);

        let s = s.finish_discard();
        assert!(!s.cached);

        let s = s.toggle_reload().toggle_reload();
        assert!(s.open && s.loading, "re-open must reload");
    }

    #[test]
    fn stale_completion_is_a_no_op() {
        let s = CacheState::default().toggle_cached().toggle_cached();
        assert_eq!(s.finish_and_cache(), s);
    }
}
