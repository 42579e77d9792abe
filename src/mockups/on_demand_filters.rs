use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::loading_dots::LoadingDots;
use crate::components::mockup::PhaseProps;
use crate::config;

pub const FILTERS: [&str; 4] = ["Status", "Type", "Owner", "Date"];
pub const OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Session state for the filter row. At most one dropdown is open at a time,
/// so open-state is a single index rather than a set.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PanelState {
    pub open: Option<usize>,
    pub loading: Option<usize>,
}

impl PanelState {
    /// Before phase: options were fetched at page load, so a click only
    /// opens or closes.
    pub fn toggle_preloaded(self, index: usize) -> Self {
        Self {
            open: if self.open == Some(index) { None } else { Some(index) },
            loading: None,
        }
    }

    /// After phase: a fresh open starts that dropdown's simulated fetch.
    /// Opening one dropdown closes any other open one.
    pub fn toggle_lazy(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None, loading: None }
        } else {
            Self { open: Some(index), loading: Some(index) }
        }
    }

    /// Completion of the simulated fetch. Stale completions (the dropdown is
    /// no longer the loading one) are no-ops.
    pub fn finish_load(self, index: usize) -> Self {
        if self.loading == Some(index) {
            Self { loading: None, ..self }
        } else {
            self
        }
    }
}

/// Four filter dropdowns over a data grid. Before: every option list was
/// fetched on page load. After: each list is fetched the first time its
/// dropdown is opened, showing the loading dots while the fetch is pending.
#[function_component(OnDemandFiltersMockup)]
pub fn on_demand_filters_mockup(props: &PhaseProps) -> Html {
    let state = use_state(PanelState::default);
    // Pending simulated fetch. Replacing the handle drops the old timeout,
    // so a rapid re-toggle can never deliver a stale completion.
    let pending = use_mut_ref(|| None::<Timeout>);
    let lazy = props.phase.is_after();

    let on_toggle = {
        let state = state.clone();
        let pending = pending.clone();
        Callback::from(move |index: usize| {
            let next = if lazy {
                state.toggle_lazy(index)
            } else {
                state.toggle_preloaded(index)
            };
            *pending.borrow_mut() = None;
            if next.loading == Some(index) {
                let state = state.clone();
                *pending.borrow_mut() = Some(Timeout::new(config::FILTER_LOAD_MS, move || {
                    state.set(next.finish_load(index));
                }));
            }
            state.set(next);
        })
    };

    let hint = if lazy {
        html! { <span style="font-size: 11px; color: #888; margin-top: 4px; min-height: 16px; display: block; text-align: center;">{"loads on click"}</span> }
    } else {
        html! { <span style="font-size: 11px; color: #1a7f37; margin-top: 4px; min-height: 16px; display: block; text-align: center; font-weight: 500;">{"loaded on init."}</span> }
    };

    html! {
        <div style="margin-bottom: 18px; max-width: 420px;">
            <div style="display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 8px; justify-content: center;">
                {
                    FILTERS.iter().enumerate().map(|(i, label)| {
                        let onclick = {
                            let on_toggle = on_toggle.clone();
                            Callback::from(move |_| on_toggle.emit(i))
                        };
                        html! {
                            <div key={*label} style="display: flex; flex-direction: column; align-items: center; flex: 1 1 90px; min-width: 90px; max-width: 140px; position: relative; margin-bottom: 8px;">
                                <button
                                    style="width: 100%; min-width: 80px; max-width: 140px; padding: 6px 0; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;"
                                    onclick={onclick}
                                >
                                    { format!("{} ▼", label) }
                                </button>
                                { hint.clone() }
                                {
                                    if state.open == Some(i) {
                                        html! {
                                            <div style="position: absolute; top: 36px; left: 0; width: 100%; min-width: 80px; max-width: 140px; background: #fff; border: 1px solid #bbb; border-radius: 0 0 6px 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); z-index: 1;">
                                                {
                                                    if state.loading == Some(i) {
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
                        }
                    }).collect::<Html>()
                }
            </div>
            { report_grid() }
        </div>
    }
}

fn report_grid() -> Html {
    let cell = "flex: 1; padding: 6px 10px; border-right: 1px solid #eee;";
    let last = "flex: 1; padding: 6px 10px;";
    html! {
        <div style="width: 100%;">
            <div style="margin-top: 18px; border: 1px solid #bbb; border-radius: 6px; background: #fff; min-width: 420px; font-size: 13px; overflow: hidden;">
                <div style="display: flex; background: #f5f5f5; font-weight: 500;">
                    <div style={cell}>{"Name"}</div>
                    <div style={cell}>{"Status"}</div>
                    <div style={cell}>{"Type"}</div>
                    <div style={last}>{"Owner"}</div>
                    <div style={last}>{"Location"}</div>
                </div>
                <div style="display: flex;">
                    <div style={cell}>{"Report 1"}</div>
                    <div style={cell}>{"Ready"}</div>
                    <div style={cell}>{"Summary"}</div>
                    <div style={cell}>{"Alice"}</div>
                    <div style={last}>{"NYC"}</div>
                </div>
                <div style="display: flex; background: #fafbfc;">
                    <div style={cell}>{"Report 2"}</div>
                    <div style={cell}>{"Pending"}</div>
                    <div style={cell}>{"Detail"}</div>
                    <div style={cell}>{"Bob"}</div>
                    <div style={last}>{"LA"}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::PanelState;

    #[test]
    fn lazy_open_starts_loading_then_reveals_options() {
        let s = PanelState::default().toggle_lazy(2);
        assert_eq!(s.open, Some(2));
        assert_eq!(s.loading, Some(2));

        let s = s.finish_load(2);
        assert_eq!(s.open, Some(2));
        assert_eq!(s.loading, None);
    }

    #[test]
    fn only_one_dropdown_open_at_a_time() {
        let s = PanelState::default().toggle_lazy(2).finish_load(2);
        let s = s.toggle_lazy(0);
        assert_eq!(s.open, Some(0));
        assert_eq!(s.loading, Some(0));
    }

    #[test]
    fn stale_completion_is_a_no_op() {
        let s = PanelState::default().toggle_lazy(2);
        let s = s.toggle_lazy(0);
        assert_eq!(s.finish_load(2), s);
    }

    #[test]
    fn toggling_an_open_dropdown_closes_it() {
        let s = PanelState::default().toggle_lazy(1).finish_load(1);
        let s = s.toggle_lazy(1);
        assert_eq!(s, PanelState::default());
    }

    #[test]
    fn preloaded_toggle_never_loads() {
        let s = PanelState::default().toggle_preloaded(3);
        assert_eq!(s.open, Some(3));
        assert_eq!(s.loading, None);
        assert_eq!(s.toggle_preloaded(3), PanelState::default());
    }
}
