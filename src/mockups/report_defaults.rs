use yew::prelude::*;
use chrono::{Duration, Local, NaiveDate};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};

use crate::components::mockup::PhaseProps;

pub const DEFAULT_SORT: &str = "Date (desc)";
pub const SORT_OPTIONS: [&str; 2] = ["Date (desc)", "Date (asc)"];

/// Pre-filled range for the after phase: the two weeks ending today.
pub fn default_range(today: NaiveDate) -> (String, String) {
    let from = today - Duration::days(14);
    (
        from.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

pub fn all_filled(from: &str, to: &str, sort: &str) -> bool {
    !from.is_empty() && !to.is_empty() && !sort.is_empty()
}

/// Report form with three required fields. Before: everything starts empty
/// and nags under each field. After: sensible defaults are filled in on
/// mount. The print button is gated on completeness in both phases.
#[function_component(ReportDefaultsMockup)]
pub fn report_defaults_mockup(props: &PhaseProps) -> Html {
    let from = use_state(String::new);
    let to = use_state(String::new);
    let sort = use_state(String::new);

    {
        let from = from.clone();
        let to = to.clone();
        let sort = sort.clone();
        let prefill = props.phase.is_after();
        use_effect_with_deps(
            move |_| {
                if prefill {
                    let (from_default, to_default) = default_range(Local::now().date_naive());
                    from.set(from_default);
                    to.set(to_default);
                    sort.set(DEFAULT_SORT.to_string());
                }
                || ()
            },
            (),
        );
    }

    let filled = all_filled(&from, &to, &sort);
    let show_nags = !props.phase.is_after();

    let on_from = {
        let from = from.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            from.set(input.value());
        })
    };
    let on_to = {
        let to = to.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to.set(input.value());
        })
    };
    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort.set(select.value());
        })
    };

    let submit_style = if filled {
        "padding: 8px 28px; border-radius: 4px; border: 1px solid #bbb; background: #fff; color: #222; font-size: 15px; font-weight: 500; cursor: pointer;"
    } else {
        "padding: 8px 28px; border-radius: 4px; border: 1px solid #bbb; background: #f5f5f5; color: #bbb; font-size: 15px; font-weight: 500; cursor: not-allowed; opacity: 0.6;"
    };

    html! {
        <div style="margin-bottom: 18px; max-width: 400px;">
            <div class="wire-label">{"From"}<span style="color: #b00020;">{" *"}</span></div>
            <input type="date" class="wire-input" value={(*from).clone()} onchange={on_from} style="margin-bottom: 2px;" />
            { if show_nags && from.is_empty() { html! { <div class="wire-error">{"Please select a from date"}</div> } } else { html! {} } }
            <div class="wire-label">{"To"}<span style="color: #b00020;">{" *"}</span></div>
            <input type="date" class="wire-input" value={(*to).clone()} onchange={on_to} style="margin-bottom: 2px;" />
            { if show_nags && to.is_empty() { html! { <div class="wire-error">{"Please select a to date"}</div> } } else { html! {} } }
            <div class="wire-label">{"Sort By"}<span style="color: #b00020;">{" *"}</span></div>
            <select class="wire-input" onchange={on_sort} style="margin-bottom: 2px;">
                <option value="" selected={sort.is_empty()}>{"Select sort method"}</option>
                {
                    SORT_OPTIONS.iter().map(|opt| html! {
                        <option value={*opt} selected={*sort == *opt}>{ *opt }</option>
                    }).collect::<Html>()
                }
            </select>
            { if show_nags && sort.is_empty() { html! { <div class="wire-error">{"Please select a sort method"}</div> } } else { html! {} } }
            <div style="margin-top: 18px; text-align: center;">
                <button style={submit_style} disabled={!filled}>{"Print Report"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ends_today_and_spans_two_weeks() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let (from, to) = default_range(today);
        assert_eq!(from, "2024-07-01");
        assert_eq!(to, "2024-07-15");
    }

    #[test]
    fn range_crosses_month_and_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let (from, to) = default_range(today);
        assert_eq!(from, "2023-12-22");
        assert_eq!(to, "2024-01-05");
    }

    #[test]
    fn submit_gates_on_all_three_fields() {
        assert!(!all_filled("", "", ""));
        assert!(!all_filled("2024-07-01", "2024-07-15", ""));
        assert!(!all_filled("2024-07-01", "", DEFAULT_SORT));
        assert!(!all_filled("", "2024-07-15", DEFAULT_SORT));
        // filling the last field flips the gate
        assert!(all_filled("2024-07-01", "2024-07-15", DEFAULT_SORT));
    }
}
