use yew::prelude::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::mockup::PhaseProps;

pub struct Member {
    pub name: &'static str,
    pub date: &'static str,
    pub priority: bool,
}

pub static MEMBERS: [Member; 4] = [
    Member { name: "Alice", date: "2024-07-01", priority: false },
    Member { name: "Bob", date: "2024-07-02", priority: true },
    Member { name: "Carol", date: "2024-07-03", priority: true },
    Member { name: "David", date: "2024-07-04", priority: false },
];

pub fn visible_members(only_priority: bool) -> Vec<&'static Member> {
    MEMBERS
        .iter()
        .filter(|m| !only_priority || m.priority)
        .collect()
}

fn star() -> Html {
    html! {
        <span style="color: #f5c518; margin-left: 4px; font-size: 16px;" title="Priority Member">{"★"}</span>
    }
}

/// Member grid with a priority filter. The filter works the same in both
/// phases; only the after phase marks the filter label and the priority rows
/// with the app's star glyph.
#[function_component(PriorityMembersMockup)]
pub fn priority_members_mockup(props: &PhaseProps) -> Html {
    let filter_priority = use_state(|| true);
    let marked = props.phase.is_after();

    let on_toggle = {
        let filter_priority = filter_priority.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter_priority.set(input.checked());
        })
    };

    let rows = visible_members(*filter_priority);

    html! {
        <div style="margin-bottom: 18px; max-width: 400px;">
            <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 12px;">
                <label style="display: flex; align-items: center; gap: 4px; font-size: 13px; color: #555; font-weight: 500; cursor: pointer; margin-bottom: 0; user-select: none;">
                    <input
                        type="checkbox"
                        checked={*filter_priority}
                        onchange={on_toggle}
                        style="margin-right: 4px;"
                    />
                    {"Priority Members"}
                </label>
                { if marked { star() } else { html! {} } }
            </div>
            <div style="border: 1px solid #bbb; border-radius: 6px; background: #fff; width: 260px; font-size: 13px; overflow: hidden;">
                <div style="display: flex; background: #f5f5f5; font-weight: 500;">
                    <div style="flex: 1; padding: 6px 10px; border-right: 1px solid #eee;">{"Member"}</div>
                    <div style="flex: 1; padding: 6px 10px;">{"Visit Date"}</div>
                </div>
                {
                    rows.iter().enumerate().map(|(i, m)| {
                        let row_style = if i % 2 == 1 {
                            "display: flex; background: #fafbfc;"
                        } else {
                            "display: flex;"
                        };
                        html! {
                            <div key={m.name} style={row_style}>
                                <div style="flex: 1; padding: 6px 10px; display: flex; align-items: center;">
                                    { m.name }
                                    { if marked && m.priority { star() } else { html! {} } }
                                </div>
                                <div style="flex: 1; padding: 6px 10px;">{ m.date }</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_members;

    #[test]
    fn filter_on_keeps_priority_members_only() {
        let names: Vec<_> = visible_members(true).iter().map(|m| m.name).collect();
        assert_eq!(names, ["Bob", "Carol"]);
    }

    #[test]
    fn filter_off_shows_full_roster() {
        let names: Vec<_> = visible_members(false).iter().map(|m| m.name).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol", "David"]);
    }
}
