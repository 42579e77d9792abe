use yew::prelude::*;

use crate::components::mockup::PhaseProps;

const OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Static accessibility illustration. Before: after opening the dropdown,
/// the next swipe/tab skips the option list entirely and lands on the
/// control after it. After: focus lands on the first option.
#[function_component(DropdownFocusMockup)]
pub fn dropdown_focus_mockup(props: &PhaseProps) -> Html {
    let after = props.phase.is_after();

    let next_field = html! {
        <button style="margin-top: 18px; padding: 6px 18px; border-radius: 4px; border: 1px solid #bbb; background: #fff; font-size: 13px; cursor: pointer;">{"Next Field"}</button>
    };

    let options = OPTIONS.iter().enumerate().map(|(i, opt)| {
        let style = if after && i == 0 {
            // the option that now receives focus when the dropdown opens
            "padding: 7px 12px; font-size: 13px; color: #444; outline: 2px solid #1a7f37; border-radius: 4px; background: #eafbe7;"
        } else {
            "padding: 7px 12px; font-size: 13px; color: #444;"
        };
        html! { <div key={*opt} style={style}>{ *opt }</div> }
    }).collect::<Html>();

    let submit = if after {
        html! { <button style="margin-top: 18px; padding: 7px 22px; border-radius: 4px; border: 1px solid #bbb; background: #fff; font-size: 14px; cursor: pointer; font-weight: 500;">{"Submit"}</button> }
    } else {
        // the control that wrongly receives focus next
        html! { <button style="margin-top: 18px; padding: 7px 22px; border-radius: 4px; border: 2px solid #1a7f37; background: #fff; font-size: 14px; cursor: pointer; outline: 2px solid #1a7f37; outline-offset: 2px; font-weight: 500;">{"Submit"}</button> }
    };

    html! {
        <div style="margin-bottom: 18px; min-height: 120px; display: flex; flex-direction: column; align-items: center;">
            <div style="width: 180px; position: relative; margin-bottom: 12px;">
                <button style="width: 100%; padding: 6px 0; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer; text-align: left;">{"Dropdown ▼"}</button>
                <div style="position: absolute; top: 36px; left: 0; width: 100%; background: #fff; border: 1px solid #bbb; border-radius: 0 0 6px 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); z-index: 1;">
                    { options }
                </div>
                {
                    if !after {
                        html! {
                            <div style="position: absolute; top: 36px; right: -38px; display: flex; align-items: center; height: 32px;">
                                <span style="font-size: 18px; color: #b00020; font-weight: 700; margin-right: 2px;">{"→"}</span>
                                <span style="font-size: 12px; color: #b00020;">{"skips"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            { next_field }
            { submit }
        </div>
    }
}
