use yew::prelude::*;

use crate::components::mockup::PhaseProps;

pub const BUTTONS: [&str; 4] = ["Print PDF", "Print CSV", "Export", "Share"];

/// Action-button row above a data grid. Before: fixed-width buttons where the
/// fourth wraps onto a misaligned second line. After: flexible equal sizing
/// so the row wraps evenly.
#[function_component(ResponsiveButtonsMockup)]
pub fn responsive_buttons_mockup(props: &PhaseProps) -> Html {
    if !props.phase.is_after() {
        let fixed = "flex: 0 0 auto; margin-right: 8px; padding: 6px 14px; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;";
        return html! {
            <div style="margin-bottom: 18px; max-width: 300px;">
                <div style="display: flex; flex-wrap: wrap; gap: 0;">
                    <button style={fixed}>{ BUTTONS[0] }</button>
                    <button style={fixed}>{ BUTTONS[1] }</button>
                    <button style="flex: 0 0 auto; padding: 6px 14px; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;">{ BUTTONS[2] }</button>
                </div>
                // fourth button wrapped below, touching the row above and indented oddly
                <div style="display: flex;">
                    <button style="flex: 0 0 auto; margin-left: 32px; padding: 6px 14px; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;">{ BUTTONS[3] }</button>
                </div>
                { report_grid() }
            </div>
        };
    }

    html! {
        <div style="margin-bottom: 18px; max-width: 300px;">
            <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                {
                    BUTTONS.iter().map(|label| html! {
                        <button
                            key={*label}
                            style="flex: 1 1 120px; min-width: 100px; margin: 0; padding: 6px 14px; border: 1px solid #bbb; border-radius: 4px; background: #fff; font-size: 13px; cursor: pointer;"
                        >
                            { *label }
                        </button>
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
        <div style="margin-top: 18px; border: 1px solid #bbb; border-radius: 6px; background: #fff; width: 340px; font-size: 13px; overflow: hidden;">
            <div style="display: flex; background: #f5f5f5; font-weight: 500;">
                <div style={cell}>{"Name"}</div>
                <div style={cell}>{"Status"}</div>
                <div style={last}>{"Type"}</div>
            </div>
            <div style="display: flex;">
                <div style={cell}>{"Report 1"}</div>
                <div style={cell}>{"Ready"}</div>
                <div style={last}>{"Summary"}</div>
            </div>
            <div style="display: flex; background: #fafbfc;">
                <div style={cell}>{"Report 2"}</div>
                <div style={cell}>{"Pending"}</div>
                <div style={last}>{"Detail"}</div>
            </div>
        </div>
    }
}
