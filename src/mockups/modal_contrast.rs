use yew::prelude::*;

use crate::components::mockup::PhaseProps;

/// Static confirmation dialog. The only difference between phases is the
/// close glyph's contrast against the modal background.
#[function_component(ModalContrastMockup)]
pub fn modal_contrast_mockup(props: &PhaseProps) -> Html {
    let close_color = if props.phase.is_after() { "#111" } else { "#f7f7f7" };
    let close_style = format!(
        "position: absolute; top: 12px; right: 12px; font-size: 22px; font-weight: 400; cursor: pointer; border: none; background: none; padding: 0; line-height: 1; color: {};",
        close_color,
    );

    html! {
        <div style="margin-bottom: 18px; min-height: 180px; display: flex; align-items: center; justify-content: center;">
            <div style="width: 200px; min-height: 50px; background: #fff; border: 1px solid #bbb; border-radius: 10px; box-shadow: 0 2px 12px rgba(0,0,0,0.08); position: absolute; padding: 8px 8px 16px 8px; margin: 0 auto; display: flex; flex-direction: column; align-items: center;">
                <button style={close_style} aria-label="Close">{"×"}</button>
                <div style="font-size: 16px; font-weight: 500; margin-bottom: 18px; margin-top: 8px; color: #222;">{"Delete Item?"}</div>
                <div style="font-size: 13px; color: #555; margin-bottom: 16px; text-align: center;">
                    {"Are you sure you want to delete this item? This action cannot be undone."}
                </div>
                <div style="display: flex; gap: 8px; justify-content: center; width: 100%;">
                    <button style="padding: 7px 18px; border-radius: 4px; border: 1px solid #bbb; background: #fff; font-size: 13px; cursor: pointer;">{"Cancel"}</button>
                    <button style="padding: 7px 18px; border-radius: 4px; border: 1px solid #b00020; background: #fff0f0; color: #b00020; font-size: 13px; cursor: pointer; font-weight: 500;">{"Yes"}</button>
                </div>
            </div>
        </div>
    }
}
