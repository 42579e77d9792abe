use yew::prelude::*;

use crate::components::mockup::PhaseProps;

/// Nine-digit IDs paired with names; in the narrow column the last digit
/// wraps to a second line.
const ROWS: [(&str, &str); 4] = [
    ("123456789", "John Doe"),
    ("987654321", "Jane Smith"),
    ("555555555", "Alex Kim"),
    ("246813579", "Maria Lopez"),
];

/// PDF table contrast: a too-narrow ID column doubles every row's height;
/// a slightly wider one keeps rows single-height.
#[function_component(RowHeightMockup)]
pub fn row_height_mockup(props: &PhaseProps) -> Html {
    let after = props.phase.is_after();

    let caption = if after {
        "PDF Table (After: ID fits, single row height)"
    } else {
        "PDF Table (Before: ID wraps, double row height)"
    };

    let rows = ROWS.iter().enumerate().map(|(i, (id, name))| {
        let row_style = format!(
            "display: flex; border-top: 1px solid #eee; min-height: {}px;{}",
            if after { 24 } else { 36 },
            if i % 2 == 1 { " background: #fafbfc;" } else { "" },
        );
        let id_cell = if after {
            html! {
                <div style="width: 110px; padding: 6px 10px; border-right: 1px solid #eee; white-space: nowrap;">
                    { *id }
                </div>
            }
        } else {
            // the column is one character too narrow, so the last digit wraps
            html! {
                <div style="width: 110px; padding: 6px 10px; border-right: 1px solid #eee; word-break: break-all; line-height: 1.2;">
                    { &id[..8] }<br />{ &id[8..] }
                </div>
            }
        };
        html! {
            <div key={*id} style={row_style}>
                { id_cell }
                <div style="flex: 1; padding: 6px 10px;">{ *name }</div>
            </div>
        }
    }).collect::<Html>();

    html! {
        <div style="margin-bottom: 18px; max-width: 260px;">
            <div style="font-size: 13px; color: #888; margin-bottom: 6px;">{ caption }</div>
            <div style="border: 1px solid #bbb; border-radius: 6px; overflow: hidden; background: #fff; width: 220px; font-size: 13px;">
                <div style="display: flex; background: #f5f5f5; font-weight: 500;">
                    <div style="width: 110px; padding: 6px 10px; border-right: 1px solid #eee;">{"ID"}</div>
                    <div style="flex: 1; padding: 6px 10px;">{"Name"}</div>
                </div>
                { rows }
            </div>
        </div>
    }
}
