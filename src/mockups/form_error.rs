use yew::prelude::*;
use web_sys::{HtmlInputElement, InputEvent};

use crate::components::mockup::PhaseProps;

/// Same shape check the app applies to email fields: a non-empty local part,
/// exactly one `@`, and a domain with at least one dot-separated label. No
/// whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, label)) => !host.is_empty() && !label.is_empty(),
        None => false,
    }
}

/// Before: a blocking error alert over a form that already accepted a bad
/// address. After: inline validation with the submit button gated on
/// validity.
#[function_component(FormErrorMockup)]
pub fn form_error_mockup(props: &PhaseProps) -> Html {
    let email = use_state(String::new);
    let valid = is_valid_email(&email);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    if !props.phase.is_after() {
        return html! {
            <div style="margin-bottom: 18px;">
                <div style="max-width: 340px; position: relative;">
                    <div style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.18); z-index: 2; display: flex; align-items: center; justify-content: center;">
                        <div style="background: #fff; border: 1.5px solid #b00020; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,0.12); padding: 10px 16px 8px 16px; min-width: 140px; display: flex; flex-direction: column; align-items: center;">
                            <div style="color: #b00020; font-weight: 600; font-size: 13px; margin-bottom: 8px; text-align: center;">
                                {"Error: Please enter a valid email address."}
                            </div>
                            <button style="margin-top: 2px; padding: 3px 12px; border-radius: 4px; border: 1px solid #bbb; background: #fff; cursor: pointer; font-size: 13px;">{"OK"}</button>
                        </div>
                    </div>
                    <div class="wire-label">{"Email"}</div>
                    <input class="wire-input" value="not-an-email" readonly={true} />
                    <button style="margin-top: 16px; padding: 7px 22px; border-radius: 4px; border: 1px solid #bbb; background: #fff; font-size: 14px; cursor: pointer;">{"Submit"}</button>
                </div>
            </div>
        };
    }

    let submit_style = if valid {
        "padding: 7px 22px; border-radius: 4px; border: 1px solid #bbb; background: #fff; font-size: 14px; cursor: pointer; color: #222;"
    } else {
        "padding: 7px 22px; border-radius: 4px; border: 1px solid #bbb; background: #f5f5f5; font-size: 14px; cursor: not-allowed; color: #bbb;"
    };

    html! {
        <div style="margin-bottom: 18px;">
            <div style="max-width: 340px;">
                <div class="wire-label">{"Email"}</div>
                <input
                    class="wire-input"
                    value={(*email).clone()}
                    oninput={oninput}
                    placeholder="you@email.com"
                    style="margin-bottom: 0;"
                />
                <div style="display: flex; align-items: center; gap: 12px; margin-top: 8px;">
                    {
                        if valid {
                            html! { <span class="wire-validate" style="color: #1a7f37;">{"✓ Valid"}</span> }
                        } else if !email.is_empty() {
                            html! { <span style="color: #b00020; font-size: 13px;">{"Please enter a valid email address."}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <button style={submit_style} disabled={!valid}>{"Submit"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name@mail.example.com"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a.b.co"));
    }

    #[test]
    fn rejects_domain_without_dot_label() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn rejects_empty_local_part_and_extra_at_signs() {
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b .co"));
    }
}
