use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub title: AttrValue,
    pub before_desc: AttrValue,
    pub after_desc: AttrValue,
    pub impact_desc: AttrValue,
    pub before: Html,
    pub after: Html,
}

/// Frames one before/after contrast: title, the two annotated mockups and the
/// impact line. Purely compositional, no state of its own.
#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    html! {
        <section style="margin-bottom: 48px;">
            <h2 style="font-size: 1.4rem; font-weight: 600; margin-bottom: 8px;">{ props.title.clone() }</h2>
            <div style="display: flex; flex-direction: column; gap: 32px;">
                <div>
                    <h3 style="font-size: 1.1rem; font-weight: 500; margin-bottom: 4px; text-decoration: underline;">{"How it worked before"}</h3>
                    <p style="color: #555; margin-bottom: 10px;">{ props.before_desc.clone() }</p>
                    <div class="wire-panel">
                        { props.before.clone() }
                    </div>
                </div>
                <div>
                    <h3 style="font-size: 1.1rem; font-weight: 500; margin-bottom: 4px; text-decoration: underline;">{"How it worked after"}</h3>
                    <p style="color: #555; margin-bottom: 10px;">{ props.after_desc.clone() }</p>
                    <div class="wire-panel">
                        { props.after.clone() }
                    </div>
                </div>
            </div>
            <div style="color: #1a7f37; font-weight: 500; font-size: 1rem; margin-top: 24px;">
                <b>{"Impact: "}</b>{ props.impact_desc.clone() }
            </div>
        </section>
    }
}
