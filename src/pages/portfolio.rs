use yew::prelude::*;

use crate::components::case_study::CaseStudy;
use crate::components::mockup::{Mockup, Phase, Scenario};

fn mockup_pair(scenario: Scenario) -> (Html, Html) {
    (
        html! { <Mockup scenario={scenario} phase={Phase::Before} /> },
        html! { <Mockup scenario={scenario} phase={Phase::After} /> },
    )
}

/// The portfolio page: header, intro and the eight case studies, each wired
/// to a before/after pair of mockup instances.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let (defaults_before, defaults_after) = mockup_pair(Scenario::ReportDefaults);
    let (priority_before, priority_after) = mockup_pair(Scenario::PriorityMembers);
    let (buttons_before, buttons_after) = mockup_pair(Scenario::ResponsiveButtons);
    let (rows_before, rows_after) = mockup_pair(Scenario::RowHeight);
    let (lazy_before, lazy_after) = mockup_pair(Scenario::OnDemandFilters);
    let (caching_before, caching_after) = mockup_pair(Scenario::FilterCaching);
    let (focus_before, focus_after) = mockup_pair(Scenario::DropdownFocus);
    let (modal_before, modal_after) = mockup_pair(Scenario::ModalContrast);

    html! {
        <main style="max-width: 700px; margin: 0 auto; padding: 32px;">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #fafafa;
                        color: #222;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .wire-label {
                        font-size: 13px;
                        color: #555;
                        font-weight: 500;
                        margin-bottom: 4px;
                    }
                    .wire-input {
                        width: 100%;
                        padding: 7px 10px;
                        border: 1px solid #bbb;
                        border-radius: 4px;
                        background: #fff;
                        font-size: 14px;
                        margin-bottom: 10px;
                        box-sizing: border-box;
                    }
                    .wire-error {
                        color: #b00020;
                        font-size: 12px;
                        margin-bottom: 6px;
                    }
                    .wire-validate {
                        font-size: 13px;
                        font-weight: 500;
                    }
                    .wire-panel {
                        border: 1.5px dashed #bbb;
                        border-radius: 10px;
                        padding: 20px;
                        background: #fff;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                "#}
            </style>
            <div style="width: 100%; margin-bottom: 32px; background: linear-gradient(90deg, #059669 0%, #2563eb 100%); padding: 32px 24px; display: flex; flex-direction: column; align-items: flex-start; box-sizing: border-box;">
                <h1 style="font-size: 2.5rem; font-weight: 700; margin-bottom: 8px; color: #fff; text-align: left; letter-spacing: -0.01em;">
                    {"My Contributions to Enterprise Apps as QA"}
                </h1>
            </div>
            <p style="color: #555; margin-bottom: 32px;">
                {"A portfolio of real-world UX, UI, and QA improvements I introduced to enterprise web apps. Each case study highlights my approach to usability, accessibility, and performance, beyond core testing responsibilities as a QA Software Analyst. All examples are anonymized."}
            </p>
            <CaseStudy
                title="Case Study 1 - Report Form With Good Defaults"
                before_desc="The report creation form had many parameters, but no defaults for required fields. Users had to manually select a date range and a 'Sort By' option every time, which was tedious."
                after_desc="By analyzing user trends in our database audit log, I identified that most users selected a small date range of just the most recent days and almost always sorted by date descending. Based on this data, I recommended adding default values: a date range of 2 weeks from the current day, and a default sort of date descending. This made the form much faster to complete."
                impact_desc="Reduced time to print from 7 clicks to ~3 clicks (in the average case)"
                before={defaults_before}
                after={defaults_after}
            />
            <CaseStudy
                title="Case Study 2 - Visual Indicator When Filtering Data"
                before_desc="The data grid could be filtered to show only priority members, but there were no visual indicators in the grid itself to reflect this. Since the app consistently used icons in both filter labels and data rows to signal context, users often overlooked that they were viewing a filtered subset."
                after_desc="I recommended applying the app's existing pattern of showing icons in both filter labels and data grid rows, adding the star icon for priority members to maintain consistency."
                impact_desc="Improved user awareness, and promoted use of the company's established UI patterns to ensure consistency across the app."
                before={priority_before}
                after={priority_after}
            />
            <CaseStudy
                title="Case Study 3 - Responsive Button Row"
                before_desc="A row of action buttons (e.g., Print PDF, Print CSV) above a data grid would wrap onto a new line on medium/small screens. The wrapped buttons were misaligned and lacked margin, causing them to touch and appear cluttered. This issue was overlooked as development was done on large desktop screens, but was evident on typical end-user devices like laptops."
                after_desc="I recommended and helped implement a responsive layout for the button row, ensuring buttons aligned properly and maintained consistent spacing and margin even when wrapping on smaller screens."
                impact_desc="Improved usability and visual consistency for users on laptops and smaller devices. The issue was confirmed via end-client screenshots in a support ticket, validating the real-world impact."
                before={buttons_before}
                after={buttons_after}
            />
            <CaseStudy
                title="Case Study 4 - PDF Report Row Height Optimization"
                before_desc="A column with 9-digit IDs was too narrow, causing the last digit to wrap to a new line. This doubled the row height for every entry, resulting in unnecessarily large PDF reports (thousands of pages for big clients)."
                after_desc="I recommended and helped implement a slightly wider column so the full ID fit on one line, making each row single-height."
                impact_desc="PDF reports became much more compact, reducing page count by half and saving clients money on printing paper."
                before={rows_before}
                after={rows_after}
            />
            <CaseStudy
                title="Case Study 5 - Lazy Loading Dropdown Content"
                before_desc="On a screen with multiple filter dropdowns and a data grid, each filter's dropdown options were fetched from the API as soon as the page loaded, regardless of whether the user interacted with the filters. This resulted in unnecessary network activity and slower initial load times, especially when many filters were present."
                after_desc="I recommended and helped implement a change so that each filter only fetched its dropdown data from the API when the user actually clicked to open that filter. This reduced unnecessary network requests."
                impact_desc="More efficient use of resources, especially for users who didn't interact with all filters. Reduced initial network traffic and server load. Faster page load for users"
                before={lazy_before}
                after={lazy_after}
            />
            <CaseStudy
                title="Case Study 6 - Caching Dropdown Content"
                before_desc="The app's filter dropdowns were configured to fetch their options from the API every time a dropdown was opened, even for dropdowns whose options rarely or never changed. This resulted in unnecessary network requests and slower perceived performance for users who frequently opened and closed the same filters."
                after_desc="I identified which filters had static data and recommended caching their results after the first API call. For these filters, the app now served cached data instantly on subsequent openings."
                impact_desc="Reduced redundant network requests for static filter data. Faster, more responsive filter dropdowns for users. Lower server load and improved scalability."
                before={caching_before}
                after={caching_after}
            />
            <CaseStudy
                title="Case Study 7 - Accessibility: Dropdown Focus Order for Screen Readers and Mobile Gestures"
                before_desc="In the mobile app, when a user navigated to a dropdown and opened it, the next swipe gesture did not move focus to the first dropdown option. Instead, it skipped to the next UI element outside the dropdown. Only after swiping through all other UI elements could the user finally reach the dropdown options. This made dropdowns very difficult to use for those relying on the screen reader's swipe navigation feature."
                after_desc="I recommended updating the dropdown logic so that when the dropdown was opened, the next swipe/tab moved focus directly to the first dropdown option, matching accessibility standards."
                impact_desc="Dropdowns are now accessible and usable for screen reader users. Improved compliance with accessibility standards. Reduced user frustration and increased inclusivity."
                before={focus_before}
                after={focus_after}
            />
            <CaseStudy
                title="Case Study 8 - Accessibility: Improving Modal Close Icon Visibility"
                before_desc="In modal dialogs (of which there were roughly 200 across the app), both a 'Cancel' button and an 'X' icon (top right) could close the modal. However, the 'X' icon's color was nearly identical to its background, resulting in very low contrast. This made it hard to see for many users, especially those with visual impairments. An accessibility color checker confirmed the issue."
                after_desc="I recommended updating the 'X' icon's color to ensure sufficient contrast with its background, following accessibility guidelines. The icon became much more visible and easier to find for all users."
                impact_desc="Improved accessibility and usability for all users, especially those with low vision. UI elements are now more discoverable and compliant with accessibility standards."
                before={modal_before}
                after={modal_after}
            />
        </main>
    }
}
