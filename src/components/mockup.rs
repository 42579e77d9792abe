use yew::prelude::*;

use crate::mockups::{
    dropdown_focus::DropdownFocusMockup, filter_caching::FilterCachingMockup,
    form_error::FormErrorMockup, modal_contrast::ModalContrastMockup,
    on_demand_filters::OnDemandFiltersMockup, priority_members::PriorityMembersMockup,
    report_defaults::ReportDefaultsMockup, responsive_buttons::ResponsiveButtonsMockup,
    row_height::RowHeightMockup,
};

/// Which side of a before/after contrast is being drawn. Fixed at mount; the
/// two sides of a case study are always sibling instances, never toggled in
/// place.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub fn is_after(self) -> bool {
        matches!(self, Phase::After)
    }
}

/// The nine illustrative scenarios the renderer knows how to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scenario {
    FormError,
    ReportDefaults,
    PriorityMembers,
    ResponsiveButtons,
    RowHeight,
    OnDemandFilters,
    FilterCaching,
    DropdownFocus,
    ModalContrast,
}

#[derive(Properties, PartialEq)]
pub struct MockupProps {
    pub scenario: Scenario,
    pub phase: Phase,
}

/// Shared props shape for the per-scenario mockup components.
#[derive(Properties, PartialEq)]
pub struct PhaseProps {
    pub phase: Phase,
}

#[function_component(Mockup)]
pub fn mockup(props: &MockupProps) -> Html {
    let phase = props.phase;
    match props.scenario {
        Scenario::FormError => html! { <FormErrorMockup phase={phase} /> },
        Scenario::ReportDefaults => html! { <ReportDefaultsMockup phase={phase} /> },
        Scenario::PriorityMembers => html! { <PriorityMembersMockup phase={phase} /> },
        Scenario::ResponsiveButtons => html! { <ResponsiveButtonsMockup phase={phase} /> },
        Scenario::RowHeight => html! { <RowHeightMockup phase={phase} /> },
        Scenario::OnDemandFilters => html! { <OnDemandFiltersMockup phase={phase} /> },
        Scenario::FilterCaching => html! { <FilterCachingMockup phase={phase} /> },
        Scenario::DropdownFocus => html! { <DropdownFocusMockup phase={phase} /> },
        Scenario::ModalContrast => html! { <ModalContrastMockup phase={phase} /> },
    }
}
