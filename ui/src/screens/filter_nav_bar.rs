//=============================================================================
// File: src/screens/filter_nav_bar.rs
//=============================================================================
use api::filter_attributes::FilterAttributeCatalog;
use api::selected_filter_attributes::SelectedFilterAttributes;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::command;
use crate::command::CheckBoxGroup;
use crate::command::Command;
use crate::command::FilterError;
use crate::components::filter_check_box_section::FilterCheckBoxSection;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Divider;
use crate::components::pico::Drawer;
use crate::components::radio_buttons_group::RadioButtonsGroup;
use crate::components::title_header::TitleHeader;
use crate::hooks::use_dispatcher::use_dispatcher;
use crate::hooks::use_dispatcher::Dispatcher;
use crate::layout::DrawerAnchor;
use crate::layout::DrawerVariant;

/// The slice of shared state the filter navigation renders from.
#[derive(Clone, PartialEq, Debug)]
pub struct FilterViewState {
    pub catalog: Option<FilterAttributeCatalog>,
    pub selection: SelectedFilterAttributes,
}

fn dispatch_selection(dispatcher: Dispatcher, result: Result<Command, FilterError>) {
    match result {
        Ok(command) => dispatcher.dispatch(command),
        Err(e) => warn!("ignoring filter selection: {}", e),
    }
}

/// Side panel with the gender, apparel, brand and price filters.
///
/// Renders nothing until the filter attributes have loaded.
#[component]
pub fn FilterNavBar() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let dispatcher = use_dispatcher();
    let mut drawer_open = use_signal(|| false);

    let view = FilterViewState {
        catalog: state.catalog.read().clone(),
        selection: (state.selection)(),
    };
    let Some(catalog) = view.catalog else {
        return rsx! {};
    };

    debug!("Calling Filter NavBar....");

    let variant = DrawerVariant::for_breakpoint((state.breakpoint)());
    let anchor = DrawerAnchor::from(app_state.prefs.text_direction());

    let on_clear_all = move |_: MouseEvent| {
        dispatcher.dispatch_all(command::clear_all());
    };

    let on_gender_change = move |index: usize| {
        if let Some(catalog) = &*state.catalog.peek() {
            dispatch_selection(dispatcher, command::gender_selected(catalog, index));
        }
    };

    let on_check_box_change = move |(index, group_id): (usize, u8)| {
        if let Some(catalog) = &*state.catalog.peek() {
            dispatch_selection(dispatcher, command::checkbox_selected(catalog, index, group_id));
        }
    };

    rsx! {
        nav {
            class: "filter-nav",
            if variant.is_temporary() {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    class: "filter-menu-button",
                    on_click: move |_: MouseEvent| drawer_open.toggle(),
                    "☰ Filters"
                }
            }
            Drawer {
                variant,
                anchor,
                open: drawer_open,
                div {
                    class: "filter-drawer-header",
                    span { "FILTERS" }
                    Button {
                        button_type: ButtonType::Secondary,
                        class: "clear-all",
                        on_click: on_clear_all,
                        "CLEAR ALL"
                    }
                }
                Divider {}
                div {
                    class: "filter-gender",
                    TitleHeader {
                        title: "Gender",
                        font_weight: "bold",
                        font_size: "1.2rem",
                    }
                    RadioButtonsGroup {
                        title: "Gender",
                        attribute_list: catalog.genders.clone(),
                        selected_attribute_id: view.selection.gender,
                        on_change: on_gender_change,
                    }
                }
                Divider {}
                FilterCheckBoxSection {
                    title: "Apparel",
                    search_bar: true,
                    check_box_group_id: CheckBoxGroup::Apparel.id(),
                    selected_attribute: view.selection.apparel,
                    attr_list: catalog.apparels.clone(),
                    on_change: on_check_box_change,
                }
                FilterCheckBoxSection {
                    title: "Brand",
                    search_bar: true,
                    check_box_group_id: CheckBoxGroup::Brand.id(),
                    selected_attribute: view.selection.brand,
                    attr_list: catalog.brands.clone(),
                    on_change: on_check_box_change,
                }
                FilterCheckBoxSection {
                    title: "Price",
                    check_box_group_id: CheckBoxGroup::Price.id(),
                    selected_attribute: view.selection.price,
                    attr_list: catalog.price_ranges.clone(),
                    on_change: on_check_box_change,
                }
            }
        }
    }
}
