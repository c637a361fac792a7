// ui/src/components/filter_check_box_section.rs
#![allow(non_snake_case)]

use api::filter_attributes::AttributeId;
use api::filter_attributes::FilterAttribute;
use dioxus::prelude::*;

use crate::components::pico::Divider;
use crate::components::title_header::TitleHeader;

#[derive(Props, PartialEq, Clone)]
pub struct FilterCheckBoxSectionProps {
    pub title: String,
    /// Discriminant passed back with every change so one handler can serve
    /// all sections.
    pub check_box_group_id: u8,
    pub attr_list: Vec<FilterAttribute>,
    #[props(default)]
    pub selected_attribute: Option<AttributeId>,
    /// Show a text box that narrows the visible options.
    #[props(default = false)]
    pub search_bar: bool,
    /// Called with `(1-based position in attr_list, check_box_group_id)`.
    pub on_change: EventHandler<(usize, u8)>,
}

/// Options whose label contains `filter` (case-insensitive), paired with
/// their 1-based position in the full list.
pub fn matching_options<'a>(
    list: &'a [FilterAttribute],
    filter: &str,
) -> Vec<(usize, &'a FilterAttribute)> {
    let filter = filter.trim().to_lowercase();
    list.iter()
        .enumerate()
        .filter(|(_, attribute)| filter.is_empty() || attribute.value.to_lowercase().contains(&filter))
        .map(|(i, attribute)| (i + 1, attribute))
        .collect()
}

/// A titled list of checkboxes. Only one box per section is checked at a
/// time: the one matching `selected_attribute`.
pub fn FilterCheckBoxSection(props: FilterCheckBoxSectionProps) -> Element {
    let mut filter_text = use_signal(String::new);
    let on_change = props.on_change;
    let group_id = props.check_box_group_id;

    let visible = matching_options(&props.attr_list, &filter_text.read());
    let placeholder = format!("Search {}...", props.title.to_lowercase());

    rsx! {
        section {
            class: "filter-check-box-section",
            TitleHeader {
                title: props.title.clone(),
                font_weight: "bold",
                font_size: "1.2rem",
            }
            if props.search_bar {
                input {
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{filter_text}",
                    oninput: move |evt| filter_text.set(evt.value()),
                }
            }
            ul {
                class: "check-box-list",
                for (position, attribute) in visible {
                    li {
                        key: "{attribute.id}",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: props.selected_attribute == Some(attribute.id),
                                onchange: move |_| on_change.call((position, group_id)),
                            }
                            "{attribute.value}"
                        }
                    }
                }
            }
        }
        Divider {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtering_keeps_original_positions() {
        let list = vec![
            FilterAttribute::new(1, "Shirts"),
            FilterAttribute::new(2, "T-Shirts"),
            FilterAttribute::new(3, "Jeans"),
        ];
        let positions: Vec<usize> = matching_options(&list, "SHIRT").iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![1, 2]);

        let jeans = matching_options(&list, "jea");
        assert_eq!(jeans.len(), 1);
        assert_eq!(jeans[0].0, 3);
    }

    #[test]
    fn blank_filter_shows_everything() {
        let list = vec![FilterAttribute::new(1, "A"), FilterAttribute::new(2, "B")];
        assert_eq!(matching_options(&list, "  ").len(), 2);
    }
}
