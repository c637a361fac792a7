// ui/src/components/radio_buttons_group.rs
#![allow(non_snake_case)]

use api::filter_attributes::AttributeId;
use api::filter_attributes::FilterAttribute;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct RadioButtonsGroupProps {
    /// Used as the shared `name` of the radio inputs.
    pub title: String,
    pub attribute_list: Vec<FilterAttribute>,
    #[props(default)]
    pub selected_attribute_id: Option<AttributeId>,
    /// Called with the 1-based position of the chosen option.
    pub on_change: EventHandler<usize>,
}

/// Single-select list of filter values.
pub fn RadioButtonsGroup(props: RadioButtonsGroupProps) -> Element {
    let on_change = props.on_change;
    let name = props.title.to_lowercase();

    rsx! {
        fieldset {
            class: "radio-buttons-group",
            for (position, attribute) in props.attribute_list.iter().enumerate().map(|(i, a)| (i + 1, a)) {
                label {
                    key: "{attribute.id}",
                    input {
                        r#type: "radio",
                        name: "{name}",
                        value: "{position}",
                        checked: props.selected_attribute_id == Some(attribute.id),
                        onchange: move |_| on_change.call(position),
                    }
                    "{attribute.value}"
                }
            }
        }
    }
}
