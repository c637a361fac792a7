//! Commands produced by the storefront screens and the reducer that applies
//! them to the selected filter attributes.
//!
//! Event handlers never touch shared state directly; they turn user input into
//! a [`Command`] which the store executes. That keeps the decision logic here
//! testable without a renderer.

use api::filter_attributes::AttributeId;
use api::filter_attributes::FilterAttribute;
use api::filter_attributes::FilterAttributeCatalog;
use api::products_query::ProductsQuery;
use api::selected_filter_attributes::FilterAttributesPatch;
use api::selected_filter_attributes::SelectedFilterAttributes;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum Command {
    LoadHomePage,
    LoadFilterAttributes,
    ClearFilters,
    SetGender(AttributeId),
    SetApparel(AttributeId),
    SetBrand(AttributeId),
    SetPrice(AttributeId),
    ReloadProducts(ProductsQuery),
}

impl Command {
    /// The "set filter attributes" payload carried by this command, if any.
    pub fn patch(&self) -> Option<FilterAttributesPatch> {
        match *self {
            Command::SetGender(id) => Some(FilterAttributesPatch::gender(id)),
            Command::SetApparel(id) => Some(FilterAttributesPatch::apparel(id)),
            Command::SetBrand(id) => Some(FilterAttributesPatch::brand(id)),
            Command::SetPrice(id) => Some(FilterAttributesPatch::price(id)),
            _ => None,
        }
    }

    /// True for commands that change the selected filter attributes.
    pub fn updates_selection(&self) -> bool {
        self.is_clear_filters() || self.patch().is_some()
    }
}

/// Applies a command to the current selection.
///
/// Commands that do not concern the selection return it unchanged.
pub fn reduce(selection: SelectedFilterAttributes, command: &Command) -> SelectedFilterAttributes {
    if command.is_clear_filters() {
        return SelectedFilterAttributes::default();
    }
    match command.patch() {
        Some(patch) => {
            let mut next = selection;
            next.merge(patch);
            next
        }
        None => selection,
    }
}

/// Checkbox sections of the filter navigation, identified on the widget by
/// their numeric discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CheckBoxGroup {
    Apparel = 1,
    Brand = 2,
    Price = 3,
}

impl CheckBoxGroup {
    pub const fn id(self) -> u8 {
        self as u8
    }

    fn options(self, catalog: &FilterAttributeCatalog) -> &[FilterAttribute] {
        match self {
            CheckBoxGroup::Apparel => &catalog.apparels,
            CheckBoxGroup::Brand => &catalog.brands,
            CheckBoxGroup::Price => &catalog.price_ranges,
        }
    }

    fn name(self) -> &'static str {
        match self {
            CheckBoxGroup::Apparel => "apparel",
            CheckBoxGroup::Brand => "brand",
            CheckBoxGroup::Price => "price",
        }
    }
}

impl TryFrom<u8> for CheckBoxGroup {
    type Error = FilterError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(CheckBoxGroup::Apparel),
            2 => Ok(CheckBoxGroup::Brand),
            3 => Ok(CheckBoxGroup::Price),
            other => Err(FilterError::UnknownCheckBoxGroup(other)),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown checkbox group id {0}")]
    UnknownCheckBoxGroup(u8),
    #[error("{group} index {index} is outside 1..={len}")]
    IndexOutOfRange {
        group: &'static str,
        index: usize,
        len: usize,
    },
}

fn lookup<'a>(
    group: &'static str,
    list: &'a [FilterAttribute],
    index: usize,
) -> Result<&'a FilterAttribute, FilterError> {
    FilterAttributeCatalog::nth(list, index).ok_or(FilterError::IndexOutOfRange {
        group,
        index,
        len: list.len(),
    })
}

/// "Clear all": reset the selection, then reload the first page of everything.
///
/// The two commands are independent; a failing reload leaves the cleared
/// selection in place.
pub fn clear_all() -> [Command; 2] {
    [
        Command::ClearFilters,
        Command::ReloadProducts(ProductsQuery::all()),
    ]
}

/// Gender radio selection, `index` is 1-based.
pub fn gender_selected(catalog: &FilterAttributeCatalog, index: usize) -> Result<Command, FilterError> {
    let gender = lookup("gender", &catalog.genders, index)?;
    Ok(Command::SetGender(gender.id))
}

/// Checkbox selection in one of the apparel, brand or price sections.
///
/// `index` is 1-based. Selecting a second box in the same group replaces the
/// first.
///
/// # Panics
///
/// Panics when `group_id` is not a [`CheckBoxGroup`] discriminant. That only
/// happens when a checkbox section is wired with the wrong id.
pub fn checkbox_selected(
    catalog: &FilterAttributeCatalog,
    index: usize,
    group_id: u8,
) -> Result<Command, FilterError> {
    let group = match CheckBoxGroup::try_from(group_id) {
        Ok(group) => group,
        Err(e) => panic!("{e}"),
    };
    let id = lookup(group.name(), group.options(catalog), index)?.id;
    Ok(match group {
        CheckBoxGroup::Apparel => Command::SetApparel(id),
        CheckBoxGroup::Brand => Command::SetBrand(id),
        CheckBoxGroup::Price => Command::SetPrice(id),
    })
}
