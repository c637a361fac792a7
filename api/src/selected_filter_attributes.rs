//! The shopper's current filter choice and the partial updates applied to it.

use serde::Deserialize;
use serde::Serialize;

use crate::filter_attributes::AttributeId;

/// One value slot per filter group.
///
/// On the wire `gender` travels as a single-element list (`"gender": [3]`)
/// while the other groups are scalar ids. In memory every slot is a plain
/// `Option<AttributeId>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFilterAttributes {
    #[serde(default, with = "single_element_list")]
    pub gender: Option<AttributeId>,
    #[serde(default)]
    pub apparel: Option<AttributeId>,
    #[serde(default)]
    pub brand: Option<AttributeId>,
    #[serde(default)]
    pub price: Option<AttributeId>,
}

impl SelectedFilterAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: every field present in `patch` overwrites ours, absent
    /// fields are left alone.
    pub fn merge(&mut self, patch: FilterAttributesPatch) {
        if patch.gender.is_some() {
            self.gender = patch.gender;
        }
        if patch.apparel.is_some() {
            self.apparel = patch.apparel;
        }
        if patch.brand.is_some() {
            self.brand = patch.brand;
        }
        if patch.price.is_some() {
            self.price = patch.price;
        }
    }
}

/// Payload of a "set filter attributes" update. Only the fields that are
/// `Some` are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterAttributesPatch {
    #[serde(
        default,
        with = "single_element_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<AttributeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparel: Option<AttributeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<AttributeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<AttributeId>,
}

impl FilterAttributesPatch {
    pub fn gender(id: AttributeId) -> Self {
        Self {
            gender: Some(id),
            ..Default::default()
        }
    }

    pub fn apparel(id: AttributeId) -> Self {
        Self {
            apparel: Some(id),
            ..Default::default()
        }
    }

    pub fn brand(id: AttributeId) -> Self {
        Self {
            brand: Some(id),
            ..Default::default()
        }
    }

    pub fn price(id: AttributeId) -> Self {
        Self {
            price: Some(id),
            ..Default::default()
        }
    }
}

/// (De)serializes an optional id as `null` / `[id]`.
mod single_element_list {
    use serde::de::Error;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serialize;
    use serde::Serializer;

    use crate::filter_attributes::AttributeId;

    pub fn serialize<S: Serializer>(id: &Option<AttributeId>, s: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => [*id].serialize(s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<AttributeId>, D::Error> {
        let list = Option::<Vec<AttributeId>>::deserialize(d)?.unwrap_or_default();
        match list.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(D::Error::invalid_length(list.len(), &"at most one gender id")),
        }
    }
}
