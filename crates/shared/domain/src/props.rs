use crate::loader::LoaderOptions;
use serde::{Deserialize, Serialize};

/// Props accepted by the bridge component.
///
/// Three disjoint groups:
/// * markup attributes of the inner `<select>` (`name`, `id`, `multiple`, `disabled`, `ariaLabel`),
/// * property-only knobs assigned on the live element (see [`SelectProperty`]),
/// * `loaderOptions`, consumed by the bootstrapper and never rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectProps {
    pub name: Option<String>,
    pub id: Option<String>,
    pub multiple: bool,
    pub disabled: bool,
    #[serde(alias = "aria-label", alias = "aria_label")]
    pub aria_label: Option<String>,
    #[serde(alias = "min_bottom_space")]
    pub min_bottom_space: Option<f64>,
    #[serde(alias = "dropdown_class_name")]
    pub dropdown_class_name: Option<String>,
    /// Id of the element the dropdown is rendered into.
    #[serde(alias = "dropdown_container")]
    pub dropdown_container: Option<String>,
    #[serde(alias = "loader_options")]
    pub loader_options: LoaderOptions,
}

impl SelectProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_min_bottom_space(mut self, pixels: f64) -> Self {
        self.min_bottom_space = Some(pixels);
        self
    }

    #[must_use]
    pub fn with_dropdown_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.dropdown_class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_dropdown_container(mut self, element_id: impl Into<String>) -> Self {
        self.dropdown_container = Some(element_id.into());
        self
    }

    #[must_use]
    pub fn with_loader_options(mut self, options: LoaderOptions) -> Self {
        self.loader_options = options;
        self
    }

    /// Current value of a property-only knob.
    #[must_use]
    pub fn property(&self, property: SelectProperty) -> PropertyValue {
        match property {
            SelectProperty::MinBottomSpace => {
                self.min_bottom_space.map_or(PropertyValue::Unset, PropertyValue::Number)
            },
            SelectProperty::DropdownClassName => self
                .dropdown_class_name
                .clone()
                .map_or(PropertyValue::Unset, PropertyValue::Text),
            SelectProperty::DropdownContainer => self
                .dropdown_container
                .clone()
                .map_or(PropertyValue::Unset, PropertyValue::Element),
        }
    }
}

/// Element knobs that only exist as JavaScript properties, never as markup attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectProperty {
    MinBottomSpace,
    DropdownClassName,
    DropdownContainer,
}

impl SelectProperty {
    pub const ALL: [Self; 3] = [Self::MinBottomSpace, Self::DropdownClassName, Self::DropdownContainer];

    /// Property name on the element instance.
    #[must_use]
    pub const fn js_name(self) -> &'static str {
        match self {
            Self::MinBottomSpace => "minBottomSpace",
            Self::DropdownClassName => "dropdownClassName",
            Self::DropdownContainer => "dropdownContainer",
        }
    }
}

/// Value assigned to a [`SelectProperty`]. `Unset` assigns `undefined`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Unset,
    Number(f64),
    Text(String),
    /// Id of a live element the host resolves to a node.
    Element(String),
}
