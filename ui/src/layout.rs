//! Viewport breakpoints and the structural visibility rules keyed on them.

use api::prefs::text_direction::TextDirection;
use strum::IntoEnumIterator;

/// Named viewport-width classes, smallest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::EnumIter,
)]
pub enum Breakpoint {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Smallest viewport width (css px) that belongs to this breakpoint.
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 960,
            Breakpoint::Lg => 1280,
            Breakpoint::Xl => 1920,
        }
    }

    pub fn from_width(width: f64) -> Self {
        Breakpoint::iter()
            .rev()
            .find(|bp| width >= f64::from(bp.min_width()))
            .unwrap_or(Breakpoint::Xs)
    }
}

/// Home screen parts whose presence depends on the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    MenuIcons,
    Carousel,
    CategoriesAndBrands,
}

/// Breakpoints at which each section is left out of the render tree.
const HIDDEN_AT: &[(HomeSection, &[Breakpoint])] = &[
    (
        HomeSection::MenuIcons,
        &[Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Lg],
    ),
    (HomeSection::Carousel, &[Breakpoint::Xs]),
    (HomeSection::CategoriesAndBrands, &[]),
];

pub fn visibility_for(section: HomeSection, breakpoint: Breakpoint) -> bool {
    HIDDEN_AT
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, hidden)| !hidden.contains(&breakpoint))
        .unwrap_or(true)
}

/// How the filter drawer is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum DrawerVariant {
    /// Docked next to the content, always visible.
    Permanent,
    /// Overlay opened from a menu button, dismissed by clicking outside.
    Temporary,
}

impl DrawerVariant {
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        if breakpoint >= Breakpoint::Sm {
            DrawerVariant::Permanent
        } else {
            DrawerVariant::Temporary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DrawerAnchor {
    #[default]
    Left,
    Right,
}

impl From<TextDirection> for DrawerAnchor {
    fn from(direction: TextDirection) -> Self {
        match direction {
            TextDirection::Ltr => DrawerAnchor::Left,
            TextDirection::Rtl => DrawerAnchor::Right,
        }
    }
}

impl DrawerAnchor {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
