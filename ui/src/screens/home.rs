//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::app_state_mut::AppStateMut;
use crate::command::Command;
use crate::components::document_title::DocumentTitle;
use crate::components::home_menu_icons::HomeMenuIcons;
use crate::components::pico::Dimmable;
use crate::components::pico::Dimmer;
use crate::components::top_categories_and_brands::TopCategoriesAndBrands;
use crate::components::vertical_slider::VerticalSlider;
use crate::hooks::use_dispatcher::use_dispatcher;
use crate::layout::visibility_for;
use crate::layout::Breakpoint;
use crate::layout::HomeSection;

pub const HOME_DOCUMENT_TITLE: &str =
    "Online Shopping for Women, Men, Kids Fashion & Lifestyle - Shoppers";

/// The slice of shared state the home screen renders from.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HomeViewState {
    pub hover: bool,
    pub breakpoint: Breakpoint,
}

impl HomeViewState {
    pub fn shows(&self, section: HomeSection) -> bool {
        visibility_for(section, self.breakpoint)
    }
}

#[component]
pub fn HomeScreen() -> Element {
    let state = use_context::<AppStateMut>();
    let dispatcher = use_dispatcher();

    // runs once per mount; repeated loads across remounts are the store's business
    use_hook(move || {
        info!("[Home]: component did mount and home API is called.");
        dispatcher.dispatch(Command::LoadHomePage);
    });

    let view = HomeViewState {
        hover: (state.hover)(),
        breakpoint: (state.breakpoint)(),
    };
    debug!("[Home]: rendering {:?}", view);

    rsx! {
        Dimmable {
            dimmed: view.hover,
            DocumentTitle { title: HOME_DOCUMENT_TITLE }
            if view.shows(HomeSection::MenuIcons) {
                HomeMenuIcons {}
            }
            if view.shows(HomeSection::Carousel) {
                VerticalSlider {}
            }
            if view.shows(HomeSection::CategoriesAndBrands) {
                TopCategoriesAndBrands {}
            }
            Dimmer { active: view.hover }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use crate::test_support::HarnessProps;
    use crate::test_support::Mounted;
    use strum::IntoEnumIterator;

    fn home(hover: bool, breakpoint: Breakpoint) -> HarnessProps {
        HarnessProps {
            hover,
            breakpoint,
            ..HarnessProps::new(Mounted::Home)
        }
    }

    #[test]
    fn mount_loads_home_page_once() {
        let (_, dispatched) = render(home(false, Breakpoint::Md));
        assert_eq!(dispatched, vec![Command::LoadHomePage]);
    }

    #[test]
    fn icon_strip_follows_breakpoint_table() {
        for bp in Breakpoint::iter() {
            let (html, _) = render(home(false, bp));
            let expected = matches!(bp, Breakpoint::Md | Breakpoint::Xl);
            assert_eq!(html.contains("home-menu-icons"), expected, "at {:?}", bp);
        }
    }

    #[test]
    fn carousel_absent_only_at_xs() {
        for bp in Breakpoint::iter() {
            let (html, _) = render(home(false, bp));
            assert_eq!(html.contains("vertical-slider"), bp != Breakpoint::Xs, "at {:?}", bp);
            assert!(html.contains("top-categories-and-brands"));
        }
    }

    #[test]
    fn dimmer_tracks_hover() {
        for hover in [true, false] {
            let (html, _) = render(home(hover, Breakpoint::Lg));
            assert_eq!(html.contains("ui-dimmer active"), hover);
            assert_eq!(html.contains("ui-dimmable dimmed"), hover);
        }
    }
}
