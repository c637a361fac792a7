//! Renders screens inside a minimal app shell with a recording dispatcher.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::filter_attributes::FilterAttribute;
use api::filter_attributes::FilterAttributeCatalog;
use api::home_page::HomePage;
use api::prefs::storefront_prefs::StorefrontPrefs;
use api::prefs::text_direction::TextDirection;
use api::product::Product;
use api::product::ProductPage;
use api::selected_filter_attributes::SelectedFilterAttributes;
use dioxus::prelude::*;
use dioxus_core::ElementId;
use dioxus_core::Mutation;
use dioxus_core::Mutations;
use dioxus_html::PlatformEventData;
use dioxus_html::SerializedHtmlEventConverter;
use dioxus_html::SerializedMouseData;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::command::Command;
use crate::hooks::use_dispatcher::Dispatcher;
use crate::layout::Breakpoint;
use crate::screens::filter_nav_bar::FilterNavBar;
use crate::screens::home::HomeScreen;
use crate::screens::products::ProductsScreen;
use crate::Screen;

thread_local! {
    static DISPATCHED: RefCell<Vec<Command>> = const { RefCell::new(Vec::new()) };
    static STORE: RefCell<Option<AppStateMut>> = const { RefCell::new(None) };
}

/// Upper bound on how long [`Session::settle`] waits for pending work.
const SETTLE_TIMEOUT: Duration = Duration::from_millis(200);

#[derive(Clone, PartialEq, Debug)]
pub enum Mounted {
    Home,
    FilterNavBar,
    Products(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct HarnessProps {
    pub screen: Mounted,
    pub hover: bool,
    pub breakpoint: Breakpoint,
    pub catalog: Option<FilterAttributeCatalog>,
    pub selection: SelectedFilterAttributes,
    pub home_page: Option<HomePage>,
    pub products: Option<ProductPage>,
}

impl HarnessProps {
    pub fn new(screen: Mounted) -> Self {
        Self {
            screen,
            hover: false,
            breakpoint: Breakpoint::default(),
            catalog: None,
            selection: SelectedFilterAttributes::default(),
            home_page: None,
            products: None,
        }
    }
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| AppState::new(StorefrontPrefs::new(TextDirection::Ltr)));

    let hover = use_signal(|| props.hover);
    let breakpoint = use_signal(|| props.breakpoint);
    let catalog = use_signal(|| props.catalog.clone());
    let selection = use_signal(|| props.selection);
    let home_page = use_signal(|| props.home_page.clone());
    let products = use_signal(|| props.products.clone());
    let store = use_context_provider(|| AppStateMut {
        hover,
        breakpoint,
        catalog,
        selection,
        home_page,
        products,
    });
    use_hook(|| STORE.with(|slot| *slot.borrow_mut() = Some(store)));
    use_context_provider(|| {
        Dispatcher::new(Callback::new(|command: Command| {
            DISPATCHED.with(|log| log.borrow_mut().push(command));
        }))
    });
    use_context_provider(|| Signal::new(Screen::default()));

    match props.screen {
        Mounted::Home => rsx! { HomeScreen {} },
        Mounted::FilterNavBar => rsx! { FilterNavBar {} },
        Mounted::Products(category) => rsx! { ProductsScreen { category } },
    }
}

/// Builds the initial render and returns its html and the commands
/// dispatched while doing so.
pub fn render(props: HarnessProps) -> (String, Vec<Command>) {
    let session = Session::start(props);
    let html = session.html();
    (html, session.take_dispatched())
}

fn take_dispatched() -> Vec<Command> {
    DISPATCHED.with(|log| log.borrow_mut().drain(..).collect())
}

/// A mounted harness that can be poked with events and signal writes.
pub struct Session {
    dom: VirtualDom,
    /// Click listeners from the most recent render that created any, in
    /// document order.
    new_click_targets: Vec<ElementId>,
}

impl Session {
    pub fn start(props: HarnessProps) -> Self {
        DISPATCHED.with(|log| log.borrow_mut().clear());
        STORE.with(|slot| slot.borrow_mut().take());
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new_with_props(Harness, props);
        let mut edits = Mutations::default();
        dom.rebuild(&mut edits);

        let mut session = Self {
            dom,
            new_click_targets: Vec::new(),
        };
        session.record(edits);
        session
    }

    fn record(&mut self, edits: Mutations) {
        let targets: Vec<ElementId> = edits
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .collect();
        if !targets.is_empty() {
            self.new_click_targets = targets;
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Commands dispatched since the last call.
    pub fn take_dispatched(&self) -> Vec<Command> {
        take_dispatched()
    }

    /// Writes shared state from outside the component tree.
    pub fn update(&self, write: impl FnOnce(AppStateMut)) {
        let store = STORE.with(|slot| *slot.borrow());
        if let Some(store) = store {
            self.dom.in_runtime(|| write(store));
        }
    }

    /// Clicks the `nth` entry of the latest batch of click listeners.
    pub fn click(&mut self, nth: usize) {
        let target = self.new_click_targets[nth];
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        self.dom
            .runtime()
            .handle_event("click", Event::new(data, true), target);
    }

    /// Runs effects and re-renders dirty components.
    pub async fn settle(&mut self) {
        let _ = tokio::time::timeout(SETTLE_TIMEOUT, self.dom.wait_for_work()).await;
        let mut edits = Mutations::default();
        self.dom.render_immediate(&mut edits);
        self.record(edits);
    }
}

pub fn sample_catalog() -> FilterAttributeCatalog {
    FilterAttributeCatalog {
        genders: vec![FilterAttribute::new(1, "Men"), FilterAttribute::new(2, "Women")],
        apparels: vec![
            FilterAttribute::new(11, "Shirts"),
            FilterAttribute::new(12, "Jeans"),
            FilterAttribute::new(13, "Jackets"),
        ],
        brands: vec![FilterAttribute::new(21, "Roadster"), FilterAttribute::new(22, "Levis")],
        price_ranges: vec![
            FilterAttribute::new(31, "Under 500"),
            FilterAttribute::new(32, "500 - 1000"),
        ],
    }
}

pub fn sample_products() -> ProductPage {
    ProductPage {
        products: vec![Product {
            id: 7,
            name: "Slim Fit Jeans".to_string(),
            brand: "Levis".to_string(),
            image_url: "https://img.example/7.jpg".to_string(),
            price_minor: 1205,
        }],
        total_count: 1,
        page: 0,
        page_size: 20,
    }
}
