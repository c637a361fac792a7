//! Defines the mutable, reactive state shared by the storefront screens.

use api::filter_attributes::FilterAttributeCatalog;
use api::home_page::HomePage;
use api::product::ProductPage;
use api::selected_filter_attributes::SelectedFilterAttributes;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

use crate::command::reduce;
use crate::command::Command;
use crate::layout::Breakpoint;

/// A reactive store provided as a Dioxus context.
///
/// Every field is a `Signal`, so components that read a field re-render when
/// it changes. Screens only read from here; writes go through
/// [`AppStateMut::apply`], normally via the dispatcher.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Pointer is over the header tabs; the home screen dims itself.
    pub hover: Signal<bool>,
    /// Current viewport class, kept up to date by `use_breakpoint`.
    pub breakpoint: Signal<Breakpoint>,
    /// `None` until the filter attributes have loaded.
    pub catalog: Signal<Option<FilterAttributeCatalog>>,
    pub selection: Signal<SelectedFilterAttributes>,
    pub home_page: Signal<Option<HomePage>>,
    /// Last successfully loaded page of products.
    pub products: Signal<Option<ProductPage>>,
}

impl AppStateMut {
    /// Executes a command.
    ///
    /// Selection updates are applied synchronously. Loading commands spawn a
    /// task and write the result when it arrives; failures are logged and the
    /// previous value is kept.
    pub fn apply(mut self, command: Command) {
        debug!("apply {:?}", command);

        if command.updates_selection() {
            let next = reduce(*self.selection.peek(), &command);
            self.selection.set(next);
            return;
        }

        match command {
            Command::LoadHomePage => {
                spawn(async move {
                    match api::load_home_page().await {
                        Ok(page) => self.home_page.set(Some(page)),
                        Err(e) => warn!("failed to load home page: {}", e),
                    }
                });
            }
            Command::LoadFilterAttributes => {
                spawn(async move {
                    match api::load_filter_attributes().await {
                        Ok(catalog) => self.catalog.set(Some(catalog)),
                        Err(e) => warn!("failed to load filter attributes: {}", e),
                    }
                });
            }
            Command::ReloadProducts(query) => {
                spawn(async move {
                    match api::load_filter_products(query.to_string()).await {
                        Ok(page) => self.products.set(Some(page)),
                        Err(e) => warn!("failed to load products for {}: {}", query, e),
                    }
                });
            }
            // selection commands returned above
            _ => {}
        }
    }
}
