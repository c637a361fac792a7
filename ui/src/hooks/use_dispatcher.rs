use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::command::Command;

/// The single entry point through which screens change shared state.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    handler: Callback<Command>,
}

impl Dispatcher {
    pub fn new(handler: Callback<Command>) -> Self {
        Self { handler }
    }

    /// Hands a command to the store. Returns once state commands are applied;
    /// loading commands only start their request.
    pub fn dispatch(&self, command: Command) {
        self.handler.call(command);
    }

    /// Dispatches commands in order, each one independently.
    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }
}

/// Provides a dispatcher that executes commands against `store`.
pub fn use_store_dispatcher(store: AppStateMut) -> Dispatcher {
    use_context_provider(|| Dispatcher::new(Callback::new(move |command| store.apply(command))))
}

pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}
