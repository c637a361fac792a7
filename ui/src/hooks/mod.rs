pub mod use_breakpoint;
pub mod use_dispatcher;
