// src/application/events/mod.rs
mod dispatcher;

pub use dispatcher::{DispatchReport, EventDispatcher, EventHandler, HandlerFailure};
