//! Global application state.
//!
//! Holds the controller in `RefCell`-wrapped `thread_local!` storage (WASM is
//! single-threaded) so event callbacks created anywhere can reach it.

use crate::page::DomPage;
use crate::wallet::InjectedProvider;
use cf_campaign_core::Controller;
use std::cell::RefCell;
use std::rc::Rc;

pub type AppController = Controller<InjectedProvider, DomPage>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<AppController>>> = const { RefCell::new(None) };
}

pub fn install(controller: Rc<AppController>) {
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
}

pub fn controller() -> Option<Rc<AppController>> {
    CONTROLLER.with(|c| c.borrow().clone())
}
