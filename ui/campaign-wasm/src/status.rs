//! Status banner with a single auto-hide timer.
//!
//! Only one hide timer is ever pending: showing a new message drops the
//! previous timer handle before scheduling its own. For `gloo_timers`
//! handles, dropping is `clearTimeout`.

use cf_api_types::Severity;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::HtmlElement;

use crate::dom;

pub const DEFAULT_HIDE_MS: u32 = 5_000;

/// Something that can display and hide a status message.
pub trait Banner: Clone + 'static {
    fn display(&self, message: &str, severity: Severity);
    fn hide(&self);
}

impl Banner for HtmlElement {
    fn display(&self, message: &str, severity: Severity) {
        self.set_text_content(Some(message));
        self.set_class_name(&severity.css_class());
        dom::set_visible(self, true);
    }

    fn hide(&self) {
        dom::set_visible(self, false);
    }
}

/// Slot holding the one pending hide timer.
pub struct HideTimer<T> {
    pending: RefCell<Option<T>>,
}

impl<T> HideTimer<T> {
    pub const fn new() -> Self {
        Self {
            pending: RefCell::new(None),
        }
    }

    /// Display `message` and schedule its hide. `schedule` turns the hide
    /// callback into a timer handle whose drop cancels it.
    pub fn show<B: Banner>(
        &self,
        banner: &B,
        message: &str,
        severity: Severity,
        schedule: impl FnOnce(Box<dyn FnOnce()>) -> T,
    ) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);

        banner.display(message, severity);
        let target = banner.clone();
        let timer = schedule(Box::new(move || target.hide()));
        *self.pending.borrow_mut() = Some(timer);
    }
}

thread_local! {
    static HIDE_TIMER: HideTimer<Timeout> = const { HideTimer::new() };
}

pub fn show(el: &HtmlElement, message: &str, severity: Severity, hide_after_ms: u32) {
    HIDE_TIMER.with(|slot| {
        slot.show(el, message, severity, |hide| Timeout::new(hide_after_ms, hide));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBanner {
        text: Rc<RefCell<String>>,
        visible: Rc<Cell<bool>>,
    }

    impl Banner for FakeBanner {
        fn display(&self, message: &str, _severity: Severity) {
            *self.text.borrow_mut() = message.to_string();
            self.visible.set(true);
        }

        fn hide(&self) {
            self.visible.set(false);
        }
    }

    type Queue = Rc<RefCell<Vec<(u64, u32, Box<dyn FnOnce()>)>>>;

    /// Manual clock: timers fire only on `advance`, and dropping a handle
    /// unschedules its callback.
    #[derive(Default)]
    struct FakeClock {
        now: Cell<u32>,
        next_id: Cell<u64>,
        queue: Queue,
    }

    struct FakeTimer {
        id: u64,
        queue: Queue,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.queue.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }

    impl FakeClock {
        fn after(&self, ms: u32) -> impl FnOnce(Box<dyn FnOnce()>) -> FakeTimer + '_ {
            move |callback: Box<dyn FnOnce()>| {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                let due = self.now.get() + ms;
                self.queue.borrow_mut().push((id, due, callback));
                FakeTimer {
                    id,
                    queue: Rc::clone(&self.queue),
                }
            }
        }

        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due = {
                let mut queue = self.queue.borrow_mut();
                let (ready, waiting): (Vec<_>, Vec<_>) =
                    queue.drain(..).partition(|(_, at, _)| *at <= now);
                *queue = waiting;
                ready
            };
            for (_, _, callback) in due {
                callback();
            }
        }
    }

    #[test]
    fn new_message_outlives_previous_hide_timer() {
        let clock = FakeClock::default();
        let banner = FakeBanner::default();
        let slot = HideTimer::new();

        let hide_later = || clock.after(DEFAULT_HIDE_MS);

        slot.show(&banner, "Processing vote...", Severity::Info, hide_later());
        clock.advance(3_000);
        slot.show(&banner, "Vote recorded successfully!", Severity::Success, hide_later());

        // the first timer would have fired at 5000
        clock.advance(2_500);
        assert!(banner.visible.get());
        assert_eq!(*banner.text.borrow(), "Vote recorded successfully!");

        clock.advance(2_500);
        assert!(!banner.visible.get());
    }

    #[test]
    fn single_message_hides_after_delay() {
        let clock = FakeClock::default();
        let banner = FakeBanner::default();
        let slot = HideTimer::new();

        let hide_later = clock.after(DEFAULT_HIDE_MS);
        slot.show(&banner, "Connected successfully!", Severity::Success, hide_later);
        clock.advance(4_999);
        assert!(banner.visible.get());
        clock.advance(1);
        assert!(!banner.visible.get());
    }
}
