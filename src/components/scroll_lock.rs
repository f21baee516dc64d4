use web_sys::{window, HtmlElement};
use yew::prelude::*;

pub trait OverflowTarget {
    fn set_overflow(&self, value: &str);
}

impl OverflowTarget for HtmlElement {
    fn set_overflow(&self, value: &str) {
        if let Err(e) = self.style().set_property("overflow", value) {
            log::warn!("could not set body overflow to {value}: {e:?}");
        }
    }
}

/// Holds `overflow: hidden` on its target until dropped, then sets `auto`.
pub struct BodyScrollLock<T: OverflowTarget = HtmlElement> {
    target: T,
}

impl<T: OverflowTarget> BodyScrollLock<T> {
    pub fn hold(target: T) -> Self {
        target.set_overflow("hidden");
        Self { target }
    }
}

impl BodyScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        Some(Self::hold(body))
    }
}

impl<T: OverflowTarget> Drop for BodyScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow("auto");
    }
}

/// Locks page scrolling while `locked` is true. Released when the flag
/// clears or the calling component unmounts.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        let guard = if *locked { BodyScrollLock::acquire() } else { None };
        move || drop(guard)
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<Vec<String>>>);

    impl OverflowTarget for FakeBody {
        fn set_overflow(&self, value: &str) {
            self.0.borrow_mut().push(value.to_string());
        }
    }

    impl FakeBody {
        fn current(&self) -> Option<String> {
            self.0.borrow().last().cloned()
        }
    }

    #[test]
    fn lock_hides_overflow_until_dropped() {
        let body = FakeBody::default();
        let lock = BodyScrollLock::hold(body.clone());
        assert_eq!(body.current().as_deref(), Some("hidden"));

        drop(lock);
        assert_eq!(body.current().as_deref(), Some("auto"));
    }

    #[test]
    fn reopening_takes_a_fresh_lock() {
        let body = FakeBody::default();
        drop(BodyScrollLock::hold(body.clone()));
        let again = BodyScrollLock::hold(body.clone());
        assert_eq!(*body.0.borrow(), ["hidden", "auto", "hidden"]);
        drop(again);
        assert_eq!(body.current().as_deref(), Some("auto"));
    }
}
