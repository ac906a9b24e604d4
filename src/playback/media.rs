//! Observer interface over the platform media element.
//!
//! The panel never touches the DOM directly: it asks for the mounted element,
//! drives it through [`MediaElement`], and keeps [`Subscription`] guards for the
//! listeners it registers. Dropping a guard unregisters its listener.

use std::fmt;

/// Id of the `<audio>` element rendered by the player panel.
pub const PLAYER_AUDIO_ID: &str = "podcastr-player-audio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    TimeUpdate,
}

impl MediaEvent {
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
        }
    }
}

/// Listener callback; receives the element's current time in seconds.
pub type MediaListener = Box<dyn FnMut(f64)>;

pub trait MediaElement {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn subscribe(&mut self, event: MediaEvent, listener: MediaListener) -> Subscription;
}

/// Scoped listener registration.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A registration that never took hold.
    pub fn inert() -> Self {
        Self { teardown: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformMedia = super::web_media::WebAudioElement;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformMedia = super::eval_media::EvalMedia;

/// The panel's audio element, if one is currently mounted.
#[cfg(target_arch = "wasm32")]
pub fn mounted_media() -> Option<PlatformMedia> {
    PlatformMedia::find(PLAYER_AUDIO_ID)
}

/// Webview renderers cannot see the DOM synchronously, so the handle is always
/// handed out; its scripts do nothing while the element is absent.
#[cfg(not(target_arch = "wasm32"))]
pub fn mounted_media() -> Option<PlatformMedia> {
    Some(PlatformMedia::new(PLAYER_AUDIO_ID))
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    #[derive(Default)]
    struct Inner {
        current_time: f64,
        plays: usize,
        pauses: usize,
        next_id: u64,
        listeners: Vec<(u64, MediaEvent, MediaListener)>,
    }

    /// In-memory media element that records calls and live listeners.
    #[derive(Clone, Default)]
    pub(crate) struct FakeMedia {
        inner: Rc<RefCell<Inner>>,
    }

    impl FakeMedia {
        pub(crate) fn plays(&self) -> usize {
            self.inner.borrow().plays
        }

        pub(crate) fn pauses(&self) -> usize {
            self.inner.borrow().pauses
        }

        pub(crate) fn listeners(&self, event: MediaEvent) -> usize {
            self.inner
                .borrow()
                .listeners
                .iter()
                .filter(|(_, kind, _)| *kind == event)
                .count()
        }

        /// Moves the playhead and notifies listeners of `event`.
        pub(crate) fn emit(&self, event: MediaEvent, time: f64) {
            let mut inner = self.inner.borrow_mut();
            inner.current_time = time;
            for (_, kind, listener) in inner.listeners.iter_mut() {
                if *kind == event {
                    listener(time);
                }
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn current_time(&self) -> f64 {
            self.inner.borrow().current_time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.inner.borrow_mut().current_time = seconds;
        }

        fn play(&mut self) {
            self.inner.borrow_mut().plays += 1;
        }

        fn pause(&mut self) {
            self.inner.borrow_mut().pauses += 1;
        }

        fn subscribe(&mut self, event: MediaEvent, listener: MediaListener) -> Subscription {
            let id = {
                let mut inner = self.inner.borrow_mut();
                inner.next_id += 1;
                let id = inner.next_id;
                inner.listeners.push((id, event, listener));
                id
            };
            let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
            Subscription::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(other, _, _)| *other != id);
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeMedia;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let mut media = FakeMedia::default();
        let seen = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&seen);
        let subscription =
            media.subscribe(MediaEvent::TimeUpdate, Box::new(move |t| sink.set(t)));

        media.emit(MediaEvent::TimeUpdate, 3.5);
        assert_eq!(seen.get(), 3.5);
        assert_eq!(media.listeners(MediaEvent::TimeUpdate), 1);

        drop(subscription);
        media.emit(MediaEvent::TimeUpdate, 9.0);
        assert_eq!(seen.get(), 3.5);
        assert_eq!(media.listeners(MediaEvent::TimeUpdate), 0);
    }

    #[test]
    fn inert_subscription_drops_quietly() {
        let subscription = Subscription::inert();
        assert_eq!(format!("{subscription:?}"), "Subscription { active: false }");
    }

    #[test]
    fn event_names_match_dom() {
        assert_eq!(MediaEvent::TimeUpdate.dom_name(), "timeupdate");
    }
}
