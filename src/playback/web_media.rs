use super::media::{MediaElement, MediaEvent, MediaListener, Subscription};
use dioxus::logger::tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlAudioElement};

/// `<audio>` element looked up from the live document.
pub struct WebAudioElement {
    audio: HtmlAudioElement,
}

impl WebAudioElement {
    pub fn find(id: &str) -> Option<Self> {
        let document = window()?.document()?;
        let audio = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlAudioElement>()
            .ok()?;
        Some(Self { audio })
    }
}

impl MediaElement for WebAudioElement {
    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn play(&mut self) {
        match self.audio.play() {
            // Autoplay policies reject the promise until the user interacts.
            Ok(promise) => {
                let on_reject = Closure::once(move |err: JsValue| {
                    warn!(?err, "audio playback was rejected");
                });
                let _ = promise.catch(&on_reject);
                on_reject.forget();
            }
            Err(err) => warn!(?err, "audio element refused to play"),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            warn!(?err, "audio element refused to pause");
        }
    }

    fn subscribe(&mut self, event: MediaEvent, listener: MediaListener) -> Subscription {
        let mut listener = listener;
        let reader = self.audio.clone();
        let closure = Closure::wrap(
            Box::new(move || listener(reader.current_time())) as Box<dyn FnMut()>
        );

        let name = event.dom_name();
        if let Err(err) = self
            .audio
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        {
            warn!(?err, event = name, "failed to register media listener");
            return Subscription::inert();
        }

        let target = self.audio.clone();
        Subscription::new(move || {
            if let Err(err) =
                target.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(?err, event = name, "failed to remove media listener");
            }
        })
    }
}
