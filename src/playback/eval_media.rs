//! `<audio>` control for webview renderers (desktop, mobile), where the DOM is
//! only reachable through `document::eval`.

use super::media::{MediaElement, MediaEvent, MediaListener, Subscription};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const PLAY_BODY: &str =
    "el.play().catch((err) => console.warn('audio playback was rejected', err));";

pub struct EvalMedia {
    id: &'static str,
    current_time: f64,
}

impl EvalMedia {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            current_time: 0.0,
        }
    }

    fn run(&self, body: &str) {
        let _ = document::eval(&element_script(self.id, body));
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Wraps `body` so it runs with `el` bound to the element, or not at all.
pub(crate) fn element_script(id: &str, body: &str) -> String {
    let id = js_string(id);
    format!(
        r#"(function () {{
            const el = document.getElementById({id});
            if (!el) return false;
            {body}
            return true;
        }})();"#
    )
}

/// Forwards `currentTime` on every `event` until a value is sent back.
pub(crate) fn listener_script(id: &str, event: &str) -> String {
    let id = js_string(id);
    let event = js_string(event);
    format!(
        r#"const el = document.getElementById({id});
        if (!el) return;
        const forward = () => dioxus.send(el.currentTime);
        el.addEventListener({event}, forward);
        await dioxus.recv();
        el.removeEventListener({event}, forward);"#
    )
}

fn seek_body(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    format!("el.currentTime = {seconds};")
}

impl MediaElement for EvalMedia {
    /// Last position this handle sought to; the webview is not queried.
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
        self.run(&seek_body(seconds));
    }

    fn play(&mut self) {
        self.run(PLAY_BODY);
    }

    fn pause(&mut self) {
        self.run("el.pause();");
    }

    fn subscribe(&mut self, event: MediaEvent, listener: MediaListener) -> Subscription {
        let mut listener = listener;
        let name = event.dom_name();
        let mut eval = document::eval(&listener_script(self.id, name));
        let stop = eval;

        let task = spawn(async move {
            while let Ok(seconds) = eval.recv::<f64>().await {
                listener(seconds);
            }
        });

        Subscription::new(move || {
            if let Err(err) = stop.send(true) {
                warn!(?err, event = name, "failed to detach media listener");
            }
            task.cancel();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_script_guards_missing_element() {
        let script = element_script("podcastr-player-audio", "el.pause();");
        assert!(script.contains(r#"document.getElementById("podcastr-player-audio")"#));
        assert!(script.contains("if (!el) return false;"));
        assert!(script.contains("el.pause();"));
    }

    #[test]
    fn listener_script_detaches_on_reply() {
        let script = listener_script("podcastr-player-audio", "timeupdate");
        assert!(script.contains(r#"el.addEventListener("timeupdate", forward);"#));
        assert!(script.contains("await dioxus.recv();"));
        assert!(script.contains(r#"el.removeEventListener("timeupdate", forward);"#));
    }

    #[test]
    fn play_handles_autoplay_rejection() {
        let script = element_script("podcastr-player-audio", PLAY_BODY);
        assert!(script.contains("el.play().catch("));
    }

    #[test]
    fn seek_never_emits_invalid_numbers() {
        assert_eq!(seek_body(65.0), "el.currentTime = 65;");
        assert_eq!(seek_body(-3.0), "el.currentTime = 0;");
        assert_eq!(seek_body(f64::NAN), "el.currentTime = 0;");
    }

    #[test]
    fn ids_are_escaped_as_js_strings() {
        let script = element_script(r#"a"b"#, "");
        assert!(script.contains(r#"getElementById("a\"b")"#));
    }
}
