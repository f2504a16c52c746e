//! Web Speech API glue for voice dictation.
//!
//! Chromium still ships the recognizer behind the `webkit` prefix, so the
//! constructor is looked up by name on `window` and the instance cast to
//! the typed `web_sys` wrapper. Sessions are one-shot and non-interim:
//! the final transcript is delivered once, through the callback.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Whether the browser exposes a speech-recognition engine at all.
pub fn is_supported() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| {
            CONSTRUCTOR_NAMES
                .iter()
                .any(|name| js_sys::Reflect::has(&w, &(*name).into()).unwrap_or(false))
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Start a one-shot Spanish dictation session; `on_transcript` receives
/// the final transcript when recognition finishes.
///
/// # Errors
///
/// Returns an error string when no recognizer is available or the session
/// fails to start.
#[cfg(feature = "csr")]
pub fn start_dictation(on_transcript: impl Fn(String) + 'static) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;

    let constructor = CONSTRUCTOR_NAMES
        .iter()
        .find_map(|name| {
            js_sys::Reflect::get(&window, &(*name).into())
                .ok()
                .filter(|v| !v.is_undefined())
        })
        .ok_or("speech recognition not available")?;
    let constructor: js_sys::Function =
        constructor.dyn_into().map_err(|_| "recognizer is not constructible")?;
    let recognizer: web_sys::SpeechRecognition =
        js_sys::Reflect::construct(&constructor, &js_sys::Array::new())
            .map_err(|_| "failed to construct recognizer")?
            .unchecked_into();

    recognizer.set_lang("es-ES");
    recognizer.set_continuous(false);
    recognizer.set_interim_results(false);
    recognizer.set_max_alternatives(1);

    let on_result = Closure::<dyn FnMut(web_sys::SpeechRecognitionEvent)>::new(
        move |ev: web_sys::SpeechRecognitionEvent| {
            let Some(results) = ev.results() else {
                return;
            };
            let Some(result) = results.get(0) else {
                return;
            };
            if let Some(alternative) = result.get(0) {
                on_transcript(alternative.transcript());
            }
        },
    );
    recognizer.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    // The session is one-shot; the handler lives for the page.
    on_result.forget();

    recognizer.start().map_err(|_| "failed to start recognition".to_owned())
}

#[cfg(not(feature = "csr"))]
pub fn start_dictation(on_transcript: impl Fn(String) + 'static) -> Result<(), String> {
    let _ = on_transcript;
    Err("not available off-browser".to_owned())
}
