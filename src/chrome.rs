// Page chrome around the sphere: the sound toggle button and the intro video
// that fades out to reveal the gallery. Both are optional; when any of their
// elements is missing the feature is skipped.

use crate::config::GalleryConfig;
use crate::constants::INTRO_FADE_MS;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_sound_toggle(document: &web::Document, config: &GalleryConfig) {
    let btn = document.get_element_by_id(&config.btn_id);
    let sound = document
        .get_element_by_id(&config.sound_id)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok());
    let (Some(btn), Some(sound)) = (btn, sound) else {
        log::debug!(
            "[sound] #{} or #{} missing, toggle not wired",
            config.btn_id,
            config.sound_id
        );
        return;
    };

    let label = btn.clone();
    dom::add_click_listener(&btn, move |_ev| {
        if sound.paused() {
            play(&sound);
            label.set_text_content(Some("Stop Sound"));
        } else {
            _ = sound.pause();
            label.set_text_content(Some("Play Sound"));
        }
    });
}

fn play(media: &web::HtmlMediaElement) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[sound] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[sound] play failed: {:?}", e),
    }
}

pub fn wire_intro_reveal(
    document: &web::Document,
    config: &GalleryConfig,
    sphere: &web::HtmlElement,
) {
    let start_btn = dom::html_element_by_id(document, &config.start_btn_id);
    let intro_screen = dom::html_element_by_id(document, &config.intro_screen_id);
    let intro_video = dom::html_element_by_id(document, &config.intro_video_id);
    let (Some(start_btn), Some(intro_screen), Some(intro_video)) =
        (start_btn, intro_screen, intro_video)
    else {
        log::debug!("[intro] start button or intro elements missing, reveal not wired");
        return;
    };

    let sphere = sphere.clone();
    dom::add_click_listener(&start_btn, move |_ev| {
        fade_out_video(&intro_video);

        let intro_screen = intro_screen.clone();
        let sphere = sphere.clone();
        let reveal = Closure::once(move || reveal_gallery(&intro_screen, &sphere));
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                reveal.as_ref().unchecked_ref(),
                INTRO_FADE_MS,
            );
        }
        reveal.forget();
    });
}

fn fade_out_video(video: &web::HtmlElement) {
    let secs = INTRO_FADE_MS as f64 / 1000.0;
    dom::set_style(
        video,
        "transition",
        &format!("filter {secs}s ease-out, opacity {secs}s ease-out"),
    );
    dom::set_style(video, "filter", "grayscale(1) contrast(0)");
    dom::set_style(video, "opacity", "0");
}

fn reveal_gallery(intro_screen: &web::HtmlElement, sphere: &web::HtmlElement) {
    dom::set_style(intro_screen, "display", "none");
    dom::set_style(sphere, "visibility", "visible");
    dom::set_style(sphere, "opacity", "1");

    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        dom::set_style(&body, "background", "transparent");
        dom::set_style(&body, "overflow", "hidden");
    }
    log::info!("[intro] gallery revealed");
}
