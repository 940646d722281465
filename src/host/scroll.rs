use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::error::SiteError;
use crate::utils::{ Anchor, ScrollAnimation };

/// Scrolls the window so `anchor` sits at the top, easing over `duration_ms`.
pub async fn smooth_scroll_to(anchor: Anchor, duration_ms: f64) -> Result<(), SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::Host("no window".to_string()))?;
    let document = window.document().ok_or_else(|| SiteError::Host("no document".to_string()))?;
    let target = document
        .get_element_by_id(anchor.id())
        .ok_or_else(|| SiteError::MissingAnchor(anchor.id().to_string()))?;

    let from = window.scroll_y()?;
    let to = (from + target.get_bounding_client_rect().top()).max(0.0);
    let animation = ScrollAnimation::new(from, to, duration_ms);
    log::debug!("Scrolling to #{} ({} -> {})", anchor, from, to);

    let started = next_frame(&window).await?;
    loop {
        let elapsed = next_frame(&window).await? - started;
        window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
        if animation.is_finished(elapsed) {
            return Ok(());
        }
    }
}

/// Resolves with the timestamp of the next animation frame.
async fn next_frame(window: &Window) -> Result<f64, SiteError> {
    let mut scheduled = Ok(0);
    let promise = Promise::new(&mut |resolve, _reject| {
        scheduled = window.request_animation_frame(&resolve);
    });
    scheduled?;
    let timestamp = JsFuture::from(promise).await?;
    Ok(timestamp.as_f64().unwrap_or_default())
}
