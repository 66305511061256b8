use crate::dom;
use app_core::SceneState;
use web_sys as web;

/// Refresh the `#info` line with the current scene summary.
pub fn update_info(document: &web::Document, scene: &SceneState) {
    dom::set_text(document, "info", &scene.info_line());
}
