//! Caption Commands
//!
//! Framework-agnostic command handlers. A front-end wraps these in its own
//! command/route macros and passes the shared [`AppState`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::core::fonts::FontStyle;
use crate::ipc::payloads::{
    CaptionOptionsDto, GenerateCaptionPayload, GenerateCaptionResponse, DEFAULT_FONT_STYLE,
    DEFAULT_STYLE,
};
use crate::AppState;

/// Generates a caption for the uploaded image
#[instrument(skip(state, payload), fields(style = %payload.style, font = %payload.font_style, language = %payload.language))]
pub async fn generate_caption(
    state: &AppState,
    payload: GenerateCaptionPayload,
) -> Result<GenerateCaptionResponse, String> {
    let image = payload.load_image().await.map_err(|e| e.to_ipc_error())?;
    let request = payload.to_request();
    let mut rng = StdRng::from_entropy();

    let caption = state
        .caption_service
        .generate(&request, &image, &mut rng)
        .await
        .map_err(|e| e.to_ipc_error())?;

    debug!(chars = caption.chars().count(), "Caption generated");
    Ok(GenerateCaptionResponse { caption })
}

/// Lists styles, font styles and languages for the option pickers
pub fn get_caption_options(state: &AppState) -> CaptionOptionsDto {
    let composer = state.caption_service.composer();
    let translator = composer.translator();

    CaptionOptionsDto {
        styles: composer
            .styles()
            .style_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        font_styles: FontStyle::ALL
            .iter()
            .map(|f| f.as_str().to_string())
            .collect(),
        languages: translator
            .languages()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default_style: DEFAULT_STYLE.to_string(),
        default_font_style: DEFAULT_FONT_STYLE.to_string(),
        default_language: translator.default_language().to_string(),
    }
}
