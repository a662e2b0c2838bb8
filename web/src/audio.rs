use crate::assets::AssetPaths;
use std::future::Future;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum AudioError {
    #[error("Audio element is not available")]
    Unavailable,
    #[error("Could not create audio element: {0}")]
    Create(String),
    #[error("Playback was rejected: {0}")]
    Rejected(String),
}

fn rejected(value: JsValue) -> AudioError {
    AudioError::Rejected(format!("{:?}", value))
}

/// Owns the looping background track and the one-shot crack effect for as long as the page is mounted. Dropping the
/// deck stops the music and lets go of both elements.
pub(crate) struct AudioDeck {
    music: Option<HtmlAudioElement>,
    crack: Option<HtmlAudioElement>,
}

impl AudioDeck {
    const MUSIC_VOLUME: f64 = 0.5;
    const CRACK_VOLUME: f64 = 0.9;

    pub(crate) fn new(assets: &AssetPaths) -> Self {
        let music = Self::load(&assets.music()).map(|music| {
            music.set_loop(true);
            music.set_volume(Self::MUSIC_VOLUME);
            music
        });
        let crack = Self::load(&assets.crack()).map(|crack| {
            crack.set_volume(Self::CRACK_VOLUME);
            crack
        });
        Self { music, crack }
    }

    fn load(src: &str) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(src) {
            Ok(audio) => Some(audio),
            Err(err) => {
                log::warn!("{} ({})", AudioError::Create(format!("{:?}", err)), src);
                None
            }
        }
    }

    /// Resolves once playback actually started, browsers reject it until the page saw a user interaction.
    pub(crate) fn start_music(&self) -> impl Future<Output = Result<(), AudioError>> + 'static {
        let started = self
            .music
            .as_ref()
            .ok_or(AudioError::Unavailable)
            .and_then(|music| music.play().map_err(rejected));
        async move {
            JsFuture::from(started?)
                .await
                .map(drop)
                .map_err(rejected)
        }
    }

    pub(crate) fn stop_music(&self) {
        if let Some(music) = &self.music {
            if let Err(err) = music.pause() {
                log::debug!("failed to pause music: {:?}", err);
            }
        }
    }

    /// Restart the crack effect from the beginning, failures are only logged.
    pub(crate) fn play_crack(&self) {
        let Some(crack) = &self.crack else {
            log::debug!("{}", AudioError::Unavailable);
            return;
        };
        crack.set_current_time(0.0);
        match crack.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("crack effect: {}", rejected(err));
                }
            }),
            Err(err) => log::debug!("crack effect: {}", rejected(err)),
        }
    }

    fn release(&mut self) {
        if let Some(music) = self.music.take() {
            if let Err(err) = music.pause() {
                log::debug!("failed to pause music on release: {:?}", err);
            }
        }
        self.crack.take();
    }
}

impl Drop for AudioDeck {
    fn drop(&mut self) {
        self.release();
        log::debug!("audio released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn errors_render_their_cause() {
        assert_eq!(
            AudioError::Rejected("NotAllowedError".to_string()).to_string(),
            "Playback was rejected: NotAllowedError"
        );
        assert_eq!(
            AudioError::Unavailable.to_string(),
            "Audio element is not available"
        );
    }
}
