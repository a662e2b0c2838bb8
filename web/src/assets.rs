/// Locations of the static media, relative to a configurable base.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AssetPaths {
    base: String,
}

impl AssetPaths {
    const MUSIC: &'static str = "birthday-piano.mp3";
    const CRACK: &'static str = "egg-crack.mp3";
    const VIDEO: &'static str = "your-video.mp4";

    pub(crate) fn new(base: &str) -> Self {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Self { base }
    }

    pub(crate) fn music(&self) -> String {
        self.resolve(Self::MUSIC)
    }

    pub(crate) fn crack(&self) -> String {
        self.resolve(Self::CRACK)
    }

    pub(crate) fn video(&self) -> String {
        self.resolve(Self::VIDEO)
    }

    fn resolve(&self, file: &str) -> String {
        format!("{}{}", self.base, file)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new("/")
    }
}
