use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrackOutcome {
    /// Freshly cracked, its scene is now open
    Cracked(Scene),
    /// Eggs crack only once, nothing changed
    AlreadyCracked,
}

impl CrackOutcome {
    pub fn has_update(self) -> bool {
        matches!(self, CrackOutcome::Cracked(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed(Scene),
    NotOpen,
}

impl CloseOutcome {
    pub fn has_update(self) -> bool {
        matches!(self, CloseOutcome::Closed(_))
    }
}

/// What the audio side has to do after the music control was pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MusicCommand {
    /// Try to start playback, report back with [`Surprise::music_started`] if it did
    Start,
    Pause,
}

/// All mutable state of the page: which eggs are cracked, which scene is open, the genie countdown and whether music
/// is playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surprise {
    eggs: [bool; EGG_COUNT],
    active: Option<Scene>,
    countdown: Countdown,
    music_on: bool,
}

impl Surprise {
    pub const fn new() -> Self {
        Self {
            eggs: [false; EGG_COUNT],
            active: None,
            countdown: Countdown::new(),
            music_on: false,
        }
    }

    pub const fn eggs(&self) -> &[bool; EGG_COUNT] {
        &self.eggs
    }

    pub fn is_cracked(&self, egg: EggIndex) -> bool {
        self.eggs.get(egg).copied().unwrap_or(false)
    }

    pub const fn active_scene(&self) -> Option<Scene> {
        self.active
    }

    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub const fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn crack_egg(&mut self, egg: EggIndex) -> Result<CrackOutcome> {
        let scene = Scene::from_egg(egg).ok_or(SurpriseError::InvalidEgg(egg))?;
        if self.eggs[egg] {
            log::trace!("egg {} already cracked", egg);
            return Ok(CrackOutcome::AlreadyCracked);
        }
        self.eggs[egg] = true;
        self.active = Some(scene);
        self.countdown.reset();
        log::debug!("egg {} cracked, opening {:?}", egg, scene);
        Ok(CrackOutcome::Cracked(scene))
    }

    /// Always closes, the countdown gate only hides the control, see [`Surprise::can_close`].
    pub fn close_overlay(&mut self) -> CloseOutcome {
        match self.active.take() {
            Some(scene) => {
                log::debug!("closing {:?}", scene);
                CloseOutcome::Closed(scene)
            }
            None => CloseOutcome::NotOpen,
        }
    }

    /// Whether a close control should be offered, the genie has to grant the wish first.
    pub fn can_close(&self) -> bool {
        match self.active {
            Some(Scene::Genie) => self.countdown.is_complete(),
            Some(_) => true,
            None => false,
        }
    }

    /// A one second tick must be pending exactly while this holds.
    pub fn countdown_armed(&self) -> bool {
        self.active == Some(Scene::Genie) && !self.countdown.is_complete()
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.countdown_armed() {
            log::trace!("stale countdown tick ignored");
            return TickOutcome::Ignored;
        }
        let outcome = self.countdown.tick();
        if outcome == TickOutcome::Completed {
            log::debug!("countdown complete, wish granted");
        }
        outcome
    }

    pub fn toggle_music(&mut self) -> MusicCommand {
        if self.music_on {
            self.music_on = false;
            MusicCommand::Pause
        } else {
            MusicCommand::Start
        }
    }

    pub fn music_started(&mut self) {
        self.music_on = true;
    }
}

impl Default for Surprise {
    fn default() -> Self {
        Self::new()
    }
}
