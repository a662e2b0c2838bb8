use crate::assets::AssetPaths;
use crate::audio::{AudioDeck, AudioError};
use crate::background::AmbientBackground;
use crate::scenes::*;
use crate::utils::*;
use crate::viewport::ViewportTracker;
use clap::Args;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use surprise_core::{
    Backdrop, Countdown, CrackOutcome, EGG_COUNT, EggIndex, MusicCommand, Scene, SceneOrnaments,
    Surprise, ViewportSize,
};
use yew::prelude::*;

const TITLE: &str = "Happy 23rd Birthday, Hsu Mon";
const SUBTITLE: &str = "I've found three eggs for you. Crack them to see what's inside.";
const MUSIC_HINT: &str = "kindly turn on the music first";

#[derive(Debug)]
pub(crate) enum Msg {
    CrackEgg(EggIndex),
    CloseOverlay,
    Tick,
    ToggleMusic,
    MusicStarted(Result<(), AudioError>),
    Resize(ViewportSize),
}

/// What to do with the pending countdown tick after a state update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerAction {
    Schedule,
    Keep,
    Cancel,
    Idle,
}

impl TimerAction {
    /// At most one tick is pending, and none unless the countdown is armed.
    fn decide(armed: bool, pending: bool) -> Self {
        match (armed, pending) {
            (true, false) => TimerAction::Schedule,
            (true, true) => TimerAction::Keep,
            (false, true) => TimerAction::Cancel,
            (false, false) => TimerAction::Idle,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct EggProps {
    egg: EggIndex,
    #[prop_or_default]
    cracked: bool,
    callback: Callback<EggIndex>,
}

#[function_component(EggButton)]
fn egg_button(props: &EggProps) -> Html {
    let EggProps {
        egg,
        cracked,
        callback,
    } = props.clone();
    let number = egg + 1;
    let class = classes!(
        "egg",
        format!("egg--{}", number),
        cracked.then_some("egg--cracked")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("egg {} clicked", egg);
        callback.emit(egg);
    });

    html! {
        <button {class} {onclick} aria-label={format!("Crack Egg {}", number)}>
            <span class="egg__shine"/>
            <span class="egg__gloss"/>
            <span class="egg__label">{format!("Egg {}", number)}</span>
            if cracked {
                <span class="egg__burst" aria-hidden="true">{"💥"}</span>
            }
        </button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MusicDockProps {
    #[prop_or_default]
    on: bool,
    callback: Callback<()>,
}

#[function_component(MusicDock)]
fn music_dock(props: &MusicDockProps) -> Html {
    let on = props.on;
    let onclick = props.callback.reform(|_: MouseEvent| ());
    let class = classes!("musicBtn", if on { "on" } else { "off" });
    let pressed = if on { "true" } else { "false" };
    let label = if on { "🔊 Music On" } else { "🔈 Music Off" };

    html! {
        <div class="musicDock" role="region" aria-label="music control">
            <div class="musicNote"><strong>{MUSIC_HINT}</strong>{" 🎵"}</div>
            <button {class} {onclick} aria-pressed={pressed}>{label}</button>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct SurpriseProps {
    /// Force an ornament seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Base path the music, sound and video files are served from
    #[arg(long, default_value = "/")]
    pub(crate) assets: String,
}

pub(crate) struct SurpriseView {
    surprise: Surprise,
    backdrop: Rc<Backdrop>,
    scene_ornaments: Option<Rc<SceneOrnaments>>,
    seed: Option<u64>,
    video_src: AttrValue,
    countdown_timer: Option<Timeout>,
    viewport: ViewportTracker,
    audio: AudioDeck,
}

impl SurpriseView {
    fn seed_for(&self, salt: u64) -> u64 {
        self.seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(salt))
    }

    fn crack_egg(&mut self, egg: EggIndex) -> bool {
        match self.surprise.crack_egg(egg) {
            Ok(CrackOutcome::Cracked(scene)) => {
                let seed = self.seed_for(scene.number().into());
                self.scene_ornaments = Some(Rc::new(SceneOrnaments::generate(scene, seed)));
                self.audio.play_crack();
                true
            }
            Ok(CrackOutcome::AlreadyCracked) => false,
            Err(err) => {
                log::error!("{}", err);
                false
            }
        }
    }

    fn close_overlay(&mut self) -> bool {
        if !self.surprise.can_close() {
            log::debug!("close ignored, the wish is not granted yet");
            return false;
        }
        let closed = self.surprise.close_overlay().has_update();
        if closed {
            self.scene_ornaments = None;
        }
        closed
    }

    fn toggle_music(&mut self, ctx: &Context<Self>) -> bool {
        match self.surprise.toggle_music() {
            MusicCommand::Pause => {
                self.audio.stop_music();
                log::debug!("music paused");
                true
            }
            MusicCommand::Start => {
                let started = self.audio.start_music();
                ctx.link()
                    .send_future(async move { Msg::MusicStarted(started.await) });
                false
            }
        }
    }

    fn sync_countdown_timer(&mut self, ctx: &Context<Self>) {
        let armed = self.surprise.countdown_armed();
        match TimerAction::decide(armed, self.countdown_timer.is_some()) {
            TimerAction::Schedule => {
                let link = ctx.link().clone();
                self.countdown_timer = Some(Timeout::new(Countdown::TICK_MILLIS, move || {
                    link.send_message(Msg::Tick)
                }));
            }
            TimerAction::Cancel => {
                self.countdown_timer.take();
                log::trace!("countdown timer cancelled");
            }
            TimerAction::Keep | TimerAction::Idle => {}
        }
    }

    fn view_overlay(&self, ctx: &Context<Self>) -> Html {
        let (Some(scene), Some(ornaments)) =
            (self.surprise.active_scene(), self.scene_ornaments.clone())
        else {
            return html! {};
        };
        let on_close = ctx.link().callback(|()| Msg::CloseOverlay);
        let viewport = self.viewport.size();

        let content = match scene {
            Scene::Flowers => html! {
                <FlowersScene ornaments={ornaments.clone()} {on_close}/>
            },
            Scene::Genie => html! {
                <GenieScene
                    ornaments={ornaments.clone()}
                    countdown={*self.surprise.countdown()}
                    {on_close}
                />
            },
            Scene::Video => html! {
                <VideoScene ornaments={ornaments.clone()} src={self.video_src.clone()} {on_close}/>
            },
        };

        html! {
            <OverlayFrame {scene} {viewport} {ornaments}>
                {content}
            </OverlayFrame>
        }
    }
}

impl Component for SurpriseView {
    type Message = Msg;
    type Properties = SurpriseProps;

    fn create(ctx: &Context<Self>) -> Self {
        let SurpriseProps { seed, assets } = ctx.props();
        let assets = AssetPaths::new(assets);
        let backdrop_seed = seed.unwrap_or_else(js_random_seed);

        Self {
            surprise: Surprise::new(),
            backdrop: Rc::new(Backdrop::generate(backdrop_seed)),
            scene_ornaments: None,
            seed: *seed,
            video_src: assets.video().into(),
            countdown_timer: None,
            viewport: ViewportTracker::new(ctx.link().callback(Msg::Resize)),
            audio: AudioDeck::new(&assets),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CrackEgg(egg) => self.crack_egg(egg),
            CloseOverlay => self.close_overlay(),
            Tick => {
                // the handle fired, it is no longer pending
                self.countdown_timer = None;
                let outcome = self.surprise.tick();
                log::trace!("countdown tick: {:?}", outcome);
                outcome.has_update()
            }
            ToggleMusic => self.toggle_music(ctx),
            MusicStarted(Ok(())) => {
                log::debug!("music started");
                self.surprise.music_started();
                true
            }
            MusicStarted(Err(err)) => {
                log::debug!("music did not start: {}", err);
                false
            }
            Resize(size) => self.viewport.update(size),
        };

        self.sync_countdown_timer(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_crack = ctx.link().callback(Msg::CrackEgg);
        let on_music = ctx.link().callback(|()| Msg::ToggleMusic);

        html! {
            <div class="app-root">
                <AmbientBackground backdrop={self.backdrop.clone()}/>
                <main class="centerArea">
                    <header class="hero">
                        <h1 class="title">{TITLE}</h1>
                        <p class="subtitle">{SUBTITLE}</p>
                    </header>
                    <section class="eggs" aria-label="eggs">
                        {
                            for (0..EGG_COUNT).map(|egg| html! {
                                <EggButton
                                    {egg}
                                    cracked={self.surprise.is_cracked(egg)}
                                    callback={on_crack.clone()}
                                />
                            })
                        }
                    </section>
                </main>
                <MusicDock on={self.surprise.music_on()} callback={on_music}/>
                {self.view_overlay(ctx)}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.countdown_timer.take();
        log::debug!("surprise unmounted");
    }
}
