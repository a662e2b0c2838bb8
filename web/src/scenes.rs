use crate::utils::*;
use std::rc::Rc;
use surprise_core::*;
use yew::prelude::*;

const BACK_LABEL: &str = "Back to Eggs";

const FLOWERS_TEXT: &str = "Wishing this bouquet of roses brings you joy. Sorry I couldn't give you real flowers \
                            this year, but I will someday.";
const GENIE_TEXT: &str = "I know you’ve been working so hard this year, so I’ve hired a genie from Egypt to help \
                          you. Better make your wish quickly!";
const GENIE_GRANTED_TEXT: &str = "Don't worry Toe Toe, your wish is granted.";
const VIDEO_CAPTION: &str = "Oh! What could this video be?";
const VIDEO_FALLBACK: &str = "Your browser does not support the video tag.";

fn countdown_text(countdown: &Countdown) -> String {
    format!("⏳ You have {} {}", countdown.remaining(), countdown.unit())
}

fn back_button(on_close: &Callback<()>) -> Html {
    let onclick = on_close.reform(|_: MouseEvent| ());
    html! {
        <button class="btn" {onclick}>{BACK_LABEL}</button>
    }
}

fn petal_rain(petals: &[Petal]) -> Html {
    html! {
        <div class="petals" aria-hidden="true">
            {
                for petals.iter().map(|p| {
                    let style = inline_style([
                        ("left", percent(p.left)),
                        ("animation-delay", secs(p.delay)),
                        ("animation-duration", secs(p.duration)),
                        ("transform", format!("rotate({:.1}deg)", p.rotation)),
                    ]);
                    html! { <span class="petal" {style}>{p.emoji}</span> }
                })
            }
        </div>
    }
}

fn lamp_smoke(puffs: &[SmokePuff]) -> Html {
    html! {
        <div class="lampArea" aria-hidden="true">
            <div class="lamp">{"🪔"}</div>
            {
                for puffs.iter().map(|p| {
                    let style = inline_style([
                        ("left", percent(p.left)),
                        ("width", px(p.size)),
                        ("height", px(p.size)),
                        ("animation-delay", secs(p.delay)),
                        ("animation-duration", secs(p.duration)),
                    ]);
                    html! { <span class="smoke" {style}/> }
                })
            }
        </div>
    }
}

fn sparkle_field(sparkles: &[Sparkle]) -> Html {
    html! {
        <div class="sparkles" aria-hidden="true">
            {
                for sparkles.iter().map(|s| {
                    let style = inline_style([
                        ("top", percent(s.top)),
                        ("left", percent(s.left)),
                        ("width", px(s.size)),
                        ("height", px(s.size)),
                        ("animation-delay", secs(s.delay)),
                    ]);
                    html! { <span class="spark" {style}/> }
                })
            }
        </div>
    }
}

fn confetti_style(layout: &BurstLayout, piece: &ConfettiPiece) -> String {
    inline_style([
        ("left", px(layout.left_px(piece))),
        ("width", px(piece.size)),
        ("height", px(piece.size * 0.45)),
        ("background", format!("hsl({}, 85%, 62%)", piece.hue)),
        ("animation-duration", secs(piece.duration)),
        ("animation-delay", secs(piece.delay)),
        ("--fall", px(layout.fall_px(piece))),
        ("--spin", format!("{:.0}deg", piece.spin)),
        ("--drift", px(piece.drift)),
    ])
}

#[derive(Properties, PartialEq)]
struct BurstProps {
    layout: BurstLayout,
    ornaments: Rc<SceneOrnaments>,
}

/// Confetti falling over the whole viewport, re-laid out whenever the viewport changes.
#[function_component]
fn Burst(props: &BurstProps) -> Html {
    let layout = props.layout;
    let style = inline_style([
        ("width", format!("{}px", layout.viewport.width)),
        ("height", format!("{}px", layout.viewport.height)),
    ]);

    html! {
        <div class="burst" {style} aria-hidden="true">
            {
                for props.ornaments.confetti.iter().take(layout.pieces).map(|piece| html! {
                    <span class="confetti" style={confetti_style(&layout, piece)}/>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct OverlayProps {
    pub(crate) scene: Scene,
    pub(crate) viewport: ViewportSize,
    pub(crate) ornaments: Rc<SceneOrnaments>,
    #[prop_or_default]
    pub(crate) children: Html,
}

/// Full screen dialog shared by all scenes, mounted on the body.
#[function_component]
pub(crate) fn OverlayFrame(props: &OverlayProps) -> Html {
    let scene = props.scene;
    let layout = BurstLayout::for_scene(scene, props.viewport);
    let class = classes!("overlay", format!("overlay--act{}", scene.number()));

    html! {
        <Modal>
            <div {class} role="dialog" aria-modal="true" aria-label={scene.label()}>
                <Burst {layout} ornaments={props.ornaments.clone()}/>
                {props.children.clone()}
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FlowersProps {
    pub(crate) ornaments: Rc<SceneOrnaments>,
    pub(crate) on_close: Callback<()>,
}

#[function_component]
pub(crate) fn FlowersScene(props: &FlowersProps) -> Html {
    html! {
        <div class="card">
            {petal_rain(props.ornaments.dressing.petals())}
            <div class="emojis" aria-hidden="true">
                <span>{"🎀"}</span><span>{"💐"}</span><span>{"🎈"}</span>
            </div>
            <p class="text">{FLOWERS_TEXT}</p>
            {back_button(&props.on_close)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GenieProps {
    pub(crate) ornaments: Rc<SceneOrnaments>,
    pub(crate) countdown: Countdown,
    pub(crate) on_close: Callback<()>,
}

/// The genie waits out the countdown, only then can the scene be left.
#[function_component]
pub(crate) fn GenieScene(props: &GenieProps) -> Html {
    let countdown = &props.countdown;
    let complete = countdown.is_complete();
    let genie_class = classes!("genie", complete.then_some("genie--dance"));

    html! {
        <div class="card">
            {lamp_smoke(props.ornaments.dressing.smoke())}
            <div class={genie_class} aria-hidden="true">{"🧞‍♂️"}</div>
            if complete {
                <p class="text">{GENIE_GRANTED_TEXT}</p>
                {back_button(&props.on_close)}
            } else {
                <p class="text">{GENIE_TEXT}</p>
                <p class="text" aria-live="polite">{countdown_text(countdown)}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VideoProps {
    pub(crate) ornaments: Rc<SceneOrnaments>,
    pub(crate) src: AttrValue,
    pub(crate) on_close: Callback<()>,
}

/// Transport controls are left to the browser's own video player.
#[function_component]
pub(crate) fn VideoScene(props: &VideoProps) -> Html {
    html! {
        <div class="card card--video">
            {sparkle_field(props.ornaments.dressing.sparkles())}
            <div class="videoWrap">
                <div class="videoBadge" aria-hidden="true">{"🎥"}</div>
                <video class="video video--big" controls={true} playsinline={true}>
                    <source src={props.src.clone()} type="video/mp4"/>
                    {VIDEO_FALLBACK}
                </video>
                <p class="text underVideo">{VIDEO_CAPTION}</p>
            </div>
            {back_button(&props.on_close)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn countdown_text_pluralizes() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown_text(&countdown), "⏳ You have 30 seconds");
        while countdown.remaining() > 1 {
            countdown.tick();
        }
        assert_eq!(countdown_text(&countdown), "⏳ You have 1 second");
    }

    #[test]
    fn confetti_is_placed_in_viewport_pixels() {
        let piece = ConfettiPiece {
            x: 0.25,
            size: 10.0,
            duration: 4.0,
            delay: 0.5,
            hue: 120,
            spin: 360.0,
            drift: -20.0,
        };
        let layout = BurstLayout::for_scene(Scene::Flowers, ViewportSize::new(400, 300));
        let style = confetti_style(&layout, &piece);
        assert!(style.starts_with("left:100.0px;width:10.0px;height:4.5px;"));
        assert!(style.contains("--fall:320.0px"));
        assert!(style.contains("--spin:360deg"));

        let resized = BurstLayout::for_scene(Scene::Flowers, ViewportSize::new(800, 300));
        assert!(confetti_style(&resized, &piece).starts_with("left:200.0px;"));
    }

    #[cfg(target_arch = "wasm32")]
    #[test]
    async fn video_plays_inline_with_controls() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let props = VideoProps {
            ornaments: Rc::new(SceneOrnaments::generate(Scene::Video, 7)),
            src: AttrValue::from("/your-video.mp4"),
            on_close: Callback::noop(),
        };
        let handle = yew::Renderer::<VideoScene>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;

        let video = root.query_selector("video").unwrap().unwrap();
        assert!(video.has_attribute("playsinline"));
        assert!(video.has_attribute("controls"));
        handle.destroy();
    }
}
