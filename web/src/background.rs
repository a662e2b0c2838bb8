use crate::utils::*;
use std::rc::Rc;
use surprise_core::Backdrop;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BackgroundProps {
    pub(crate) backdrop: Rc<Backdrop>,
}

/// Gradient, blurred blobs and drifting emoji behind everything else, never receives pointer input.
#[function_component]
pub(crate) fn AmbientBackground(props: &BackgroundProps) -> Html {
    let backdrop = &props.backdrop;

    html! {
        <div class="bg" aria-hidden="true">
            {
                for (0..Backdrop::BLOB_COUNT).map(|i| html! {
                    <span class={classes!("bokeh", format!("bokeh--{}", i % Backdrop::BLOB_STYLES + 1))}/>
                })
            }
            {
                for backdrop.floating.iter().map(|f| {
                    let style = inline_style([
                        ("top", percent(f.top)),
                        ("left", percent(f.left)),
                        ("font-size", px(f.size)),
                        ("animation-duration", secs(f.duration)),
                        ("animation-delay", secs(f.delay)),
                    ]);
                    html! { <span class="float" {style}>{f.emoji}</span> }
                })
            }
            {
                for backdrop.balloons.iter().map(|b| {
                    let style = inline_style([
                        ("left", percent(b.left)),
                        ("font-size", px(b.size)),
                        ("animation-duration", secs(b.duration)),
                        ("animation-delay", secs(b.delay)),
                        ("filter", format!("hue-rotate({}deg)", b.hue)),
                    ]);
                    html! { <span class="balloon" {style}>{"🎈"}</span> }
                })
            }
            {
                for backdrop.ribbons.iter().map(|r| {
                    let style = inline_style([
                        ("top", percent(r.top)),
                        ("left", percent(r.left)),
                        ("font-size", px(r.size)),
                        ("animation-duration", secs(r.duration)),
                        ("animation-delay", secs(r.delay)),
                    ]);
                    html! { <span class="ribbon" {style}>{"🎀"}</span> }
                })
            }
        </div>
    }
}
