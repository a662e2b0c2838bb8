use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub(crate) children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Join CSS declarations into an inline `style` attribute.
pub(crate) fn inline_style<I>(declarations: I) -> String
where
    I: IntoIterator<Item = (&'static str, String)>,
{
    declarations
        .into_iter()
        .map(|(property, value)| format!("{property}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}

pub(crate) fn px(value: f64) -> String {
    format!("{value:.1}px")
}

pub(crate) fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub(crate) fn secs(value: f64) -> String {
    format!("{value:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn inline_style_joins_declarations() {
        let style = inline_style([
            ("left", percent(12.5)),
            ("font-size", px(20.0)),
            ("animation-delay", secs(1.5)),
        ]);
        assert_eq!(style, "left:12.50%;font-size:20.0px;animation-delay:1.50s");
    }

    #[test]
    fn empty_style_is_empty() {
        assert_eq!(inline_style(std::iter::empty()), "");
    }
}
