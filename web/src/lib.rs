use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod assets;
mod audio;
mod background;
mod scenes;
mod utils;
mod viewport;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    surprise: app::SurpriseProps,
}

impl Args {
    /// Parse `#-vv&--seed=42` style fragments; anything else, like a plain `#top` anchor, gets the defaults.
    fn from_hash(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::try_parse_from(hash.split(['#', '&'])) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = Args::from_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("surprise")
        .expect("Could not find id=\"surprise\" element");

    log::info!("App started");
    yew::Renderer::<app::SurpriseView>::with_root_and_props(root, args.surprise).render();
}
