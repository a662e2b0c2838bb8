use gloo::events::EventListener;
use surprise_core::ViewportSize;
use yew::Callback;

/// Read the window's inner size, `None` if the browser would not tell.
pub(crate) fn current() -> Option<ViewportSize> {
    let window = gloo::utils::window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(ViewportSize::from_css_pixels(width, height))
}

/// Follows the window size for as long as it is alive, dropping it removes the resize listener.
pub(crate) struct ViewportTracker {
    size: ViewportSize,
    _resize_listener: EventListener,
}

impl ViewportTracker {
    pub(crate) fn new(on_resize: Callback<ViewportSize>) -> Self {
        let size = current().unwrap_or_else(|| {
            log::warn!("could not read the viewport size");
            ViewportSize::default()
        });
        let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
            match current() {
                Some(size) => on_resize.emit(size),
                None => log::warn!("could not read the viewport size after resize"),
            }
        });
        Self {
            size,
            _resize_listener: listener,
        }
    }

    pub(crate) fn size(&self) -> ViewportSize {
        self.size
    }

    /// Returns whether anything changed.
    pub(crate) fn update(&mut self, size: ViewportSize) -> bool {
        if self.size == size {
            return false;
        }
        log::trace!("viewport resized to {}x{}", size.width, size.height);
        self.size = size;
        true
    }
}
