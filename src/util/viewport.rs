//! Viewport width read for the responsive sidebar breakpoint.

/// Current window inner width in CSS pixels, or `None` off-browser.
pub fn width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
