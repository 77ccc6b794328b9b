#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Marker carried by the root element while the dark theme is active.
pub const DARK_MARKER: &str = "dark-mode";
/// Marker carried by the root element while the light theme is active.
pub const LIGHT_MARKER: &str = "light-mode";

/// A boolean-valued control the user flips to request a theme change.
pub trait ToggleControl {
    fn is_checked(&self) -> bool;
}

/// The root element whose presentation markers select the active theme.
///
/// Adding or removing a marker never fails; adding a marker that is
/// already present (or removing one that is absent) is a no-op.
pub trait MarkerTarget {
    fn add_marker(&self, marker: &str);
    fn remove_marker(&self, marker: &str);
}

impl<C: ToggleControl + ?Sized> ToggleControl for &C {
    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}

impl<R: MarkerTarget + ?Sized> MarkerTarget for &R {
    fn add_marker(&self, marker: &str) {
        (**self).add_marker(marker)
    }

    fn remove_marker(&self, marker: &str) {
        (**self).remove_marker(marker)
    }
}

/// Keeps the root element's theme markers in sync with a toggle control.
///
/// The control and root are injected at construction; the binding holds no
/// other state. Theme state is recomputed from the control's current value
/// on every change notification, so exactly one of [`DARK_MARKER`] and
/// [`LIGHT_MARKER`] is present on the root once at least one notification
/// has been processed. Whatever markers the root carried before the first
/// notification are left untouched until then.
pub struct ThemeBinding<C, R> {
    control: C,
    root: R,
}

impl<C: ToggleControl, R: MarkerTarget> ThemeBinding<C, R> {
    pub fn new(control: C, root: R) -> Self {
        Self { control, root }
    }

    /// Handles one change notification from the control.
    ///
    /// Reads the control's value at invocation time: `true` selects the
    /// dark marker, `false` the light one. Repeated invocations with the
    /// same value leave the marker set unchanged.
    pub fn on_control_change(&self) {
        if self.control.is_checked() {
            self.root.add_marker(DARK_MARKER);
            self.root.remove_marker(LIGHT_MARKER);
        } else {
            self.root.add_marker(LIGHT_MARKER);
            self.root.remove_marker(DARK_MARKER);
        }
    }
}
