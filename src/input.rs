//! Logical controls and the input collaborator interface.
//!
//! The session polls controls through [`ControlInput`] once per tick and
//! never sees the device behind it. The keyboard adapter maps Bevy's
//! `ButtonInput<KeyCode>` through configurable [`KeyBindings`].

use bevy::prelude::*;

/// The fixed set of logical controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    Thrust,
    CycleTimeScale,
    Reset,
    ZoomIn,
    ZoomOut,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::RotateLeft,
        Control::RotateRight,
        Control::Thrust,
        Control::CycleTimeScale,
        Control::Reset,
        Control::ZoomIn,
        Control::ZoomOut,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Level- and edge-triggered queries over the logical controls.
pub trait ControlInput {
    /// Whether the control is currently held.
    fn is_held(&self, control: Control) -> bool;

    /// Whether the control was activated this tick.
    fn just_activated(&self, control: Control) -> bool;
}

/// A frozen set of control states for one tick.
///
/// Useful for scripted input and replays, and as the no-input default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSnapshot {
    held: [bool; Control::ALL.len()],
    activated: [bool; Control::ALL.len()],
}

impl ControlSnapshot {
    /// Nothing held, nothing activated.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Mark `control` as held.
    pub fn hold(mut self, control: Control) -> Self {
        self.held[control.slot()] = true;
        self
    }

    /// Mark `control` as activated this tick (which also means held).
    pub fn press(mut self, control: Control) -> Self {
        self.held[control.slot()] = true;
        self.activated[control.slot()] = true;
        self
    }

    /// Capture the current state of any input source.
    pub fn capture(input: &impl ControlInput) -> Self {
        let mut snapshot = Self::default();
        for control in Control::ALL {
            snapshot.held[control.slot()] = input.is_held(control);
            snapshot.activated[control.slot()] = input.just_activated(control);
        }
        snapshot
    }
}

impl ControlInput for ControlSnapshot {
    fn is_held(&self, control: Control) -> bool {
        self.held[control.slot()]
    }

    fn just_activated(&self, control: Control) -> bool {
        self.activated[control.slot()]
    }
}

/// Keyboard keys bound to each control.
#[derive(Resource, Clone, Debug)]
pub struct KeyBindings {
    bindings: Vec<(Control, Vec<KeyCode>)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Control::RotateLeft, vec![KeyCode::ArrowLeft, KeyCode::KeyA]),
                (Control::RotateRight, vec![KeyCode::ArrowRight, KeyCode::KeyD]),
                (
                    Control::Thrust,
                    vec![KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space],
                ),
                (Control::CycleTimeScale, vec![KeyCode::KeyT]),
                (Control::Reset, vec![KeyCode::KeyR]),
                (Control::ZoomIn, vec![KeyCode::KeyZ]),
                (Control::ZoomOut, vec![KeyCode::KeyX]),
            ],
        }
    }
}

impl KeyBindings {
    /// Keys bound to `control` (empty if unbound).
    pub fn keys(&self, control: Control) -> &[KeyCode] {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == control)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the keys bound to `control`.
    pub fn rebind(&mut self, control: Control, keys: Vec<KeyCode>) {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == control) {
            Some((_, existing)) => *existing = keys,
            None => self.bindings.push((control, keys)),
        }
    }
}

/// [`ControlInput`] view over Bevy keyboard state.
pub struct KeyboardControls<'a> {
    keys: &'a ButtonInput<KeyCode>,
    bindings: &'a KeyBindings,
}

impl<'a> KeyboardControls<'a> {
    pub fn new(keys: &'a ButtonInput<KeyCode>, bindings: &'a KeyBindings) -> Self {
        Self { keys, bindings }
    }
}

impl ControlInput for KeyboardControls<'_> {
    fn is_held(&self, control: Control) -> bool {
        self.keys
            .any_pressed(self.bindings.keys(control).iter().copied())
    }

    fn just_activated(&self, control: Control) -> bool {
        self.keys
            .any_just_pressed(self.bindings.keys(control).iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_press_implies_held() {
        let snapshot = ControlSnapshot::idle()
            .press(Control::Reset)
            .hold(Control::Thrust);
        assert!(snapshot.is_held(Control::Reset));
        assert!(snapshot.just_activated(Control::Reset));
        assert!(snapshot.is_held(Control::Thrust));
        assert!(!snapshot.just_activated(Control::Thrust));
        assert!(!snapshot.is_held(Control::ZoomIn));
    }

    #[test]
    fn test_keyboard_adapter_maps_bindings() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::KeyT);

        let controls = KeyboardControls::new(&keys, &bindings);
        assert!(controls.is_held(Control::Thrust));
        assert!(controls.just_activated(Control::CycleTimeScale));
        assert!(!controls.is_held(Control::RotateLeft));

        keys.clear();
        let controls = KeyboardControls::new(&keys, &bindings);
        assert!(controls.is_held(Control::Thrust));
        assert!(!controls.just_activated(Control::CycleTimeScale));
    }

    #[test]
    fn test_rebind_and_capture() {
        let mut bindings = KeyBindings::default();
        bindings.rebind(Control::Thrust, vec![KeyCode::KeyK]);
        assert_eq!(bindings.keys(Control::Thrust), &[KeyCode::KeyK]);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::KeyK);
        let snapshot = ControlSnapshot::capture(&KeyboardControls::new(&keys, &bindings));
        assert!(snapshot.is_held(Control::Thrust));
        assert!(snapshot.just_activated(Control::Thrust));
    }
}
