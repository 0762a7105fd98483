//! The capability table: external controls addressable by name.
//!
//! The capture sequence must disable "a configured list of control
//! components" on the target and its viewpoint.  Rather than looking
//! components up reflectively at capture time, scenes register a toggle
//! handle per symbolic name once, at configuration time; the sequence then
//! disables by name and the table remembers what it touched so an external
//! reset can restore exactly that set.
//!
//! Names with no registered capability are silently ignored — a scene
//! without a camera-look control is a valid scene.

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// An enable/disable handle for one external control.
///
/// Implemented for free by any `FnMut(bool)` closure, which is the common
/// registration style:
///
/// ```rust,ignore
/// table.register("player-move", move |on| input.set_movement_enabled(on));
/// ```
pub trait ControlToggle: Send {
    fn set_enabled(&mut self, enabled: bool);
}

impl<F: FnMut(bool) + Send> ControlToggle for F {
    fn set_enabled(&mut self, enabled: bool) {
        self(enabled)
    }
}

/// Name → toggle registry with disable/restore bookkeeping.
#[derive(Default)]
pub struct CapabilityTable {
    entries: Map<String, Box<dyn ControlToggle>>,
    /// Names currently disabled, in disable order.  Drained by `restore`.
    disabled: Vec<String>,
}

impl CapabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the toggle for `name`.
    pub fn register(&mut self, name: impl Into<String>, toggle: impl ControlToggle + 'static) {
        self.entries.insert(name.into(), Box::new(toggle));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if `name` is currently disabled.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|n| n == name)
    }

    /// Disable every matching capability in `names`.  Unmatched names and
    /// already-disabled capabilities are skipped silently.
    pub fn disable(&mut self, names: &[String]) {
        for name in names {
            if self.is_disabled(name) {
                continue;
            }
            if let Some(toggle) = self.entries.get_mut(name) {
                toggle.set_enabled(false);
                self.disabled.push(name.clone());
            }
        }
    }

    /// Re-enable everything [`disable`](Self::disable) touched.
    pub fn restore(&mut self) {
        for name in self.disabled.drain(..) {
            if let Some(toggle) = self.entries.get_mut(&name) {
                toggle.set_enabled(true);
            }
        }
    }
}
