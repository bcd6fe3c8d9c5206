/// Identifies a subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

/// A list of callbacks invoked synchronously, in registration order.
pub struct Signal<T> {
    next_id: u64,
    slots: Vec<(ConnectionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slots: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect<F>(&mut self, slot: F) -> ConnectionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Returns `false` when `id` was not connected.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    pub fn emit(&mut self, args: &T) {
        for (_, slot) in self.slots.iter_mut() {
            slot(args);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

/// Notifications emitted by a [`crate::slider::MultiSlider`].
#[derive(Debug, Default)]
pub struct SliderSignals {
    /// `(handle index, new value)`
    pub value_changed: Signal<(usize, i32)>,
    /// `(minimum, maximum)` after the change
    pub range_changed: Signal<(i32, i32)>,
    pub pressed: Signal<()>,
    pub released: Signal<()>,
}
