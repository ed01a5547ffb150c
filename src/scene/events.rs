//! Pending input events, polled by the game loop

use std::collections::VecDeque;

/// Input delivered by the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseMoved { x: f32, y: f32 },
    MouseClicked { x: f32, y: f32 },
}

/// Event filter for [`EventQueue::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Any mouse event
    Mouse,
    MouseMoved,
    MouseClicked,
}

impl InputEvent {
    pub fn matches(&self, class: EventClass) -> bool {
        match (class, self) {
            (EventClass::Mouse, _) => true,
            (EventClass::MouseMoved, InputEvent::MouseMoved { .. }) => true,
            (EventClass::MouseClicked, InputEvent::MouseClicked { .. }) => true,
            _ => false,
        }
    }
}

/// FIFO of input events; every read is non-blocking
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the next pending event of `class`, if any
    pub fn poll(&mut self, class: EventClass) -> Option<InputEvent> {
        let index = self.pending.iter().position(|e| e.matches(class))?;
        self.pending.remove(index)
    }

    /// Drain every pending mouse event and return the last cursor position.
    /// Clicks drained here are dropped.
    pub fn latest_mouse_move(&mut self) -> Option<(f32, f32)> {
        let mut latest = None;
        while let Some(event) = self.poll(EventClass::Mouse) {
            if let InputEvent::MouseMoved { x, y } = event {
                latest = Some((x, y));
            }
        }
        latest
    }

    /// Click gate: consume events up to and including the first click.
    /// Returns false, with the queue emptied, when no click is pending.
    pub fn take_click(&mut self) -> bool {
        while let Some(event) = self.pending.pop_front() {
            if event.matches(EventClass::MouseClicked) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_filters_by_class() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        queue.push(InputEvent::MouseClicked { x: 2.0, y: 2.0 });

        assert_eq!(
            queue.poll(EventClass::MouseClicked),
            Some(InputEvent::MouseClicked { x: 2.0, y: 2.0 })
        );
        assert_eq!(queue.poll(EventClass::MouseClicked), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_latest_mouse_move_coalesces() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.latest_mouse_move(), None);

        queue.push(InputEvent::MouseMoved { x: 10.0, y: 5.0 });
        queue.push(InputEvent::MouseClicked { x: 0.0, y: 0.0 });
        queue.push(InputEvent::MouseMoved { x: 30.0, y: 6.0 });
        assert_eq!(queue.latest_mouse_move(), Some((30.0, 6.0)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_click_discards_until_click() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        assert!(!queue.take_click());
        assert!(queue.is_empty());

        queue.push(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        queue.push(InputEvent::MouseClicked { x: 0.0, y: 0.0 });
        queue.push(InputEvent::MouseMoved { x: 2.0, y: 2.0 });
        assert!(queue.take_click());
        assert_eq!(queue.len(), 1);
    }
}
