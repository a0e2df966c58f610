use std::cell::Cell;
use std::rc::Rc;

/// Allows one in-flight request per user action.
///
/// Clones share the same flag, so the gate can live in the page state and
/// in the async task at once.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    busy: Rc<Cell<bool>>,
}

/// Held while a request runs; dropping it reopens the gate.
#[derive(Debug)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another request is in flight.
    pub fn try_begin(&self) -> Option<InFlight> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlight {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive() {
        let gate = RequestGate::new();
        let first = gate.try_begin();
        assert!(first.is_some());
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());
        assert!(gate.clone().try_begin().is_none());
        drop(first);
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }
}
