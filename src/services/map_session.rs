use crate::error::MapError;

/// Lifecycle of the map widget.
///
/// `AwaitingToken -> Initializing -> Ready`, with any initialization failure
/// dropping back to `AwaitingToken` so the token form is shown again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapPhase {
    AwaitingToken,
    Initializing,
    Ready,
}

impl MapPhase {
    /// Validates a submitted token and returns it trimmed. Whitespace-only
    /// input is rejected and the phase stays where it was.
    pub fn submit_token(self, token: &str) -> Result<(MapPhase, String), MapError> {
        match self {
            MapPhase::Initializing => Err(MapError::AlreadyInitializing),
            MapPhase::Ready => Err(MapError::AlreadyReady),
            MapPhase::AwaitingToken => {
                let token = token.trim();
                if token.is_empty() {
                    return Err(MapError::EmptyToken);
                }
                Ok((MapPhase::Initializing, token.to_string()))
            }
        }
    }

    pub fn resolve<T>(self, outcome: &Result<T, MapError>) -> MapPhase {
        match (self, outcome) {
            (MapPhase::Initializing, Ok(_)) => MapPhase::Ready,
            (MapPhase::Initializing, Err(_)) => MapPhase::AwaitingToken,
            (phase, _) => phase,
        }
    }

    pub fn shows_token_form(&self) -> bool {
        !matches!(self, MapPhase::Ready)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, MapPhase::Initializing)
    }
}

/// Holds the live map for a mounted view.
///
/// Initialization is async, so the view can unmount before the map exists.
/// Once released, the slot refuses new maps and hands them straight back to
/// be dropped.
#[derive(Debug)]
pub struct MapSlot<T> {
    map: Option<T>,
    mounted: bool,
}

impl<T> Default for MapSlot<T> {
    fn default() -> Self {
        Self {
            map: None,
            mounted: true,
        }
    }
}

impl<T> MapSlot<T> {
    /// Stores `map` while mounted. After release the map is returned so the
    /// caller drops it.
    pub fn store(&mut self, map: T) -> Result<(), T> {
        if self.mounted {
            self.map = Some(map);
            Ok(())
        } else {
            Err(map)
        }
    }

    /// Marks the view as gone and takes whatever map it held.
    pub fn release(&mut self) -> Option<T> {
        self.mounted = false;
        self.map.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn get(&self) -> Option<&T> {
        self.map.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn empty_or_blank_token_never_leaves_awaiting() {
        for token in ["", " ", "\t\n  "] {
            assert_eq!(
                MapPhase::AwaitingToken.submit_token(token),
                Err(MapError::EmptyToken)
            );
        }
    }

    #[test]
    fn token_is_trimmed_and_starts_initializing() {
        let (phase, token) = MapPhase::AwaitingToken.submit_token("  pk.abc  ").unwrap();
        assert_eq!(phase, MapPhase::Initializing);
        assert_eq!(token, "pk.abc");
        assert!(phase.is_busy());
        assert!(phase.shows_token_form());
    }

    #[test]
    fn resubmission_is_refused_outside_awaiting() {
        assert_eq!(
            MapPhase::Initializing.submit_token("pk.abc"),
            Err(MapError::AlreadyInitializing)
        );
        assert_eq!(
            MapPhase::Ready.submit_token("pk.abc"),
            Err(MapError::AlreadyReady)
        );
    }

    #[test]
    fn success_reaches_ready() {
        let phase = MapPhase::Initializing.resolve::<()>(&Ok(()));
        assert_eq!(phase, MapPhase::Ready);
        assert!(!phase.shows_token_form());
    }

    #[test]
    fn failure_reverts_to_awaiting_token() {
        let outcome: Result<(), MapError> = Err(MapError::LibraryLoad("network".to_string()));
        let phase = MapPhase::Initializing.resolve(&outcome);
        assert_eq!(phase, MapPhase::AwaitingToken);

        let (retry, _) = phase.submit_token("pk.retry").unwrap();
        assert_eq!(retry, MapPhase::Initializing);
    }

    #[test]
    fn stray_outcomes_do_not_move_other_phases() {
        let failed: Result<(), MapError> = Err(MapError::MissingContainer);
        assert_eq!(MapPhase::AwaitingToken.resolve::<()>(&Ok(())), MapPhase::AwaitingToken);
        assert_eq!(MapPhase::Ready.resolve(&failed), MapPhase::Ready);
    }

    #[test]
    fn slot_keeps_map_while_mounted() {
        let removed = Rc::new(Cell::new(0));
        let mut slot = MapSlot::default();
        assert!(slot.store(Tracked(removed.clone())).is_ok());
        assert!(slot.get().is_some());
        assert_eq!(removed.get(), 0);

        drop(slot.release());
        assert_eq!(removed.get(), 1);
        assert!(!slot.is_mounted());
    }

    #[test]
    fn map_finished_after_unmount_is_dropped() {
        let removed = Rc::new(Cell::new(0));
        let mut slot: MapSlot<Tracked> = MapSlot::default();
        assert!(slot.release().is_none());

        let rejected = slot.store(Tracked(removed.clone()));
        assert!(rejected.is_err());
        drop(rejected);
        assert_eq!(removed.get(), 1);
        assert!(slot.get().is_none());
    }
}
