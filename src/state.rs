use std::rc::Rc;

use yew::prelude::*;

use crate::models::Trip;

pub enum JournalAction {
    ViewDetails(String),
    CloseModal,
}

/// Page-level view state: the trip list plus which trip the modal shows.
/// Closing the modal keeps `selected_id`; it is only replaced on the next open.
#[derive(Clone, Debug, PartialEq)]
pub struct JournalState {
    pub trips: Rc<Vec<Trip>>,
    pub selected_id: Option<String>,
    pub modal_open: bool,
}

impl JournalState {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            trips: Rc::new(trips),
            selected_id: None,
            modal_open: false,
        }
    }

    pub fn find_trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn selected_trip(&self) -> Option<&Trip> {
        self.selected_id.as_deref().and_then(|id| self.find_trip(id))
    }
}

impl Reducible for JournalState {
    type Action = JournalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            JournalAction::ViewDetails(id) => {
                if self.find_trip(&id).is_none() {
                    log::debug!("no trip with id {}", id);
                    return self;
                }
                Rc::new(Self {
                    trips: self.trips.clone(),
                    selected_id: Some(id),
                    modal_open: true,
                })
            }
            JournalAction::CloseModal => {
                if !self.modal_open {
                    return self;
                }
                Rc::new(Self {
                    trips: self.trips.clone(),
                    selected_id: self.selected_id.clone(),
                    modal_open: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock::load_trips;

    fn initial() -> Rc<JournalState> {
        Rc::new(JournalState::new(load_trips()))
    }

    #[test]
    fn starts_closed_with_nothing_selected() {
        let state = initial();
        assert!(!state.modal_open);
        assert!(state.selected_trip().is_none());
    }

    #[test]
    fn view_details_opens_the_matching_trip() {
        let state = initial().reduce(JournalAction::ViewDetails("2".to_string()));
        assert!(state.modal_open);
        let trip = state.selected_trip().unwrap();
        assert_eq!(trip.destination, "Tokyo");
        assert_eq!(trip.country, "Japan");
    }

    #[test]
    fn unknown_id_leaves_the_modal_closed() {
        let before = initial();
        let after = before.clone().reduce(JournalAction::ViewDetails("42".to_string()));
        assert!(Rc::ptr_eq(&before, &after));
        assert!(!after.modal_open);
        assert!(after.selected_id.is_none());
    }

    #[test]
    fn close_keeps_the_stale_selection() {
        let state = initial()
            .reduce(JournalAction::ViewDetails("1".to_string()))
            .reduce(JournalAction::CloseModal);
        assert!(!state.modal_open);
        assert_eq!(state.selected_id.as_deref(), Some("1"));

        let reopened = state.reduce(JournalAction::ViewDetails("3".to_string()));
        assert!(reopened.modal_open);
        assert_eq!(reopened.selected_trip().unwrap().destination, "Santorini");
    }

    #[test]
    fn unknown_id_after_close_does_not_reopen() {
        let state = initial()
            .reduce(JournalAction::ViewDetails("1".to_string()))
            .reduce(JournalAction::CloseModal)
            .reduce(JournalAction::ViewDetails("missing".to_string()));
        assert!(!state.modal_open);
        assert_eq!(state.selected_id.as_deref(), Some("1"));
    }
}
