//! View-state machine for the polling viewer
//!
//! Three screens, click-driven transitions, and a timer that refetches
//! whichever screen is showing. The modal keeps its parent party view so
//! closing it lands back where the user was.

use crate::domain::value_objects::{AdventureId, CharacterId};

/// Which screen the viewer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The active-adventure board
    AdventureList,
    /// One adventure's party roster
    PartyView { adventure_id: AdventureId },
    /// One party member's full sheet, over the party view
    CharacterModal {
        adventure_id: AdventureId,
        character_id: CharacterId,
    },
}

impl ViewState {
    /// Open an adventure's party view
    pub fn view_party(self, adventure_id: AdventureId) -> Self {
        ViewState::PartyView { adventure_id }
    }

    /// Open a character modal; only meaningful over a party view
    pub fn view_character(self, character_id: CharacterId) -> Self {
        match self {
            ViewState::PartyView { adventure_id }
            | ViewState::CharacterModal { adventure_id, .. } => ViewState::CharacterModal {
                adventure_id,
                character_id,
            },
            ViewState::AdventureList => ViewState::AdventureList,
        }
    }

    /// Close the character modal, back to its party view
    pub fn close_modal(self) -> Self {
        match self {
            ViewState::CharacterModal { adventure_id, .. } => {
                ViewState::PartyView { adventure_id }
            }
            other => other,
        }
    }

    /// Back out one level toward the adventure list
    pub fn back(self) -> Self {
        match self {
            ViewState::AdventureList => ViewState::AdventureList,
            ViewState::PartyView { .. } => ViewState::AdventureList,
            ViewState::CharacterModal { adventure_id, .. } => {
                ViewState::PartyView { adventure_id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_to_party_to_modal_and_back() {
        let list = ViewState::AdventureList;
        let party = list.view_party(AdventureId::new(1));
        assert_eq!(
            party,
            ViewState::PartyView {
                adventure_id: AdventureId::new(1)
            }
        );

        let modal = party.view_character(CharacterId::new(7));
        assert_eq!(
            modal,
            ViewState::CharacterModal {
                adventure_id: AdventureId::new(1),
                character_id: CharacterId::new(7)
            }
        );

        assert_eq!(modal.close_modal(), party);
        assert_eq!(party.back(), ViewState::AdventureList);
        assert_eq!(modal.back(), party);
    }

    #[test]
    fn test_character_click_on_list_is_ignored() {
        let list = ViewState::AdventureList;
        assert_eq!(list.view_character(CharacterId::new(7)), list);
    }

    #[test]
    fn test_modal_switches_between_characters() {
        let modal = ViewState::AdventureList
            .view_party(AdventureId::new(1))
            .view_character(CharacterId::new(7));
        let other = modal.view_character(CharacterId::new(8));
        assert_eq!(
            other,
            ViewState::CharacterModal {
                adventure_id: AdventureId::new(1),
                character_id: CharacterId::new(8)
            }
        );
    }

    #[test]
    fn test_back_and_close_are_stable_on_list() {
        assert_eq!(ViewState::AdventureList.back(), ViewState::AdventureList);
        assert_eq!(
            ViewState::AdventureList.close_modal(),
            ViewState::AdventureList
        );
    }
}
