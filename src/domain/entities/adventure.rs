//! Adventure entity - A grouped session with a participant roster

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{AdventureId, ChatId};

/// An adventure as listed on the board
///
/// `participant_count` is derived from the participants join table at query
/// time; it is not stored on the adventure row itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adventure {
    pub id: AdventureId,
    /// Chat the bot runs this adventure in
    pub chat_id: ChatId,
    /// Status as recorded by the bot; listings only ever surface `active`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub participant_count: i64,
}
