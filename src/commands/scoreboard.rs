//! Scoreboard Commands

use super::{post_json, ApiError};
use crate::config::Endpoint;
use crate::editing::RenameScoreboardPayload;

pub async fn edit_scoreboard(payload: &RenameScoreboardPayload) -> Result<(), ApiError> {
    post_json(Endpoint::EditScoreboard, payload).await?;
    Ok(())
}
