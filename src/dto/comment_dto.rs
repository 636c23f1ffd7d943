use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Comment;
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub service_ticket_id: Option<i64>,
    pub mechanic_id: Option<i64>,
    pub date_created: NaiveDate,
    #[validate(custom = "validate_not_blank", length(max = 2000))]
    pub content: String,
}

impl CommentRequest {
    pub fn into_entity(self) -> Comment {
        Comment {
            id: 0,
            ticket_id: self.service_ticket_id,
            mechanic_id: self.mechanic_id,
            date_created: self.date_created,
            content: self.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub service_ticket_id: Option<i64>,
    pub mechanic_id: Option<i64>,
    pub date_created: NaiveDate,
    pub content: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            service_ticket_id: comment.ticket_id,
            mechanic_id: comment.mechanic_id,
            date_created: comment.date_created,
            content: comment.content,
        }
    }
}
