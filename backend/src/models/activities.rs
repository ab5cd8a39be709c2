use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// The two kinds of swipe action. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Like,
    Dislike,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Like => "like",
            ActionType::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ActionType::Like),
            "dislike" => Ok(ActionType::Dislike),
            _ => Err(()),
        }
    }
}

/// One immutable like/dislike event. `user_id` is None for guests that
/// never authenticated. There is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub user_id: Option<i64>,
    pub person_id: i64,
    pub action_type: String,
    pub action_at: DateTime<Utc>,
}

/// An activity joined with the person it targets, for the audit feeds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityWithPerson {
    pub activity_id: i64,
    pub person_id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub image_url: Option<String>,
    pub action_type: String,
    pub action_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_round_trips_through_str() {
        assert_eq!("like".parse::<ActionType>(), Ok(ActionType::Like));
        assert_eq!("dislike".parse::<ActionType>(), Ok(ActionType::Dislike));
        assert!("superlike".parse::<ActionType>().is_err());
        assert_eq!(ActionType::Like.to_string(), "like");
    }

    #[test]
    fn action_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActionType::Dislike).unwrap(),
            "\"dislike\""
        );
    }
}
