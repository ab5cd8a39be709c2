pub mod activities;
pub mod people;
pub mod users;

pub use activities::{ActionType, Activity, ActivityWithPerson};
pub use people::{NewPerson, Person, PersonLikeCount, PersonWithCounts};
pub use users::User;
