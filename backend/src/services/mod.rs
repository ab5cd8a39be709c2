pub mod mailer;
pub mod popularity;
