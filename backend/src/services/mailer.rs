use crate::models::PersonLikeCount;
use crate::utils::MailConfig;
use anyhow::Result;
use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::future::Future;

/// Outbound notification transport. The SMTP implementation below is the
/// production one; tests substitute a recording implementation.
pub trait Mailer {
    fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: String,
    ) -> impl Future<Output = Result<()>> + Send;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let transport = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(Credentials::new(username.clone(), password.clone()))
                    .build()
            }
            // No credentials: plain SMTP to a local relay
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build(),
        };

        Ok(Self {
            transport,
            from: config.mail_from.parse()?,
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: String) -> Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)?;

        self.transport.send(email).await?;
        Ok(())
    }
}

pub fn report_subject(threshold: i64) -> String {
    format!("Alert: Popular Persons Detected ({threshold}+ Likes)")
}

/// The HTML report: alert banner, count sentence, one table row per
/// popular person, generated-at footer.
pub fn render_report_html(popular: &[PersonLikeCount], threshold: i64) -> String {
    let mut rows = String::new();
    for person in popular {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><strong>{}</strong></td></tr>\n",
            person.id, person.name, person.age, person.location, person.likes_count
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Popular Persons Alert</title></head>
<body>
<h1>Popular Persons Alert</h1>
<p><strong>Notification:</strong> The following persons have received more than {threshold} likes and may require attention.</p>
<p>Dear Admin,</p>
<p>This is an automated notification to inform you that <strong>{count}</strong> person(s) have been liked by more than {threshold} users.</p>
<table border="1" cellpadding="8" cellspacing="0">
<thead><tr><th>ID</th><th>Name</th><th>Age</th><th>Location</th><th>Likes Count</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<p>Please review these profiles to ensure they meet our platform standards.</p>
<p><small>This is an automated email from the Matchbook system.<br>Generated at: {generated_at}</small></p>
</body>
</html>
"#,
        count = popular.len(),
        generated_at = Utc::now().format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Sends the popularity report unless there is nothing to report.
/// Returns whether a mail was dispatched; a transport failure aborts the
/// job (the scan output already printed stays valid).
pub async fn notify_if_popular<M: Mailer>(
    popular: &[PersonLikeCount],
    recipient: &str,
    threshold: i64,
    mailer: &M,
) -> Result<bool> {
    if popular.is_empty() {
        return Ok(false);
    }

    let subject = report_subject(threshold);
    let html = render_report_html(popular, threshold);
    mailer.send(recipient, &subject, html).await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ADMIN_EMAIL;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, html_body: String) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), html_body));
            Ok(())
        }
    }

    struct FailingMailer;

    impl Mailer for FailingMailer {
        async fn send(&self, _to: &str, _subject: &str, _html_body: String) -> Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    fn popular_person(likes: i64) -> PersonLikeCount {
        PersonLikeCount {
            id: 1,
            name: "Ayu".to_string(),
            age: 27,
            location: "15 km".to_string(),
            likes_count: likes,
        }
    }

    #[tokio::test]
    async fn sends_report_to_admin() {
        let mailer = RecordingMailer::default();
        let popular = vec![popular_person(55)];

        let sent = notify_if_popular(&popular, DEFAULT_ADMIN_EMAIL, 50, &mailer)
            .await
            .unwrap();
        assert!(sent);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, DEFAULT_ADMIN_EMAIL);
        assert_eq!(subject, "Alert: Popular Persons Detected (50+ Likes)");
        assert!(body.contains("Ayu"));
        assert!(body.contains("<strong>55</strong>"));
        assert!(body.contains("<strong>1</strong> person(s)"));
    }

    #[tokio::test]
    async fn nothing_to_report_sends_nothing() {
        let mailer = RecordingMailer::default();

        let sent = notify_if_popular(&[], DEFAULT_ADMIN_EMAIL, 50, &mailer)
            .await
            .unwrap();
        assert!(!sent);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let popular = vec![popular_person(80)];

        let result = notify_if_popular(&popular, DEFAULT_ADMIN_EMAIL, 50, &FailingMailer).await;
        assert!(result.is_err());
    }

    #[test]
    fn subject_carries_threshold() {
        assert_eq!(
            report_subject(20),
            "Alert: Popular Persons Detected (20+ Likes)"
        );
    }
}
