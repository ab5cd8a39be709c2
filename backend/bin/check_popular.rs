use anyhow::Result;
use clap::{Arg, Command};
use matchbook::constants::{DEFAULT_ADMIN_EMAIL, DEFAULT_POPULARITY_THRESHOLD};
use matchbook::db::{get_db_pool, DatabaseConfig};
use matchbook::services::mailer::{notify_if_popular, SmtpMailer};
use matchbook::services::popularity::{find_popular, render_table};
use matchbook::MailConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let matches = Command::new("check-popular")
        .about("Check for persons exceeding the like threshold and notify the admin")
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .help("The minimum number of likes to be considered popular")
                .value_parser(clap::value_parser!(i64))
                .default_value("50"),
        )
        .arg(
            Arg::new("admin-email")
                .long("admin-email")
                .help("The admin email to send notifications to")
                .default_value(DEFAULT_ADMIN_EMAIL),
        )
        .get_matches();

    let threshold = *matches
        .get_one::<i64>("threshold")
        .unwrap_or(&DEFAULT_POPULARITY_THRESHOLD);
    let admin_email = matches.get_one::<String>("admin-email").unwrap().clone();

    let db_config = DatabaseConfig::from_env()?;
    let pool = get_db_pool(&db_config).await?;

    println!("Checking for persons with more than {threshold} likes...");

    let popular = find_popular(&pool, threshold).await?;

    if popular.is_empty() {
        println!("No persons found with more than {threshold} likes.");
        return Ok(());
    }

    println!("Found {} popular person(s).", popular.len());
    print!("{}", render_table(&popular));

    // The scan output above stays valid even if dispatch fails; only the
    // email step can abort the job.
    let mail_config = MailConfig::from_env()?;
    let mailer = SmtpMailer::from_config(&mail_config)?;

    match notify_if_popular(&popular, &admin_email, threshold, &mailer).await {
        Ok(_) => {
            println!("Email notification sent to {admin_email}");
            println!("Popular persons check completed successfully.");
            Ok(())
        }
        Err(err) => {
            eprintln!("Failed to send email: {err}");
            Err(err)
        }
    }
}
