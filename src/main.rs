use clap::Parser;
use contact_form::{telemetry, ContactForm, FormClient, SubmitOutcome};

/// Submit a contact form to a static-site form endpoint.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
    /// Ten-digit mobile number (extended form only).
    #[arg(long)]
    mobile_number: Option<String>,
    /// Message subject (extended form only).
    #[arg(long)]
    subject: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    telemetry::init_subscriber("contact-form");

    let args = Args::parse();
    let config = contact_form::config::get_config();
    let client = FormClient::from_config(&config);
    let mut form = ContactForm::new(config.form.variant, client);

    let values = [
        ("name", Some(args.name)),
        ("mobileNumber", args.mobile_number),
        ("email", Some(args.email)),
        ("subject", args.subject),
        ("message", Some(args.message)),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            form.update(field, &value).map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    // 必填校验先于提交
    form.state().validate().map_err(|e| anyhow::anyhow!(e))?;

    form.submit().await;

    if let Some(line) = form.status_line() {
        println!("[{}] {}", line.class, line.message);
    }
    if form.outcome() == Some(SubmitOutcome::Error) {
        std::process::exit(1);
    }

    Ok(())
}
