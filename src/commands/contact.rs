use clap::Args;

use tavola_core::models::ContactMessage;
use tavola_core::{DocumentClient, MESSAGES_COLLECTION};

#[derive(Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email
    #[arg(long)]
    pub email: String,

    /// Message subject
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body
    #[arg(long)]
    pub message: String,
}

impl ContactCommand {
    pub async fn run(&self, client: &DocumentClient) -> Result<(), Box<dyn std::error::Error>> {
        let message = ContactMessage::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        );

        let errors = message.validate();
        if !errors.is_empty() {
            for (field, text) in &errors {
                eprintln!("{}: {}", field, text);
            }
            return Err("Message details are incomplete".into());
        }

        let id = client.add_document(MESSAGES_COLLECTION, &message).await?;
        println!("Message sent (ref {}). Thanks for reaching out!", id);
        Ok(())
    }
}
