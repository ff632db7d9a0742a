use clap::Args;

use super::OutputFormat;
use tavola_core::CatalogReader;

#[derive(Args)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl InfoCommand {
    pub async fn run(
        &self,
        reader: &mut CatalogReader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        reader.refresh().await?;

        if let OutputFormat::Json = self.format {
            println!("{}", serde_json::to_string_pretty(reader.document())?);
            return Ok(());
        }

        let Some(config) = reader.config() else {
            println!("No restaurant profile published yet");
            return Ok(());
        };

        println!("{}", config.name);
        if !config.description.is_empty() {
            println!("{}", config.description);
        }
        println!();
        println!("Address: {}", config.address);
        println!("Phone:   {}", config.phone);
        println!("Email:   {}", config.email);

        if !config.business_hours.is_empty() {
            println!("\nHours:");
            for hours in &config.business_hours {
                if hours.is_closed {
                    println!("  {:<10} closed", hours.day);
                } else {
                    println!("  {:<10} {} - {}", hours.day, hours.open, hours.close);
                }
            }
        }

        if !config.special_offers.is_empty() {
            println!("\nSpecial offers:");
            for offer in &config.special_offers {
                print!("  {} - {}", offer.title, offer.description);
                if let Some(until) = &offer.valid_until {
                    print!(" (until {})", until);
                }
                println!();
            }
        }

        if let Some(story) = reader.story() {
            println!("\n{}", story);
        }

        Ok(())
    }
}
