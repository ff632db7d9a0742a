use clap::Args;

use tavola_core::models::Reservation;
use tavola_core::{DocumentClient, RESERVATIONS_COLLECTION};

#[derive(Args)]
pub struct ReserveCommand {
    /// Name for the reservation
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Time (HH:MM)
    #[arg(long)]
    pub time: String,

    /// Party size
    #[arg(long, default_value = "2")]
    pub guests: u32,

    /// Special requests
    #[arg(long)]
    pub requests: Option<String>,
}

impl ReserveCommand {
    pub async fn run(&self, client: &DocumentClient) -> Result<(), Box<dyn std::error::Error>> {
        let mut reservation = Reservation::new(
            self.name.trim(),
            self.email.trim(),
            self.phone.trim(),
            self.date.trim(),
            self.time.trim(),
            self.guests,
        );
        if let Some(requests) = &self.requests {
            reservation = reservation.with_special_requests(requests.trim());
        }

        let errors = reservation.validate();
        if !errors.is_empty() {
            for (field, message) in &errors {
                eprintln!("{}: {}", field, message);
            }
            return Err("Reservation details are incomplete".into());
        }

        let id = client
            .add_document(RESERVATIONS_COLLECTION, &reservation)
            .await?;
        println!(
            "Reservation requested for {} guest(s) on {} at {} (ref {})",
            reservation.guests, reservation.date, reservation.time, id
        );
        println!("We'll confirm by email shortly.");
        Ok(())
    }
}
