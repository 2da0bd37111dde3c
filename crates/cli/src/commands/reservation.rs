//! innkeep reservation command

use clap::{Args, Subcommand};
use console::style;
use innkeep_adapter::JsonReservationRepository;
use innkeep_domain::{CustomerName, HotelName, ReservationRepository};
use shared::StoreConfig;

#[derive(Debug, Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    pub command: ReservationSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ReservationSubcommand {
    /// Reserve a hotel for a customer
    Create { customer: String, hotel: String },
    /// Cancel every reservation of this customer at this hotel
    Cancel { customer: String, hotel: String },
    /// List reservations in stored order
    List {
        /// Only reservations of this customer
        #[arg(long)]
        customer: Option<String>,
        /// Only reservations at this hotel
        #[arg(long)]
        hotel: Option<String>,
    },
}

impl ReservationCommand {
    pub fn run(&self, config: &StoreConfig) -> anyhow::Result<()> {
        let mut repo = JsonReservationRepository::from_config(config);

        match &self.command {
            ReservationSubcommand::Create { customer, hotel } => {
                repo.create(
                    CustomerName::new(customer.as_str()),
                    HotelName::new(hotel.as_str()),
                )?;
                println!(
                    "{} Reserved {} for {}",
                    style("✓").green(),
                    style(hotel).bold(),
                    style(customer).bold()
                );
            }
            ReservationSubcommand::Cancel { customer, hotel } => {
                let removed = repo.cancel(
                    &CustomerName::new(customer.as_str()),
                    &HotelName::new(hotel.as_str()),
                )?;
                if removed == 0 {
                    println!(
                        "{}",
                        style(format!("No reservation for {} at {}", customer, hotel)).yellow()
                    );
                } else {
                    println!("{} Canceled {} reservation(s)", style("✓").green(), removed);
                }
            }
            ReservationSubcommand::List { customer, hotel } => {
                let reservations = match (customer, hotel) {
                    (Some(customer), _) => {
                        repo.find_by_customer(&CustomerName::new(customer.as_str()))?
                    }
                    (None, Some(hotel)) => repo.find_by_hotel(&HotelName::new(hotel.as_str()))?,
                    (None, None) => repo.list_all()?,
                };
                let hotel_filter = hotel.as_deref();
                let reservations: Vec<_> = reservations
                    .into_iter()
                    .filter(|r| hotel_filter.map_or(true, |h| r.hotel().as_str() == h))
                    .collect();

                if reservations.is_empty() {
                    println!("No reservations");
                }
                for reservation in &reservations {
                    println!("{}", reservation);
                }
            }
        }
        Ok(())
    }
}
