//! innkeep hotel command

use clap::{Args, Subcommand};
use console::style;
use innkeep_adapter::JsonHotelRepository;
use innkeep_domain::{Hotel, HotelName, HotelRepository};
use shared::StoreConfig;

#[derive(Debug, Args)]
pub struct HotelCommand {
    #[command(subcommand)]
    pub command: HotelSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum HotelSubcommand {
    /// Add a hotel with every room available
    Create {
        name: String,
        location: String,
        rooms: u32,
    },
    /// Delete every hotel with this name
    Delete {
        name: String,
        /// Skip the confirmation when several hotels match
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the first hotel with this name
    Get { name: String },
    /// List all hotels
    List,
}

impl HotelCommand {
    pub fn run(&self, config: &StoreConfig) -> anyhow::Result<()> {
        let mut repo = JsonHotelRepository::from_config(config);

        match &self.command {
            HotelSubcommand::Create {
                name,
                location,
                rooms,
            } => {
                repo.create(HotelName::new(name.as_str()), location, *rooms)?;
                println!("{} Created hotel {}", style("✓").green(), style(name).bold());
            }
            HotelSubcommand::Delete { name, yes } => {
                let name = HotelName::new(name.as_str());
                let matches = repo.list_all()?.iter().filter(|h| h.is_named(&name)).count();
                if !super::confirm_delete(&format!("hotel '{}'", name), matches, *yes)? {
                    println!("Aborted");
                    return Ok(());
                }
                let removed = repo.delete(&name)?;
                println!("{} Deleted {} hotel(s) named {}", style("✓").green(), removed, name);
            }
            HotelSubcommand::Get { name } => match repo.get(&HotelName::new(name.as_str()))? {
                Some(hotel) => println!("{}", describe(&hotel)),
                None => println!("{}", style(format!("No hotel named {}", name)).yellow()),
            },
            HotelSubcommand::List => {
                let hotels = repo.list_all()?;
                if hotels.is_empty() {
                    println!("No hotels");
                }
                for hotel in &hotels {
                    println!("{}", describe(hotel));
                }
            }
        }
        Ok(())
    }
}

fn describe(hotel: &Hotel) -> String {
    format!(
        "{}  {}  {}/{} rooms available",
        style(hotel.name()).bold(),
        hotel.location(),
        hotel.available_rooms(),
        hotel.rooms()
    )
}
