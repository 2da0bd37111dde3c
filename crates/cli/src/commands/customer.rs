//! innkeep customer command

use clap::{Args, Subcommand};
use console::style;
use innkeep_adapter::JsonCustomerRepository;
use innkeep_domain::{CustomerName, CustomerRepository};
use shared::StoreConfig;

#[derive(Debug, Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerSubcommand {
    /// Add a customer
    Create { name: String, email: String },
    /// Delete every customer with this name
    Delete {
        name: String,
        /// Skip the confirmation when several customers match
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the first customer with this name
    Get { name: String },
    /// List all customers
    List,
}

impl CustomerCommand {
    pub fn run(&self, config: &StoreConfig) -> anyhow::Result<()> {
        let mut repo = JsonCustomerRepository::from_config(config);

        match &self.command {
            CustomerSubcommand::Create { name, email } => {
                repo.create(CustomerName::new(name.as_str()), email)?;
                println!("{} Created customer {}", style("✓").green(), style(name).bold());
            }
            CustomerSubcommand::Delete { name, yes } => {
                let name = CustomerName::new(name.as_str());
                let matches = repo.list_all()?.iter().filter(|c| c.is_named(&name)).count();
                if !super::confirm_delete(&format!("customer '{}'", name), matches, *yes)? {
                    println!("Aborted");
                    return Ok(());
                }
                let removed = repo.delete(&name)?;
                println!(
                    "{} Deleted {} customer(s) named {}",
                    style("✓").green(),
                    removed,
                    name
                );
            }
            CustomerSubcommand::Get { name } => {
                match repo.get(&CustomerName::new(name.as_str()))? {
                    Some(customer) => {
                        println!("{}  <{}>", style(customer.name()).bold(), customer.email())
                    }
                    None => println!("{}", style(format!("No customer named {}", name)).yellow()),
                }
            }
            CustomerSubcommand::List => {
                let customers = repo.list_all()?;
                if customers.is_empty() {
                    println!("No customers");
                }
                for customer in &customers {
                    println!("{}  <{}>", style(customer.name()).bold(), customer.email());
                }
            }
        }
        Ok(())
    }
}
