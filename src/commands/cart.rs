use clap::{Args, Subcommand};
use std::collections::BTreeMap;

use super::OutputFormat;
use tavola_core::{CartItem, CartStore, CatalogReader};

#[derive(Args)]
pub struct CartCommand {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Subcommand)]
pub enum CartSubcommand {
    /// Add a menu item to the cart (replaces an existing line with the same id)
    Add {
        /// Menu item id
        item_id: String,

        /// Number of units
        #[arg(long, short, default_value = "1")]
        quantity: u32,

        /// Option selection as Name=Choice (can be repeated)
        #[arg(long = "option", value_name = "NAME=CHOICE")]
        options: Vec<String>,
    },

    /// Show the cart
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change the quantity of a line
    Update {
        /// Menu item id
        item_id: String,

        /// New quantity (must be at least 1)
        quantity: u32,
    },

    /// Remove a line
    Remove {
        /// Menu item id
        item_id: String,
    },

    /// Empty the cart
    Clear,
}

impl CartCommand {
    pub async fn run(
        &self,
        cart: &mut CartStore,
        reader: &mut CatalogReader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            CartSubcommand::Add {
                item_id,
                quantity,
                options,
            } => {
                if *quantity < 1 {
                    return Err("Quantity must be at least 1".into());
                }

                let selected = parse_options(options)?;

                // Resolve the item and its option pricing from the catalog
                reader.refresh().await?;
                let item = reader
                    .find_item(item_id)
                    .ok_or_else(|| format!("Menu item not found: {}", item_id))?;

                if !item.selection_is_valid(&selected) {
                    return Err(format!(
                        "Invalid option selection for {}; see `menu show {}`",
                        item.name, item_id
                    )
                    .into());
                }

                let unit_price = item.unit_price(&selected);
                let mut line = CartItem::new(&item.id, &item.name, unit_price, *quantity)
                    .with_options(selected);
                if !item.image.is_empty() {
                    line = line.with_image(&item.image);
                }

                cart.add_item(line);
                println!(
                    "Added {} x{} ({} item(s) in cart, subtotal {:.2})",
                    item.name,
                    quantity,
                    cart.total_items(),
                    cart.subtotal()
                );
                Ok(())
            }

            CartSubcommand::Show { format } => {
                if cart.is_empty() {
                    println!("Your cart is empty");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(cart.items())?);
                    }
                    OutputFormat::Text => {
                        for item in cart.items() {
                            println!("{:<12}  {}", item.id, item);
                        }
                        println!(
                            "\n{} item(s), subtotal {:.2}",
                            cart.total_items(),
                            cart.subtotal()
                        );
                    }
                }
                Ok(())
            }

            CartSubcommand::Update { item_id, quantity } => {
                if *quantity < 1 {
                    return Err("Quantity must be at least 1".into());
                }
                if cart.find(item_id).is_none() {
                    return Err(format!("No cart line with id {}", item_id).into());
                }
                cart.update_quantity(item_id, *quantity);
                println!("Updated {} to x{}", item_id, quantity);
                Ok(())
            }

            CartSubcommand::Remove { item_id } => {
                if cart.find(item_id).is_none() {
                    return Err(format!("No cart line with id {}", item_id).into());
                }
                cart.remove_item(item_id);
                println!("Removed {}", item_id);
                Ok(())
            }

            CartSubcommand::Clear => {
                cart.clear();
                println!("Cart cleared");
                Ok(())
            }
        }
    }
}

/// Parse repeated `Name=Choice` flags into a selection map.
fn parse_options(raw: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut selected = BTreeMap::new();
    for entry in raw {
        let Some((name, choice)) = entry.split_once('=') else {
            return Err(format!("Invalid option '{}', expected NAME=CHOICE", entry));
        };
        selected.insert(name.trim().to_string(), choice.trim().to_string());
    }
    Ok(selected)
}
