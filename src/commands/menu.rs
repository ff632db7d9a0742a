use clap::{Args, Subcommand};

use super::OutputFormat;
use tavola_core::{CatalogReader, MenuItem};

#[derive(Args)]
pub struct MenuCommand {
    #[command(subcommand)]
    pub command: MenuSubcommand,
}

#[derive(Subcommand)]
pub enum MenuSubcommand {
    /// List menu items
    List {
        /// Filter by category id
        #[arg(long)]
        category: Option<String>,

        /// Only featured items
        #[arg(long)]
        featured: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List categories in display order
    Categories,

    /// Show a menu item's details
    Show {
        /// Menu item id
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show customer testimonials
    Testimonials,
}

impl MenuCommand {
    pub async fn run(
        &self,
        reader: &mut CatalogReader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        reader.refresh().await?;

        match &self.command {
            MenuSubcommand::List {
                category,
                featured,
                format,
            } => {
                let items: Vec<&MenuItem> = reader
                    .menu()
                    .iter()
                    .filter(|m| category.as_ref().map_or(true, |c| &m.category == c))
                    .filter(|m| !featured || m.featured)
                    .collect();

                if items.is_empty() {
                    println!("No menu items found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&items)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<12}  {:<30}  {:>8}  CATEGORY", "ID", "NAME", "PRICE");
                        println!("{}", "-".repeat(66));
                        for item in &items {
                            let name = truncate_name(&item.name, 30);
                            println!(
                                "{:<12}  {:<30}  {:>8.2}  {}",
                                item.id, name, item.price, item.category
                            );
                        }
                        println!("\nTotal: {} item(s)", items.len());
                    }
                }
                Ok(())
            }

            MenuSubcommand::Categories => {
                let categories = reader.document().sorted_categories();
                if categories.is_empty() {
                    println!("No categories found");
                    return Ok(());
                }
                for category in categories {
                    match &category.description {
                        Some(desc) => println!("{:<12}  {} - {}", category.id, category.name, desc),
                        None => println!("{:<12}  {}", category.id, category.name),
                    }
                }
                Ok(())
            }

            MenuSubcommand::Show { id, format } => match reader.find_item(id) {
                Some(item) => {
                    match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(item)?);
                        }
                        OutputFormat::Text => {
                            println!("{}", item);
                            if !item.description.is_empty() {
                                println!("{}", item.description);
                            }
                            if let Some(options) = &item.options {
                                for option in options {
                                    println!("\n{}:", option.name);
                                    for choice in &option.choices {
                                        match choice.price {
                                            Some(p) if p > 0.0 => {
                                                println!("  {} (+{:.2})", choice.name, p)
                                            }
                                            _ => println!("  {}", choice.name),
                                        }
                                    }
                                }
                            }
                            if let Some(allergens) = &item.allergens {
                                println!("\nAllergens: {}", allergens.join(", "));
                            }
                            if let Some(dietary) = &item.dietary {
                                println!("Dietary: {}", dietary.join(", "));
                            }
                        }
                    }
                    Ok(())
                }
                None => Err(format!("Menu item not found: {}", id).into()),
            },

            MenuSubcommand::Testimonials => {
                let testimonials = reader.testimonials();
                if testimonials.is_empty() {
                    println!("No testimonials yet");
                    return Ok(());
                }
                for t in testimonials {
                    println!("{} ({}/5, {})", t.name, t.rating, t.date);
                    println!("  {}", t.comment);
                }
                Ok(())
            }
        }
    }
}

/// Truncate a display name to at most `max` characters, on character
/// boundaries, appending "..." when cut.
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
