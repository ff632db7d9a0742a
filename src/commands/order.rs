use clap::{Args, Subcommand, ValueEnum};

use super::OutputFormat;
use tavola_core::{CartStore, Order, OrderBook, OrderDetails, PaymentMethod};

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum PaymentMethodArg {
    #[default]
    Cash,
    Card,
    Online,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(arg: PaymentMethodArg) -> Self {
        match arg {
            PaymentMethodArg::Cash => PaymentMethod::Cash,
            PaymentMethodArg::Card => PaymentMethod::Card,
            PaymentMethodArg::Online => PaymentMethod::Online,
        }
    }
}

#[derive(Args)]
pub struct OrderCommand {
    #[command(subcommand)]
    pub command: OrderSubcommand,
}

#[derive(Subcommand)]
pub enum OrderSubcommand {
    /// Place an order from the current cart
    Place {
        /// Customer name
        #[arg(long)]
        name: Option<String>,

        /// Customer email
        #[arg(long)]
        email: Option<String>,

        /// Customer phone number
        #[arg(long)]
        phone: Option<String>,

        /// Delivery address
        #[arg(long)]
        address: Option<String>,

        /// Table number for dine-in
        #[arg(long)]
        table: Option<String>,

        /// Special instructions for the kitchen
        #[arg(long)]
        instructions: Option<String>,

        /// Payment method
        #[arg(long, value_enum, default_value = "cash")]
        payment: PaymentMethodArg,
    },

    /// List placed orders, most recent first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show an order confirmation
    Show {
        /// Order id; omit for a generic confirmation
        id: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the order currently in flight, if any
    Current,

    /// Cancel an order
    Cancel {
        /// Order id
        id: String,
    },
}

impl OrderCommand {
    pub fn run(
        &self,
        orders: &mut OrderBook,
        cart: &mut CartStore,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            OrderSubcommand::Place {
                name,
                email,
                phone,
                address,
                table,
                instructions,
                payment,
            } => {
                let details = OrderDetails {
                    customer_name: name.clone(),
                    customer_email: email.clone(),
                    customer_phone: phone.clone(),
                    delivery_address: address.clone(),
                    table_number: table.clone(),
                    special_instructions: instructions.clone(),
                    payment_method: Some((*payment).into()),
                };

                let errors = details.validate();
                if !errors.is_empty() {
                    for (field, message) in &errors {
                        eprintln!("{}: {}", field, message);
                    }
                    return Err("Order details are incomplete".into());
                }

                let order_id = orders.place_order(cart, &details)?;
                println!("Order placed: {}", order_id);
                if let Some(order) = orders.find(&order_id) {
                    println!("Total (incl. 8% tax): {:.2}", order.total);
                    println!("Status: {}", order.status);
                }
                Ok(())
            }

            OrderSubcommand::List { format } => {
                if orders.orders().is_empty() {
                    println!("No orders yet");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(orders.orders())?);
                    }
                    OutputFormat::Text => {
                        println!("{:<40}  {:<10}  {:>8}  PLACED", "ID", "STATUS", "TOTAL");
                        println!("{}", "-".repeat(80));
                        for order in orders.orders() {
                            println!(
                                "{:<40}  {:<10}  {:>8.2}  {}",
                                order.id,
                                order.status.to_string(),
                                order.total,
                                order.created_at.format("%Y-%m-%d %H:%M")
                            );
                        }
                        println!("\nTotal: {} order(s)", orders.orders().len());
                    }
                }
                Ok(())
            }

            OrderSubcommand::Show { id, format } => {
                // No id on the confirmation view means a generic success
                let Some(id) = id else {
                    println!("Thank you! Your order has been received.");
                    return Ok(());
                };

                match orders.find(id) {
                    Some(order) => {
                        match format {
                            OutputFormat::Json => {
                                println!("{}", serde_json::to_string_pretty(order)?);
                            }
                            OutputFormat::Text => print_order(order),
                        }
                        Ok(())
                    }
                    None => Err(format!("Order not found: {}", id).into()),
                }
            }

            OrderSubcommand::Current => {
                match orders.current_order() {
                    Some(order) => print_order(order),
                    None => println!("No order currently in flight"),
                }
                Ok(())
            }

            OrderSubcommand::Cancel { id } => {
                if orders.find(id).is_none() {
                    return Err(format!("Order not found: {}", id).into());
                }
                orders.cancel_order(id)?;
                println!("Order {} cancelled", id);
                Ok(())
            }
        }
    }
}

fn print_order(order: &Order) {
    println!("Order {}", order.id);
    println!("Placed: {}", order.created_at.format("%Y-%m-%d %H:%M"));
    println!("Status: {}", order.status);
    println!();
    for item in &order.items {
        println!("  {}", item);
    }
    println!("\nTotal (incl. tax): {:.2}", order.total);
    println!(
        "Payment: {} ({})",
        order.payment_method, order.payment_status
    );
    if !order.customer_name.is_empty() {
        println!("Customer: {}", order.customer_name);
    }
    if let Some(address) = &order.delivery_address {
        println!("Deliver to: {}", address);
    }
    if let Some(table) = &order.table_number {
        println!("Table: {}", table);
    }
    if let Some(instructions) = &order.special_instructions {
        println!("Instructions: {}", instructions);
    }
}
