mod cart;
mod config_cmd;
mod contact;
mod info;
mod menu;
mod order;
mod reserve;

pub use cart::CartCommand;
pub use config_cmd::ConfigCommand;
pub use contact::ContactCommand;
pub use info::InfoCommand;
pub use menu::MenuCommand;
pub use order::OrderCommand;
pub use reserve::ReserveCommand;

use clap::ValueEnum;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
