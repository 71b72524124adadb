#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::ClockConfig;

use crate::adapters::terminal::RenderOptions;

impl ClockConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_date: self.display.show_date,
            show_offset: self.display.show_offset,
        }
    }
}
