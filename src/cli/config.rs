//! CLI commands for settings

use clap::Subcommand;

use crate::config::settings::SETTING_KEYS;
use crate::config::{Settings, SpendPaths};
use crate::error::SpendResult;

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show resolved paths and current settings (default)
    Show,

    /// Change a setting and save it to config.json
    Set {
        /// One of: currency_symbol, date_format, trend_months, trend_scope, top_vendors
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle the `config` command
pub fn handle_config_command(
    paths: &SpendPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> SpendResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print!("{}", format_config(paths, settings)),
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value.trim());
            println!("Saved to: {}", paths.settings_file().display());
        }
    }
    Ok(())
}

fn format_config(paths: &SpendPaths, settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str("SpendLens Configuration\n");
    out.push_str("=======================\n");
    out.push_str(&format!("Base directory:  {}\n", paths.base_dir().display()));
    out.push_str(&format!("Settings file:   {}\n", paths.settings_file().display()));
    out.push_str(&format!("Data directory:  {}\n", paths.data_dir().display()));
    out.push_str(&format!("  expenses:      {}\n", paths.expenses_file().display()));
    out.push_str(&format!("  categories:    {}\n", paths.categories_file().display()));
    out.push_str(&format!("  budgets:       {}\n", paths.budgets_file().display()));
    out.push('\n');
    out.push_str("Settings:\n");
    out.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    out.push_str(&format!("  Date format:     {}\n", settings.date_format));
    out.push_str(&format!("  Trend months:    {}\n", settings.trend_months));
    out.push_str(&format!("  Trend scope:     {:?}\n", settings.trend_scope));
    out.push_str(&format!("  Top vendors:     {}\n", settings.top_vendors));
    out.push('\n');
    out.push_str(&format!("Settable keys: {}\n", SETTING_KEYS.join(", ")));
    out
}
