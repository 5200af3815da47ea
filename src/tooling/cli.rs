//! CLI Tooling
//!
//! Command-line interface for all inventory operations. Every one-shot command
//! loads the inventory file, applies a single operation, and saves it back.
//! With no subcommand the numbered interactive menu runs instead.

use crate::config::{ConfigLoader, InventoryConfig, StorageConfig};
use crate::error::ApiError;
use crate::record::Record;
use crate::store::RecordStore;
use crate::tooling::menu::MenuSession;
use crate::types::{Price, ProductId, Quantity};
use crate::views::{format_record_line, format_records, ListFormat};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Inventory CLI - product records kept in a flat text file
#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Manage product inventory records stored in a flat text file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace directory (relative inventory paths, from --file or config, resolve against it)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Inventory file (overrides storage.path from config; relative to --workspace)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Add a product
    Add {
        /// Product ID
        #[arg(long, allow_negative_numbers = true)]
        id: Option<ProductId>,
        /// Product name (no whitespace)
        #[arg(long)]
        name: Option<String>,
        /// Unit price
        #[arg(long, allow_negative_numbers = true)]
        price: Option<Price>,
        /// Quantity on hand
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<Quantity>,
    },
    /// Remove every product with the given ID
    Remove {
        /// Product ID
        #[arg(allow_negative_numbers = true)]
        id: ProductId,
    },
    /// Update name, price, and quantity of the first product with the given ID
    Update {
        /// Product ID
        #[arg(allow_negative_numbers = true)]
        id: ProductId,
        /// New product name (no whitespace)
        #[arg(long)]
        name: Option<String>,
        /// New unit price
        #[arg(long, allow_negative_numbers = true)]
        price: Option<Price>,
        /// New quantity on hand
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<Quantity>,
    },
    /// Display all products
    List {
        /// Output format (text, table, or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Menu => "menu",
        Commands::Add { .. } => "add",
        Commands::Remove { .. } => "remove",
        Commands::Update { .. } => "update",
        Commands::List { .. } => "list",
    }
}

/// CLI context: resolved configuration and inventory file location
pub struct CliContext {
    store_path: PathBuf,
    config: InventoryConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        file: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let storage = match file {
            Some(path) => StorageConfig { path },
            None => config.storage.clone(),
        };
        let store_path = storage.resolve_path(&workspace_root);

        Ok(Self {
            store_path,
            config,
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Load the inventory file into a fresh store.
    pub fn load_store(&self) -> Result<RecordStore, ApiError> {
        let mut store = RecordStore::new();
        store.load(&self.store_path)?;
        Ok(store)
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Menu => {
                let stdin = std::io::stdin();
                self.run_menu(stdin.lock(), std::io::stdout())?;
                Ok(String::new())
            }
            Commands::Add {
                id,
                name,
                price,
                quantity,
            } => self.handle_add(*id, name.as_deref(), *price, *quantity),
            Commands::Remove { id } => self.handle_remove(*id),
            Commands::Update {
                id,
                name,
                price,
                quantity,
            } => self.handle_update(*id, name.as_deref(), *price, *quantity),
            Commands::List { format } => self.handle_list(format),
        }
    }

    /// Run the interactive menu, then save whatever the session left behind.
    ///
    /// The store is saved even when the session stops on a terminal I/O
    /// error; that error is reported after the save.
    pub fn run_menu<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<(), ApiError> {
        let mut store = self.load_store()?;
        let session = MenuSession::new(&mut store, input, output).run();
        if let Err(e) = &session {
            tracing::warn!("Menu session ended early: {}", e);
        }
        store.save(&self.store_path)?;
        session.map_err(ApiError::IoError)
    }

    fn handle_add(
        &self,
        id: Option<ProductId>,
        name: Option<&str>,
        price: Option<Price>,
        quantity: Option<Quantity>,
    ) -> Result<String, ApiError> {
        let id = match id {
            Some(id) => id,
            None => prompt_value("Product ID")?,
        };
        let name = match name {
            Some(name) => name.to_string(),
            None => prompt_value("Product name")?,
        };
        validate_name(&name)?;
        let price = match price {
            Some(price) => price,
            None => prompt_value("Product price")?,
        };
        let quantity = match quantity {
            Some(quantity) => quantity,
            None => prompt_value("Product quantity")?,
        };

        let mut store = self.load_store()?;
        let record = Record::new(id, name, price, quantity);
        let line = format_record_line(&record);
        store.add(record);
        store.save(&self.store_path)?;
        Ok(format!("Product added: {}", line))
    }

    fn handle_remove(&self, id: ProductId) -> Result<String, ApiError> {
        let mut store = self.load_store()?;
        let removed = store.remove(id);
        store.save(&self.store_path)?;
        if removed == 0 {
            Ok(format!("No product with ID {}", id))
        } else {
            Ok(format!("Removed {} product(s) with ID {}", removed, id))
        }
    }

    fn handle_update(
        &self,
        id: ProductId,
        name: Option<&str>,
        price: Option<Price>,
        quantity: Option<Quantity>,
    ) -> Result<String, ApiError> {
        let mut store = self.load_store()?;
        if !store.list().iter().any(|r| r.id() == id) {
            return Ok(format!("No product with ID {}", id));
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => prompt_value("New product name")?,
        };
        validate_name(&name)?;
        let price = match price {
            Some(price) => price,
            None => prompt_value("New product price")?,
        };
        let quantity = match quantity {
            Some(quantity) => quantity,
            None => prompt_value("New product quantity")?,
        };

        store.update(id, &name, price, quantity);
        store.save(&self.store_path)?;
        let updated = store
            .list()
            .iter()
            .find(|r| r.id() == id)
            .map(format_record_line)
            .unwrap_or_default();
        Ok(format!("Product updated: {}", updated))
    }

    fn handle_list(&self, format: &str) -> Result<String, ApiError> {
        let format = ListFormat::parse(format)?;
        let store = self.load_store()?;
        let output = format_records(store.list(), format)?;
        Ok(output.trim_end_matches('\n').to_string())
    }
}

/// Names are stored as a single whitespace-delimited token.
fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ApiError::InvalidInput(format!(
            "Product name must be a single word without whitespace: {:?}",
            name
        )));
    }
    Ok(())
}

/// Prompt on the terminal for a value missing from the command line.
fn prompt_value<T>(prompt: &str) -> Result<T, ApiError>
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: ToString,
{
    use dialoguer::Input;

    Input::<T>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ApiError::InvalidInput(format!("Failed to get user input: {}", e)))
}
