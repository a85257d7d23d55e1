use crate::config::{ApiConfig, TomlConfig};
use crate::domain::filter::Filter;
use crate::domain::model::Granularity;
use crate::domain::resource::{Operation, Resource};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "edna")]
#[command(about = "Command-line client for the Edna management backend")]
pub struct CliConfig {
    /// Overrides the base URL from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML file with an [api] section
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Api(ApiCommand),
    /// Print the UI route table
    Routes,
    /// Resolve a UI path to its view
    Resolve {
        path: String,
        #[arg(long, default_value = "/")]
        base: String,
    },
}

/// Commands that send one request to the backend.
#[derive(Debug, Clone, Subcommand)]
pub enum ApiCommand {
    /// GET a collection
    List {
        #[arg(value_enum)]
        resource: Resource,
        /// Query parameter, e.g. -p filter-nome=ilike.Cerveja (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
    /// GET one item
    Get {
        #[arg(value_enum)]
        resource: Resource,
        id: String,
        /// Offer id, required for item-ofertas (id is then the product id)
        #[arg(long)]
        oferta: Option<String>,
    },
    /// POST a JSON document
    Create {
        #[arg(value_enum)]
        resource: Resource,
        data: String,
    },
    /// PUT a JSON document
    Update {
        #[arg(value_enum)]
        resource: Resource,
        id: String,
        data: String,
        /// Offer id, required for item-ofertas (id is then the product id)
        #[arg(long)]
        oferta: Option<String>,
    },
    /// DELETE one item
    Delete {
        #[arg(value_enum)]
        resource: Resource,
        id: String,
        /// Offer id, required for item-ofertas (id is then the product id)
        #[arg(long)]
        oferta: Option<String>,
    },
    /// DELETE an arbitrary endpoint, e.g. /lotes/3
    DeleteEndpoint { endpoint: String },
    /// Financial report
    Financeiro {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, value_enum)]
        granularity: Option<Granularity>,
        #[arg(long)]
        projection_days: Option<u32>,
    },
    /// Monthly payroll report
    FolhaPagamento {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Employee type, e.g. garcom or caixa
        #[arg(long)]
        tipo: Option<String>,
    },
    /// Backend health check
    Health,
}

impl ApiCommand {
    /// Resource, operation and offer id of the collection commands.
    fn target(&self) -> Option<(Resource, Operation, Option<&str>)> {
        match self {
            ApiCommand::List { resource, .. } => Some((*resource, Operation::List, None)),
            ApiCommand::Get {
                resource, oferta, ..
            } => Some((*resource, Operation::Fetch, oferta.as_deref())),
            ApiCommand::Create { resource, .. } => Some((*resource, Operation::Create, None)),
            ApiCommand::Update {
                resource, oferta, ..
            } => Some((*resource, Operation::Update, oferta.as_deref())),
            ApiCommand::Delete {
                resource, oferta, ..
            } => Some((*resource, Operation::Remove, oferta.as_deref())),
            _ => None,
        }
    }
}

impl Validate for ApiCommand {
    /// Rejects commands that would hit a route the backend does not have.
    fn validate(&self) -> Result<()> {
        let Some((resource, operation, oferta)) = self.target() else {
            return Ok(());
        };

        let composite = resource == Resource::ItemOfertas
            && matches!(
                operation,
                Operation::Fetch | Operation::Update | Operation::Remove
            );
        match (composite, oferta) {
            (true, Some(oferta)) => return validate_non_empty_string("oferta", oferta),
            (true, None) => {
                return Err(ApiError::MissingConfigError {
                    field: "--oferta".to_string(),
                })
            }
            (false, Some(_)) => {
                return Err(ApiError::ConfigValidationError {
                    field: "--oferta".to_string(),
                    message: format!("only applies to {}", Resource::ItemOfertas),
                })
            }
            (false, None) => {}
        }

        if !resource.supports(operation) {
            return Err(ApiError::ConfigValidationError {
                field: "resource".to_string(),
                message: format!("the backend has no '{}' route for {}", operation, resource),
            });
        }
        Ok(())
    }
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    validate_non_empty_string("param", key).map_err(|e| e.to_string())?;
    Ok((key.to_string(), value.to_string()))
}

/// Parses a JSON payload given on the command line.
pub fn parse_payload(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(ApiError::from)
}

impl CliConfig {
    /// The `--config` file, parsed and validated, if one was given.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(|path| {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(file)
            })
            .transpose()
    }

    /// Config file (or defaults) with command-line overrides applied.
    pub fn api_config(&self, file: Option<&TomlConfig>) -> Result<ApiConfig> {
        let mut config = match file {
            Some(file) => file.api_config()?.clone(),
            None => ApiConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn filter(params: &[(String, String)]) -> Filter {
        params.iter().cloned().collect()
    }
}
