use clap::Parser;
use edna_client::config::cli::parse_payload;
use edna_client::core::router::Router;
use edna_client::domain::model::{FinancialReportQuery, PayrollReportQuery};
use edna_client::utils::logger;
use edna_client::utils::validation::Validate;
use edna_client::{ApiClient, ApiCommand, ApiError, CliConfig, Command, Result};
use reqwest::Response;

fn print_routes() -> i32 {
    for route in Router::default().routes() {
        println!("{:<15} {:<14} {}", route.path, route.name, route.view);
    }
    0
}

fn resolve(path: &str, base: &str) -> i32 {
    match Router::new(base).resolve(path) {
        Some(route) => {
            println!("{} ({})", route.view, route.name);
            0
        }
        None => {
            eprintln!("❌ No route for {}", path);
            1
        }
    }
}

async fn run(api: &ApiClient, command: ApiCommand) -> Result<Response> {
    match command {
        ApiCommand::List { resource, params } => {
            api.list(resource, Some(&CliConfig::filter(&params))).await
        }
        ApiCommand::Get { resource, id, oferta } => match oferta {
            Some(oferta) => api.get_item_oferta(id, oferta).await,
            None => api.fetch(resource, id).await,
        },
        ApiCommand::Create { resource, data } => {
            api.create(resource, &parse_payload(&data)?).await
        }
        ApiCommand::Update {
            resource,
            id,
            data,
            oferta,
        } => {
            let body = parse_payload(&data)?;
            match oferta {
                Some(oferta) => api.update_item_oferta(id, oferta, &body).await,
                None => api.update(resource, id, &body).await,
            }
        }
        ApiCommand::Delete { resource, id, oferta } => match oferta {
            Some(oferta) => api.delete_item_oferta(id, oferta).await,
            None => api.remove(resource, id).await,
        },
        ApiCommand::DeleteEndpoint { endpoint } => api.delete_by_endpoint(&endpoint).await,
        ApiCommand::Financeiro {
            start,
            end,
            granularity,
            projection_days,
        } => {
            let query = FinancialReportQuery {
                start,
                end,
                granularity,
                projection_days,
            };
            api.get_relatorio_financeiro(&query).await
        }
        ApiCommand::FolhaPagamento { start, end, tipo } => {
            let query = PayrollReportQuery { start, end, tipo };
            api.get_relatorio_folha_pagamento(&query).await
        }
        ApiCommand::Health => api.health().await,
    }
}

async fn print_response(response: Response) -> Result<bool> {
    let status = response.status();
    let body = response.text().await?;

    eprintln!("HTTP {}", status);
    let pretty = serde_json::from_str::<serde_json::Value>(&body)
        .and_then(|json| serde_json::to_string_pretty(&json))
        .unwrap_or(body);
    if !pretty.is_empty() {
        println!("{}", pretty);
    }

    Ok(status.is_success())
}

fn fail(e: &ApiError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(if e.is_config_error() { 2 } else { 3 });
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let command = match &cli.command {
        Command::Routes => std::process::exit(print_routes()),
        Command::Resolve { path, base } => std::process::exit(resolve(path, base)),
        Command::Api(command) => command.clone(),
    };

    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let verbose = cli.verbose || file.as_ref().is_some_and(|f| f.verbose());
    if cli.json_logs || file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = command.validate() {
        fail(&e);
    }

    let api = match cli
        .api_config(file.as_ref())
        .and_then(|config| ApiClient::new(&config))
    {
        Ok(api) => api,
        Err(e) => fail(&e),
    };
    tracing::info!("Using backend at {}", api.base_url());

    let response = match run(&api, command).await {
        Ok(response) => response,
        Err(e) => fail(&e),
    };

    match print_response(response).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => fail(&e),
    }
}
