use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use gateway_console::api::simulated::{NewDevice, NewModel, NewParameter};
use gateway_console::api::{DeviceClient, DeviceUpdate, ParameterLink, SimulatedApi};
use gateway_console::config::{load_config, NavVariant, ObservabilityConfig};
use gateway_console::lifecycle::startup::{api_config, build_route_table};
use gateway_console::navigation::{split_device_scope, RouteTable};
use gateway_console::observability::logging;

#[derive(Parser)]
#[command(name = "consolectl")]
#[command(about = "Management CLI for the gateway console", long_about = None)]
struct Cli {
    /// Gateway backend base URL [default: api.base_url from --config, else http://127.0.0.1:9000]
    #[arg(short, long)]
    url: Option<String>,

    /// Built-in navigation table [default: embedded].
    #[arg(long, value_enum)]
    variant: Option<NavVariant>,

    /// Console config file. A custom table in it wins over --variant.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path to section, item and breadcrumb
    Resolve {
        path: String,
        /// Device scope to strip before resolving
        #[arg(short, long)]
        device: Option<String>,
    },
    /// Print the navigation table
    Sections,
    /// List devices on the gateway backend
    Devices,
    /// List parameters bound to a device
    DeviceParameters { id: u64 },
    /// Update fields of a device
    UpdateDevice {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        enabled: Option<u8>,
    },
    /// Delete a device on the gateway backend
    DeleteDevice { id: u64 },
    /// Bind a parameter to a device
    LinkParameter {
        device: u64,
        parameter: u64,
        #[arg(long, default_value_t = 0.0)]
        sensitivity: f64,
    },
    /// Remove a device/parameter binding
    UnbindParameter { map_id: u64 },
    /// List device models
    Models,
    /// List parameter definitions
    Parameters,
    /// Submit an add form (simulated, waits api.simulated_delay_ms)
    #[command(subcommand)]
    Submit(SubmitCommand),
}

#[derive(Subcommand)]
enum SubmitCommand {
    Model {
        brand: String,
        model: String,
        #[arg(long, default_value = "sensor")]
        dev_type: String,
        #[arg(long, default_value_t = 0)]
        interface: u32,
    },
    Device {
        name: String,
        model_id: u64,
        model_name: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        firmware: Option<String>,
    },
    Parameter {
        model_id: u64,
        name: String,
        #[arg(long)]
        unit: Option<String>,
        /// 0 = discrete, 1 = integer, 2 = float
        #[arg(long, default_value_t = 2)]
        data_type: u8,
        /// 0 = read only, 1 = read/write
        #[arg(long, default_value_t = 0)]
        rw: u8,
        #[arg(long)]
        lower: Option<f64>,
        #[arg(long)]
        upper: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&ObservabilityConfig {
        log_level: "warn".to_string(),
        ..Default::default()
    });

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let api = api_config(cli.config.as_deref(), cli.url)?;

    match cli.command {
        Commands::Resolve { path, device } => {
            let table = load_table(cli.config, cli.variant)?;
            let device = device.or_else(|| split_device_scope(&path).0.map(str::to_string));
            print_json(&table.resolve_scoped(&path, device.as_deref()))?;
        }
        Commands::Sections => {
            let table = load_table(cli.config, cli.variant)?;
            print_json(&table.sections())?;
        }
        Commands::Devices => {
            let client = DeviceClient::from_config(&api)?;
            print_json(&client.list_devices().await?)?;
        }
        Commands::DeviceParameters { id } => {
            let client = DeviceClient::from_config(&api)?;
            print_json(&client.device_parameters(id).await?)?;
        }
        Commands::UpdateDevice {
            id,
            name,
            location,
            enabled,
        } => {
            let client = DeviceClient::from_config(&api)?;
            let update = DeviceUpdate {
                name,
                location,
                enabled,
                ..Default::default()
            };
            print_json(&client.update_device(id, &update).await?)?;
        }
        Commands::DeleteDevice { id } => {
            let client = DeviceClient::from_config(&api)?;
            client.delete_device(id).await?;
            println!("Device {} deleted", id);
        }
        Commands::LinkParameter {
            device,
            parameter,
            sensitivity,
        } => {
            let client = DeviceClient::from_config(&api)?;
            let link = ParameterLink {
                dev_id: device,
                param_id: parameter,
                sensitivity,
            };
            print_json(&client.link_parameter(&link).await?)?;
        }
        Commands::UnbindParameter { map_id } => {
            let client = DeviceClient::from_config(&api)?;
            client.unbind_parameter(map_id).await?;
            println!("Parameter map {} removed", map_id);
        }
        Commands::Models => {
            let client = DeviceClient::from_config(&api)?;
            print_json(&client.list_models().await?)?;
        }
        Commands::Parameters => {
            let client = DeviceClient::from_config(&api)?;
            print_json(&client.list_parameters().await?)?;
        }
        Commands::Submit(form) => {
            let simulated = SimulatedApi::from_config(&api);
            let receipt = match form {
                SubmitCommand::Model {
                    brand,
                    model,
                    dev_type,
                    interface,
                } => {
                    simulated
                        .create_model(&NewModel {
                            brand,
                            model,
                            dev_type,
                            interface,
                        })
                        .await?
                }
                SubmitCommand::Device {
                    name,
                    model_id,
                    model_name,
                    location,
                    firmware,
                } => {
                    simulated
                        .create_device(&NewDevice {
                            device_id: name,
                            model_id,
                            node_id: model_name,
                            loc_name: location,
                            fw_ver: firmware,
                        })
                        .await?
                }
                SubmitCommand::Parameter {
                    model_id,
                    name,
                    unit,
                    data_type,
                    rw,
                    lower,
                    upper,
                } => {
                    simulated
                        .create_parameter(&NewParameter {
                            model_id,
                            name,
                            unit,
                            data_type,
                            rw,
                            lower_limit: lower,
                            upper_limit: upper,
                        })
                        .await?
                }
            };
            print_json(&receipt)?;
        }
    }

    Ok(())
}

fn load_table(
    config: Option<PathBuf>,
    variant: Option<NavVariant>,
) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let mut navigation = match config {
        Some(path) => load_config(&path)?.navigation,
        None => Default::default(),
    };
    if let Some(variant) = variant {
        navigation.variant = variant;
    }
    Ok(build_route_table(&navigation)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
