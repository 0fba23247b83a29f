mod account;
mod address;
mod game;
mod setup_contract;
mod trace;
mod utils;
mod vote;

use account::KeyArgs;
use anyhow::Result;
use clap::{Parser, Subcommand};
use gameroom_common::payload::StatusAction;
use game::StatusArgs;
use setup_contract::SetupContractArgs;
use std::path::PathBuf;
use utils::config::{generate_example_config, load_config, ContractKind};
use utils::submit::SubmitArgs;

/// Gameroom cli tools
#[derive(Parser)]
#[clap(name = "gameroom-tools", version)]
struct Cli {
    /// The config file path [default: ./gameroom.toml when present]
    #[clap(short = 'c', long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a game
    CreateGame {
        /// The game name
        name: String,
        #[clap(flatten)]
        key: KeyArgs,
        #[clap(flatten)]
        submit: SubmitArgs,
    },
    /// Add a message to a game
    AddMessage {
        /// The game name
        name: String,
        /// The message content
        content: String,
        #[clap(flatten)]
        key: KeyArgs,
        #[clap(flatten)]
        submit: SubmitArgs,
    },
    /// Delete a game
    DeleteGame {
        /// The game name
        name: String,
        #[clap(flatten)]
        key: KeyArgs,
        #[clap(flatten)]
        submit: SubmitArgs,
    },
    /// Create, delay, prepone or delete a vessel status
    UpdateStatus {
        /// The vessel name
        name: String,
        /// create, delay, prepone or delete
        #[clap(short = 'a', long)]
        action: StatusAction,
        #[clap(flatten)]
        fields: StatusArgs,
        #[clap(flatten)]
        key: KeyArgs,
        #[clap(flatten)]
        submit: SubmitArgs,
    },
    /// Vote on a gameroom circuit proposal
    Vote {
        /// The proposed circuit id
        circuit_id: String,
        /// The proposal's circuit hash
        circuit_hash: String,
        /// Reject the proposal instead of accepting it
        #[clap(long)]
        reject: bool,
        /// The splinter node id voting, overrides the config file
        #[clap(long)]
        node_id: Option<String>,
        #[clap(flatten)]
        key: KeyArgs,
        /// The gameroom daemon URL, overrides the config file
        #[clap(long)]
        daemon_url: Option<String>,
        /// Write the signed payload to this file instead of submitting it
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Sign a circuit management payload and submit it
    SignPayload {
        /// The unsigned payload file path
        #[clap(short = 'i', long)]
        input_path: PathBuf,
        #[clap(flatten)]
        key: KeyArgs,
        /// The gameroom daemon URL, overrides the config file
        #[clap(long)]
        daemon_url: Option<String>,
        /// Write the signed payload to this file instead of submitting it
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Register, upload and grant namespace permissions to a gameroom contract
    SetupContract {
        #[clap(long, arg_enum, default_value = "message")]
        contract: ContractKind,
        /// The compiled contract path, overrides the config file
        #[clap(short = 'w', long)]
        wasm_path: Option<PathBuf>,
        /// Registry owner public key, repeatable [default: the signer]
        #[clap(long = "owner")]
        owners: Vec<String>,
        /// The splinterd URL, overrides the config file
        #[clap(long)]
        splinterd_url: Option<String>,
        /// The circuit id, overrides the config file
        #[clap(long)]
        circuit_id: Option<String>,
        /// The scabbard service id, overrides the config file
        #[clap(long)]
        service_id: Option<String>,
        #[clap(flatten)]
        key: KeyArgs,
        /// Write the encoded BatchList to this file instead of submitting it
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Hash a password the way gameroom stores it
    HashPassword {
        /// The user email, used as salt
        email: String,
        password: String,
    },
    /// Show the addresses of a contract and of an entity it stores
    Address {
        #[clap(long, arg_enum, default_value = "message")]
        contract: ContractKind,
        /// The game or vessel name
        name: Option<String>,
    },
    /// Generate a secp256k1 private key
    GenerateKey {
        /// Write the private key to this file instead of printing it
        #[clap(short = 'o', long)]
        output_path: Option<PathBuf>,
    },
    /// Generate an example config file
    GenerateExampleConfig {
        /// The path of the example config file
        #[clap(short = 'o', long, default_value = "./gameroom.example.toml")]
        output_path: PathBuf,
    },
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Command::CreateGame { .. } => "Create game",
            Command::AddMessage { .. } => "Add message",
            Command::DeleteGame { .. } => "Delete game",
            Command::UpdateStatus { .. } => "Update status",
            Command::Vote { .. } => "Vote",
            Command::SignPayload { .. } => "Sign payload",
            Command::SetupContract { .. } => "Setup contract",
            Command::HashPassword { .. } => "Hash password",
            Command::Address { .. } => "Address",
            Command::GenerateKey { .. } => "Generate key",
            Command::GenerateExampleConfig { .. } => "Generate example config",
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::CreateGame { name, key, submit } => {
            let config = load_config(config_path)?;
            game::create_game(&config, &key, &submit, &name).await
        }
        Command::AddMessage {
            name,
            content,
            key,
            submit,
        } => {
            let config = load_config(config_path)?;
            game::add_message(&config, &key, &submit, &name, &content).await
        }
        Command::DeleteGame { name, key, submit } => {
            let config = load_config(config_path)?;
            game::delete_game(&config, &key, &submit, &name).await
        }
        Command::UpdateStatus {
            name,
            action,
            fields,
            key,
            submit,
        } => {
            let config = load_config(config_path)?;
            game::update_status(&config, &key, &submit, &name, action, fields.into()).await
        }
        Command::Vote {
            circuit_id,
            circuit_hash,
            reject,
            node_id,
            key,
            daemon_url,
            output,
        } => {
            let config = load_config(config_path)?;
            let submit = SubmitArgs {
                daemon_url,
                circuit_id: None,
                output,
            };
            vote::vote(
                &config,
                &key,
                &submit,
                &circuit_id,
                &circuit_hash,
                reject,
                node_id.as_deref(),
            )
            .await
        }
        Command::SignPayload {
            input_path,
            key,
            daemon_url,
            output,
        } => {
            let config = load_config(config_path)?;
            let submit = SubmitArgs {
                daemon_url,
                circuit_id: None,
                output,
            };
            vote::sign_payload(&config, &key, &submit, &input_path).await
        }
        Command::SetupContract {
            contract,
            wasm_path,
            owners,
            splinterd_url,
            circuit_id,
            service_id,
            key,
            output,
        } => {
            let config = load_config(config_path)?;
            let args = SetupContractArgs {
                kind: contract,
                wasm_path: wasm_path.as_deref(),
                owners,
                splinterd_url: splinterd_url.as_deref(),
                circuit_id: circuit_id.as_deref(),
                service_id: service_id.as_deref(),
                output: output.as_deref(),
            };
            setup_contract::setup_contract(&config, &key, args).await
        }
        Command::HashPassword { email, password } => {
            account::hash_password(&email, &password);
            Ok(())
        }
        Command::Address { contract, name } => {
            let config = load_config(config_path)?;
            address::address(&config, contract, name.as_deref())
        }
        Command::GenerateKey { output_path } => account::generate_key(output_path.as_deref()),
        Command::GenerateExampleConfig { output_path } => generate_example_config(output_path),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = trace::init() {
        eprintln!("Init log error: {}", err);
        std::process::exit(-1);
    }

    let label = cli.command.label();
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            log::error!("Create runtime error: {}", err);
            std::process::exit(-1);
        }
    };
    if let Err(err) = rt.block_on(run(cli)) {
        log::error!("{} error: {:#}", label, err);
        std::process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_status() {
        let cli = Cli::try_parse_from([
            "gameroom-tools",
            "update-status",
            "vessel-1",
            "--action",
            "delay",
            "--eta",
            "2024-01-01T10:00",
            "--privkey-path",
            "alice.priv",
            "--circuit-id",
            "ajTAf-Ul6dH",
        ])
        .unwrap();
        match cli.command {
            Command::UpdateStatus {
                name,
                action,
                fields,
                key,
                submit,
            } => {
                assert_eq!(name, "vessel-1");
                assert_eq!(action, StatusAction::Delay);
                assert_eq!(fields.eta, "2024-01-01T10:00");
                assert_eq!(fields.etb, "");
                assert_eq!(key.privkey_path, Some(PathBuf::from("alice.priv")));
                assert_eq!(submit.circuit_id.as_deref(), Some("ajTAf-Ul6dH"));
            }
            _ => panic!("expected update-status"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(Cli::try_parse_from([
            "gameroom-tools",
            "update-status",
            "vessel-1",
            "--action",
            "sink",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_setup_contract() {
        let cli = Cli::try_parse_from([
            "gameroom-tools",
            "-c",
            "gameroom.toml",
            "setup-contract",
            "--contract",
            "status",
            "--owner",
            "02aa",
            "--owner",
            "03bb",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("gameroom.toml")));
        match cli.command {
            Command::SetupContract {
                contract, owners, ..
            } => {
                assert_eq!(contract, ContractKind::Status);
                assert_eq!(owners, vec!["02aa".to_string(), "03bb".to_string()]);
            }
            _ => panic!("expected setup-contract"),
        }
    }
}
