use clap::{ArgGroup, Args, Parser, Subcommand};
use log::{debug, error, info};
use simplelog::{LevelFilter, SimpleLogger};

mod configuration;
mod control;
mod dom;
mod env;
mod networking;
mod utils;

#[derive(Parser)]
#[clap(name = "woa", version, about = "Wake up machines on the network")]
struct Opts {
    #[clap(
        short = 'd',
        long = "debug",
        help = "Enable debug logging"
    )]
    debug: bool,
    #[clap(
        short = 'v',
        long = "verbose",
        conflicts_with = "debug",
        help = "Enable verbose logging"
    )]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a magic packet to the specified MAC address or configured machine
    Send(SendArgs),
    /// Print version information
    Version,
}

#[derive(Args)]
#[clap(group(ArgGroup::new("target").required(true).args(&["mac", "name"])))]
struct SendArgs {
    #[clap(
        short = 'm',
        long = "mac",
        value_name = "MAC",
        help = "MAC address of the device to wake up"
    )]
    mac: Option<String>,
    #[clap(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Name of the configured machine to wake up"
    )]
    name: Option<String>,
}

fn log_configuration(config: &configuration::Configuration) {
    debug!("server: listening on {}", config.server.listen);
    debug!("ping: privileged {}", config.ping.privileged);

    debug!("machines ({}):", config.machines.len());
    for machine in config.machines.iter() {
        let method = dom::WakeMethod::select(machine);
        debug!(
            "  {}: {} [{}] ({})",
            machine.name,
            machine.ip.as_deref().unwrap_or("-"),
            machine.mac,
            match method {
                dom::WakeMethod::Udp => "udp".to_string(),
                dom::WakeMethod::Http(http) => format!("http {}", http.endpoint),
            }
        );
    }
}

fn send(args: SendArgs) -> exitcode::ExitCode {
    let target = match control::Target::from_args(args.mac, args.name) {
        Err(e) => {
            error!("{}", e);
            return e.exit_code();
        }
        Ok(target) => target,
    };

    // read the configuration
    debug!("loading configuration...");
    let config = match configuration::load() {
        Err(e) => {
            error!("failed to load configuration: {:#}", e);
            return exitcode::CONFIG;
        }
        Ok(config) => config,
    };
    log_configuration(&config);

    match control::wakeup(&target, &config, &control::Factory {}) {
        Err(e) => {
            error!("failed to wake up: {}", e);
            e.exit_code()
        }
        Ok(machine) => {
            info!("{} successfully woken up", machine);
            exitcode::OK
        }
    }
}

fn main() {
    // parse command line arguments
    let args: Opts = Opts::parse();

    let mut log_level = LevelFilter::Info;
    if args.verbose {
        log_level = LevelFilter::Trace;
    } else if args.debug {
        log_level = LevelFilter::Debug;
    }

    let _ = SimpleLogger::init(log_level, simplelog::Config::default());

    let result = match args.command {
        Command::Send(send_args) => send(send_args),
        Command::Version => {
            println!("{}", env::version());
            exitcode::OK
        }
    };
    std::process::exit(result);
}
