use clap::{Parser, Subcommand, ValueEnum};
use ferrous_resolv_domain::{AddrInfoFlags, AddrInfoHints, AddressFamily, CliOverrides, SocketType};
use std::net::Ipv4Addr;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-resolv")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Resolv - minimal IPv4 DNS stub resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// DNS server address (overrides config and resolv.conf)
    #[arg(short = 'n', long, global = true)]
    nameserver: Option<Ipv4Addr>,

    /// Query timeout in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a host/service pair the way getaddrinfo does
    Lookup {
        /// Host name or dotted-decimal address; omit for the wildcard address
        host: Option<String>,

        /// Numeric port or a known service name (http, https)
        #[arg(short, long)]
        service: Option<String>,

        #[arg(long, value_enum, default_value_t = FamilyArg::Unspec)]
        family: FamilyArg,

        #[arg(long, value_enum, default_value_t = SockTypeArg::Any)]
        socktype: SockTypeArg,

        /// Request the canonical name in the result
        #[arg(long)]
        canonname: bool,
    },

    /// Legacy host-entry lookup (gethostbyname)
    Hostent { name: String },

    /// Startup probe: resolve the configured test host once and report
    SelfTest {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        service: Option<String>,
    },

    /// Print the message for an address-info status code
    Strerror {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Unspec,
    Inet,
    Inet6,
}

impl From<FamilyArg> for AddressFamily {
    fn from(family: FamilyArg) -> Self {
        match family {
            FamilyArg::Unspec => AddressFamily::Unspecified,
            FamilyArg::Inet => AddressFamily::Inet,
            FamilyArg::Inet6 => AddressFamily::Inet6,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SockTypeArg {
    Any,
    Stream,
    Dgram,
}

impl From<SockTypeArg> for SocketType {
    fn from(socktype: SockTypeArg) -> Self {
        match socktype {
            SockTypeArg::Any => SocketType::Any,
            SockTypeArg::Stream => SocketType::Stream,
            SockTypeArg::Dgram => SocketType::Datagram,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        nameserver: cli.nameserver,
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Resolv v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Strerror { code } => commands::strerror::run(code),
        Commands::Lookup {
            host,
            service,
            family,
            socktype,
            canonname,
        } => {
            let resolver = di::Resolver::new(&config);
            let flags = if canonname {
                AddrInfoFlags::CANONNAME
            } else {
                AddrInfoFlags::NONE
            };
            let hints = AddrInfoHints {
                flags,
                family: family.into(),
                socket_type: socktype.into(),
                protocol: 0,
            };
            commands::lookup::run(&resolver, host.as_deref(), service.as_deref(), &hints)
        }
        Commands::Hostent { name } => {
            let resolver = di::Resolver::new(&config);
            commands::hostent::run(&resolver, &name)
        }
        Commands::SelfTest { host, service } => {
            let resolver = di::Resolver::new(&config);
            let host = host.unwrap_or_else(|| config.dns.self_test_host.clone());
            let service = service.unwrap_or_else(|| config.dns.self_test_service.clone());
            commands::self_test::run(&resolver, &host, &service)
        }
    }
}
