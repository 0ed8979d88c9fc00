use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "jeepney-server",
    author,
    version,
    about = "Serve Cagayan de Oro jeepney routes over HTTP",
    long_about = "Loads the jeepney route document once at startup and serves it as a \
                  read-only JSON API: route listing, lookup by code, search by stop name \
                  and popular locations.\n\n\
                  A missing or malformed route document is logged and the API starts \
                  with no routes."
)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "JEEPNEY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Route document (JSON)
    #[arg(short, long, env = "JEEPNEY_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_explicit_args() {
        let config = Config::try_parse_from([
            "jeepney-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--data",
            "/srv/jeepney/data.json",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.data, PathBuf::from("/srv/jeepney/data.json"));
        assert!(config.verbose);
    }

    #[test]
    fn test_defaults() {
        let command = Config::command();
        let default_of = |id: &str| -> Vec<String> {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .unwrap()
                .get_default_values()
                .iter()
                .map(|value| value.to_string_lossy().into_owned())
                .collect()
        };

        assert_eq!(default_of("host"), ["0.0.0.0"]);
        assert_eq!(default_of("port"), ["3000"]);
        assert_eq!(default_of("data"), ["data.json"]);
        assert!(default_of("verbose").iter().all(|value| value == "false"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["jeepney-server", "--port", "not-a-port"]).is_err());
        assert!(Config::try_parse_from(["jeepney-server", "--port", "70000"]).is_err());
    }
}
