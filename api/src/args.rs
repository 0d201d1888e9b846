use clap::{Args as ClapArgs, Parser};

use chefmate_core::domain::common::{ChefmateConfig, DatabaseConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "chefmate", about = "Recipe assistant API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "chefmate")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(
        long = "llm-base-url",
        env = "LLM_BASE_URL",
        default_value = "https://ai.gateway.lovable.dev/v1"
    )]
    pub base_url: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = "google/gemini-2.5-flash")]
    pub model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        id = "server_host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server_port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    /// Prefix for every route, e.g. `/functions/v1`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ChefmateConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                model: args.llm.model,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_argument_ids_are_unique() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_database_and_server_ports_are_independent() {
        let args = Args::parse_from([
            "chefmate",
            "--database-host",
            "db.internal",
            "--database-port",
            "6543",
            "--server-host",
            "127.0.0.1",
            "--server-port",
            "8080",
        ]);

        assert_eq!(args.db.host, "db.internal");
        assert_eq!(args.db.port, 6543);
        assert_eq!(args.server.host, "127.0.0.1");
        assert_eq!(args.server.port, 8080);
    }

    #[test]
    fn test_defaults_and_overrides() {
        let args = Args::parse_from([
            "chefmate",
            "--database-name",
            "recipes",
            "--root-path",
            "/functions/v1",
            "--llm-api-key",
            "secret",
        ]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "/functions/v1");

        let config = ChefmateConfig::from(args);
        assert_eq!(config.database.name, "recipes");
        assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
        assert_eq!(config.llm.model, "google/gemini-2.5-flash");
    }
}
