use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    /// Host interface to bind (default 0.0.0.0).
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// Port to bind (default 8080).
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Board edge length for newly created games (minimum 2).
    #[arg(long, default_value_t = 4)]
    pub size: usize,
    /// Optional tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
}
