use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "paisesrv",
    about = "HTTP server that serves country data and records per-country votes",
    version,
    author
)]
pub struct Args {
    /// Port to listen on, overrides SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Vote database, overrides DATABASE_URL
    #[arg(long)]
    pub database_url: Option<String>,
}
