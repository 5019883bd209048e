use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::create_app;
use crate::logging;
use crate::server;
use crate::settings::Settings;

/// Arguments for the serve subcommand
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Settings object to start from (production, test)
    #[arg(long, default_value = "production", env = "SPELL_CHECK_ENV")]
    pub config: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        ServeArgs {
            config: std::env::var("SPELL_CHECK_ENV").unwrap_or_else(|_| "production".to_string()),
        }
    }
}

/// Execute the serve command.
pub fn run(args: &ServeArgs) -> Result<ExitCode> {
    logging::init();

    let settings = Settings::from_name(&args.config)?;
    settings.log_startup();

    let bind_addr = settings.bind_addr();
    let app = create_app(settings);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(app.into_router(), &bind_addr))?;

    Ok(ExitCode::SUCCESS)
}
