use clap::Parser;
use log::debug;
use skycast_core::MetaWeatherClient;

use crate::report::Report;
use crate::session::Session;
use crate::spinner::Spinner;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather in your terminal")]
pub struct Cli {
    /// Location name, e.g. "london". Omit to run interactively.
    pub location: Option<String>,

    /// Base URL of the MetaWeather API (development override).
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = self.client();

        match self.location {
            Some(location) => show_once(client, &location).await,
            None => Session::new(Box::new(client)).run().await,
        }
    }

    /// The `--base-url` flag wins over `SKYCAST_BASE_URL`.
    fn client(&self) -> MetaWeatherClient {
        let base_url = self
            .base_url
            .clone()
            .or_else(|| std::env::var("SKYCAST_BASE_URL").ok());

        match base_url {
            Some(url) => {
                debug!("using MetaWeather base URL override: {url}");
                MetaWeatherClient::with_base_url(url)
            }
            None => MetaWeatherClient::new(),
        }
    }
}

/// One-shot mode: fetch a single location and exit, non-zero on failure.
async fn show_once(client: MetaWeatherClient, location: &str) -> anyhow::Result<()> {
    let spinner = Spinner::start("fetching weather");
    let result = client.location_by_query(location).await;
    spinner.stop().await;

    let weather = result?;
    println!("{}", Report::new(&weather));
    Ok(())
}
