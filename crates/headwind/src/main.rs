use std::{env, fs::File, io::BufReader, sync::Arc};

use anyhow::Context;
use headwind::{config::Config, prelude::*};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_env()?;

    let Some(gpx_path) = env::args().nth(1) else {
        anyhow::bail!("usage: headwind <route.gpx>");
    };

    let file = File::open(&gpx_path).with_context(|| format!("Failed to open {gpx_path}"))?;
    let path = RoutePath::from_gpx(BufReader::new(file))?;
    tracing::info!("Loaded route {} with {} points", gpx_path, path.len());

    let weather: Arc<dyn WeatherProvider> = match (config.wind_override, config.api_key) {
        (Some(observation), _) => {
            tracing::info!("Using fixed wind from HEADWIND_WIND");
            Arc::new(StaticWeather(observation))
        }
        (None, Some(api_key)) => {
            Arc::new(OpenWeatherClient::new(api_key).with_endpoint(config.weather_endpoint))
        }
        (None, None) => anyhow::bail!("Set OPENWEATHER_API_KEY or HEADWIND_WIND"),
    };

    let coordinates = path.coordinates().to_vec();
    let analysis = spawn_analysis(path, weather).join().await?;
    let impact = &analysis.path_impact;

    if let WindPercentages::Complete {
        headwind,
        tailwind,
        crosswind,
    } = impact.wind
    {
        tracing::info!(
            "Headwind {headwind:.0}%, tailwind {tailwind:.0}%, crosswind {crosswind:.0}%"
        );
    }
    tracing::info!("Score: {:.2}", cycling_score(impact));
    tracing::info!("{}", cycling_advisory(impact));

    let segments = build_overlay_segments(&analysis.coordinate_impacts, &coordinates);
    println!("{}", serde_json::to_string_pretty(&overlay_to_geojson(&segments))?);

    Ok(())
}
