//! The `search` subcommand: run one nearby-places query and print the
//! normalized records.
//!
//! Progress is rendered on stderr while the normalization pass runs, standing
//! in for the progress bar a graphical caller would drive from the same
//! callback.

use std::io::Write;

use nearby_core::{AppConfig, Coordinate, PlaceRecord};
use nearby_overpass::OverpassClient;

/// Runs a search and prints each record to stdout, one line per place (or a
/// JSON array with `--json`).
///
/// # Errors
///
/// Returns an error for invalid search parameters, a failed or timed-out
/// request, or an undecodable response.
pub(crate) async fn run_search(
    config: &AppConfig,
    lat: f64,
    lon: f64,
    radius: Option<u32>,
    category: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let radius = radius.unwrap_or(config.default_radius_meters);
    let category = category.unwrap_or_else(|| config.default_category.clone());
    let center = Coordinate {
        latitude: lat,
        longitude: lon,
    };

    let client = OverpassClient::with_endpoint(
        &config.overpass_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let records = client
        .search_nearby_with_progress(center, radius, &category, |fraction| {
            eprint!("\rprocessing results... {:3.0}%", fraction * 100.0);
            let _ = std::io::stderr().flush();
        })
        .await?;
    eprintln!();

    tracing::info!(
        count = records.len(),
        category = %category,
        radius_m = radius,
        "search finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("no {category} found within {radius} m");
    } else {
        for record in &records {
            println!("{}", format_record(record));
        }
    }

    Ok(())
}

/// One text line per place: id, title, coordinate, then any optional fields
/// that are present.
fn format_record(record: &PlaceRecord) -> String {
    let mut line = format!(
        "#{} {} ({:.5}, {:.5})",
        record.id, record.title, record.coordinate.latitude, record.coordinate.longitude
    );
    if !record.address.is_empty() {
        line.push_str(&format!(" on {}", record.address));
    }
    if !record.description.is_empty() {
        line.push_str(&format!(" - {}", record.description));
    }
    line
}
