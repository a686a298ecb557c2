use crate::cli::args::Cli;
use crate::client::{MetObsApi, MetObsClient};
use crate::error::Result;
use crate::logging::init_logging;
use crate::processors::{Outcome, ParameterLister, TemperatureAggregator};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::SummaryWriter;
use std::io::Write;
use tracing::{info, warn};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    if !cli.has_work() {
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?
        .with_parameter(cli.parameter)
        .with_max_workers(cli.workers)
        .validated()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %settings.base_url,
        workers = settings.max_workers,
        "starting smhi-metobs"
    );

    let client = MetObsClient::from_settings(&settings)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    execute(&cli, &settings, &client, &mut out)
}

/// Run the requested listings against `api`, writing results to `out`.
pub fn execute<A: MetObsApi, W: Write>(
    cli: &Cli,
    settings: &Settings,
    api: &A,
    out: &mut W,
) -> Result<()> {
    if cli.parameters {
        let lister = ParameterLister::new();
        if let Some(parameters) = lister.fetch(api)? {
            lister.table(&parameters).write_to(out)?;
        }
    }

    if cli.temperatures {
        let progress = ProgressReporter::new_spinner("Fetching station list...", cli.quiet);
        let report =
            TemperatureAggregator::from_settings(settings).aggregate(api, Some(&progress))?;

        for skipped in &report.skipped {
            info!(
                station = %skipped.key,
                name = %skipped.name,
                reason = %skipped.reason,
                "station skipped"
            );
        }

        let outcome = report.outcome();
        if outcome != Outcome::Complete {
            warn!(%outcome, "no temperature readings available");
        }

        SummaryWriter::write_to(&report, out)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiResponse;
    use clap::Parser;
    use std::collections::HashMap;

    struct MapApi(HashMap<String, ApiResponse>);

    impl MetObsApi for MapApi {
        fn request(&self, path: &str) -> Result<ApiResponse> {
            Ok(self
                .0
                .get(path)
                .cloned()
                .unwrap_or_else(|| ApiResponse::new(404, "")))
        }
    }

    fn run_with(args: &[&str], api: &MapApi) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        execute(&cli, &Settings::default(), api, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_flags_prints_nothing() {
        let api = MapApi(HashMap::new());
        assert_eq!(run_with(&["smhi-metobs"], &api), "");
    }

    #[test]
    fn test_parameters_then_temperatures() {
        let mut responses = HashMap::new();
        responses.insert(
            String::new(),
            ApiResponse::new(
                200,
                r#"{"resource": [{"key": "2", "title": "Lufttemperatur", "summary": "medel"}]}"#,
            ),
        );
        responses.insert(
            "/parameter/2".to_string(),
            ApiResponse::new(200, r#"{"station": [{"key": "a", "name": "A", "active": true}]}"#),
        );
        responses.insert(
            "/parameter/2/station/a/period/latest-day/data".to_string(),
            ApiResponse::new(200, r#"{"value": [{"value": "7.5"}], "station": {"name": "A"}}"#),
        );
        let api = MapApi(responses);

        let output = run_with(&["smhi-metobs", "--quiet", "--temperatures", "--parameters"], &api);
        assert_eq!(
            output,
            "2 Lufttemperatur medel\n\
             Highest temperature: A, 7.5 degrees\n\
             Lowest temperature: A, 7.5 degrees\n"
        );
    }

    #[test]
    fn test_failed_catalog_prints_nothing() {
        let api = MapApi(HashMap::new());
        assert_eq!(run_with(&["smhi-metobs", "--parameters"], &api), "");
    }
}
