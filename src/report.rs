use crate::error::{CliError, Result, ResultExt};
use crate::{logging, settings, ui};
use indicatif::{ProgressBar, ProgressStyle};
use pulse_report::{
    DashboardSession, DashboardState, HttpTransport, Msg, PageRenderer, ReportClient, ReportKind,
    Stream, GENERIC_FAILURE_MESSAGE,
};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub kind: ReportKind,
    pub from: String,
    pub to: String,
    pub stream: Stream,
    pub config_path: String,
    pub base_url: Option<String>,
    pub page: Option<String>,
    pub show_curl: bool,
    pub verbose: bool,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    logging::init(args.verbose);

    let config = settings::load_config(&args.config_path, args.base_url.as_deref())?;
    if args.verbose {
        ui::info_message(&format!("Backend: {}", config.backend.base_url));
    }
    let client = ReportClient::from_config(config)?;

    // Create async runtime for HTTP operations
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let state = rt.block_on(run_report(client, &args))?;

    if let Some(page) = &args.page {
        PageRenderer::new()
            .with_timestamp(chrono::Local::now())
            .save(&state, Path::new(page))
            .with_context(|| format!("Failed to write page snapshot to {}", page))?;
        ui::success_message(&format!("Page snapshot written to {}", page));
    }

    ui::section_header(&state.header_text);
    println!("{}", state.display().text());

    if state.output_html.as_deref() == Some(GENERIC_FAILURE_MESSAGE) {
        return Err(CliError::ReportFailed(args.kind));
    }
    Ok(())
}

/// Drive one report through the dashboard controller, exactly as a button press would
async fn run_report(client: ReportClient<HttpTransport>, args: &ReportArgs) -> Result<DashboardState> {
    if args.show_curl {
        let query = pulse_report::Query::new(args.from.as_str(), args.to.as_str(), args.stream);
        ui::section_header("Request");
        eprintln!("{}", client.curl_command(args.kind, &query)?);
    }

    let mut session = DashboardSession::current(client)?;
    session.dispatch(Msg::SetFromDate(args.from.clone()));
    session.dispatch(Msg::SetToDate(args.to.clone()));
    session.dispatch(Msg::SelectStream(args.stream));
    session.dispatch(Msg::Generate(args.kind));

    let spinner = loading_spinner(&session.state().header_text);
    session.settle_all().await;
    spinner.finish_and_clear();

    Ok(session.state().clone())
}

fn loading_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("{} Loading...", message));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
