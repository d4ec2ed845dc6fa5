use std::process::ExitCode;
use std::time::Duration;

use ball_catalog_sdk::view::{HtmlSurface, TextSurface};
use ball_catalog_sdk::{
    CatalogClientBuilder, ClientConfig, SearchController, SearchFilters, SortField, SortOrder,
    Surface,
};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ball-search",
    version,
    about = "Search the collectible ball catalog",
    long_about = "Search the collectible ball catalog from the terminal.\n\nExamples:\n  ball-search urethane --min-value 50\n  ball-search --era 1970s --page 2 --html\n  ball-search --detail 1042\n\nThe server defaults to BALL_CATALOG_URL or http://localhost:8085."
)]
struct CliArgs {
    #[arg(value_name = "QUERY", help = "Free-text search term.")]
    query: Option<String>,

    #[arg(long, help_heading = "Filters", help = "Exact era, e.g. 1970s.")]
    era: Option<String>,

    #[arg(long, help_heading = "Filters", help = "Exact cover pattern.")]
    pattern: Option<String>,

    #[arg(long, help_heading = "Filters", help = "Exact country of origin.")]
    country: Option<String>,

    #[arg(long, value_name = "USD", help_heading = "Filters", help = "Minimum estimated value.")]
    min_value: Option<f64>,

    #[arg(long, value_name = "USD", help_heading = "Filters", help = "Maximum estimated value.")]
    max_value: Option<f64>,

    #[arg(long, value_name = "FIELD", help_heading = "Sorting", help = "value_mid, ball_name, era_start or record_no.")]
    sort: Option<SortField>,

    #[arg(long, value_name = "ORDER", help_heading = "Sorting", help = "asc or desc.")]
    order: Option<SortOrder>,

    #[arg(short, long, default_value_t = 1, help_heading = "Paging", help = "Page to fetch (starts at 1).")]
    page: u32,

    #[arg(long, help_heading = "Paging", help = "Results per page.")]
    per_page: Option<u32>,

    #[arg(short = 'u', long, value_name = "URL", help_heading = "Connection", help = "Catalog server root.")]
    base_url: Option<String>,

    #[arg(long, value_name = "SECS", help_heading = "Connection", help = "Request timeout in seconds.")]
    timeout: Option<u64>,

    #[arg(long, value_name = "RECORD_NO", help_heading = "Output", help = "Show the full record of one ball instead of searching.")]
    detail: Option<i64>,

    #[arg(long, help_heading = "Output", help = "Print the HTML fragments instead of text.")]
    html: bool,
}

impl CliArgs {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            query: self.query.clone().unwrap_or_default(),
            era: self.era.clone().unwrap_or_default(),
            pattern: self.pattern.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            min_value: self.min_value,
            max_value: self.max_value,
            sort: self.sort,
            order: self.order,
        }
    }

    fn client_builder(&self) -> ball_catalog_sdk::Result<CatalogClientBuilder> {
        let mut builder = CatalogClientBuilder::from_config(ClientConfig::from_env()?);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(per_page) = self.per_page {
            builder = builder.per_page(per_page);
        }
        Ok(builder)
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args = CliArgs::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> ball_catalog_sdk::Result<ExitCode> {
    let client = args.client_builder()?.build()?;

    if let Some(record_no) = args.detail {
        return show_detail(&client, record_no);
    }

    let mut controller = SearchController::new(client);
    controller.set_filters(args.filters());

    if args.html {
        let mut surface = HtmlSurface::new()?;
        let code = search_exit_code(&mut controller, args.page, &mut surface)?;
        println!("<p id=\"results-count\">{}</p>", surface.count_label);
        println!("<div id=\"results-container\">{}</div>", surface.results_html);
        println!("<div id=\"pagination\">{}</div>", surface.pagination_html);
        Ok(code)
    } else {
        let mut surface = TextSurface::new();
        let code = search_exit_code(&mut controller, args.page, &mut surface)?;
        print!("{}", surface.take_output());
        Ok(code)
    }
}

fn search_exit_code<S: Surface>(
    controller: &mut SearchController<ball_catalog_sdk::HttpTransport>,
    page: u32,
    surface: &mut S,
) -> ball_catalog_sdk::Result<ExitCode> {
    let view = controller.search(page, surface)?;
    Ok(match view {
        ball_catalog_sdk::SearchView::Failed { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn show_detail(client: &ball_catalog_sdk::CatalogClient, record_no: i64) -> ball_catalog_sdk::Result<ExitCode> {
    match client.get_ball(record_no)? {
        Some(ball) => {
            println!("{}", serde_json::to_string_pretty(&ball)?);
            println!("{}", client.detail_url(record_no));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Ball {record_no} not found");
            Ok(ExitCode::FAILURE)
        }
    }
}
