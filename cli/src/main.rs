#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use flights::{
    ApiError, ApiResponse, CreateFlightRequest, DateFormat, FieldError, Flight, FlightEndpoint, FlightField,
    FlightSearchRequest, FlightStatus, PageResponse, UpdateFlightRequest, format_flight_date, status_label,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", .0.user_message("flight API request failed"))]
    Api(#[from] ApiError),
    #[error("invalid {field}: {source}")]
    Invalid { field: &'static str, source: FieldError },
    #[error("nothing to update; pass --status, --gate or --departure-time")]
    EmptyUpdate,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to read confirmation: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flightdesk-cli", about = "Flight records CLI")]
struct Cli {
    /// Flight API root: the host's `/api` proxy or the remote API itself.
    #[arg(long, env = "FLIGHTDESK_BASE_URL", default_value = "http://127.0.0.1:3000/api")]
    base_url: String,

    /// Print flights as text rows instead of JSON, with departure times in
    /// this format: short, time, date, or medium.
    #[arg(long, global = true, value_name = "FORMAT")]
    dates: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// How read commands render flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Json,
    Rows(DateFormat),
}

impl Output {
    fn from_arg(dates: Option<&str>) -> Self {
        dates.map_or(Self::Json, |name| Self::Rows(DateFormat::named(&name.trim().to_ascii_lowercase())))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the flight API answers a one-row listing.
    Ping,
    Flights(FlightsCommand),
}

#[derive(Args, Debug)]
struct FlightsCommand {
    #[command(subcommand)]
    command: FlightsSubcommand,
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    size: u32,
}

#[derive(Subcommand, Debug)]
enum FlightsSubcommand {
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    Search {
        #[arg(long, default_value = "")]
        flight_number: String,
        #[arg(long, default_value = "")]
        airline: String,
        #[arg(long, default_value = "")]
        status: String,
        #[command(flatten)]
        paging: PageArgs,
    },
    Get {
        id: i64,
    },
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    airline: String,
    #[arg(long)]
    destination: String,
    #[arg(long)]
    gate: String,
    /// `YYYY-MM-DDTHH:MM` or a full ISO-8601 timestamp.
    #[arg(long)]
    departure_time: String,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: i64,
    #[arg(long, value_parser = parse_status)]
    status: Option<FlightStatus>,
    #[arg(long)]
    gate: Option<String>,
    #[arg(long)]
    departure_time: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url;
    let output = Output::from_arg(cli.dates.as_deref());

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Flights(flights) => run_flights(&base_url, output, flights).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let _: PageResponse<Flight> = fetch_enveloped(base_url, FlightEndpoint::List { page: 0, size: 1 }).await?;
    println!("ok");
    Ok(())
}

async fn run_flights(base_url: &str, output: Output, flights: FlightsCommand) -> Result<(), CliError> {
    match flights.command {
        FlightsSubcommand::List { paging } => {
            let endpoint = FlightEndpoint::List { page: paging.page, size: paging.size };
            let page: PageResponse<Flight> = fetch_enveloped(base_url, endpoint).await?;
            print_page(output, page)
        }
        FlightsSubcommand::Search { flight_number, airline, status, paging } => {
            let criteria = FlightSearchRequest::from_inputs(&flight_number, &airline, &status);
            let endpoint = FlightEndpoint::Search { criteria: &criteria, page: paging.page, size: paging.size };
            let page: PageResponse<Flight> = fetch_enveloped(base_url, endpoint).await?;
            print_page(output, page)
        }
        FlightsSubcommand::Get { id } => {
            let flight: Flight = fetch_enveloped(base_url, FlightEndpoint::Get(id)).await?;
            match output {
                Output::Json => print_json(&serde_json::to_value(flight)?),
                Output::Rows(dates) => {
                    println!("{}", flight_row(&flight, dates));
                    Ok(())
                }
            }
        }
        FlightsSubcommand::Create(args) => {
            let body = create_request(args)?;
            let value = api_request(base_url, reqwest::Method::POST, FlightEndpoint::Create, Some(serde_json::to_value(body)?))
                .await?;
            print_json(&value)
        }
        FlightsSubcommand::Update(args) => {
            let id = args.id;
            let body = update_request(args)?;
            let value =
                api_request(base_url, reqwest::Method::PATCH, FlightEndpoint::Update(id), Some(serde_json::to_value(body)?))
                    .await?;
            print_json(&value)
        }
        FlightsSubcommand::Delete { id, yes } => {
            if !yes {
                let prompt = format!("Delete flight {id}? This cannot be undone. [y/N] ");
                if !confirm(&prompt, io::stdin().lock(), io::stderr())? {
                    eprintln!("aborted");
                    return Ok(());
                }
            }
            api_request(base_url, reqwest::Method::DELETE, FlightEndpoint::Delete(id), None).await?;
            println!("deleted flight {id}");
            Ok(())
        }
    }
}

/// Validate create inputs with the same rules as the form.
fn create_request(args: CreateArgs) -> Result<CreateFlightRequest, CliError> {
    check(FlightField::Airline, &args.airline)?;
    check(FlightField::Destination, &args.destination)?;
    check(FlightField::Gate, &args.gate)?;
    check(FlightField::DepartureTime, &args.departure_time)?;
    Ok(CreateFlightRequest {
        airline: args.airline,
        destination: args.destination,
        gate: args.gate,
        departure_time: args.departure_time,
    })
}

/// Validate provided update inputs; omitted fields stay omitted.
fn update_request(args: UpdateArgs) -> Result<UpdateFlightRequest, CliError> {
    if let Some(gate) = &args.gate {
        check(FlightField::Gate, gate)?;
    }
    if let Some(departure_time) = &args.departure_time {
        check(FlightField::DepartureTime, departure_time)?;
    }
    let body = UpdateFlightRequest { status: args.status, gate: args.gate, departure_time: args.departure_time };
    if body.is_empty() {
        return Err(CliError::EmptyUpdate);
    }
    Ok(body)
}

fn check(field: FlightField, value: &str) -> Result<(), CliError> {
    field.check(value).map_err(|source| CliError::Invalid { field: field.label(), source })
}

fn parse_status(raw: &str) -> Result<FlightStatus, String> {
    FlightStatus::parse(&raw.trim().to_ascii_uppercase()).ok_or_else(|| {
        let known: Vec<&str> = FlightStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown status {raw:?}; expected one of {}", known.join(", "))
    })
}

/// Ask `prompt` on `output` and read one answer line from `input`.
fn confirm(prompt: &str, mut input: impl BufRead, mut output: impl Write) -> Result<bool, CliError> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn fetch_enveloped<T: DeserializeOwned>(base_url: &str, endpoint: FlightEndpoint<'_>) -> Result<T, CliError> {
    let fallback = match endpoint {
        FlightEndpoint::Get(_) => "Failed to fetch flight",
        _ => "Failed to fetch flights",
    };
    let value = api_request(base_url, reqwest::Method::GET, endpoint, None).await?;
    let envelope: ApiResponse<T> = serde_json::from_value(value)?;
    Ok(envelope.into_data(fallback)?)
}

async fn api_request(
    base_url: &str,
    method: reqwest::Method,
    endpoint: FlightEndpoint<'_>,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let request = client.request(method, endpoint.url(base_url)).query(&endpoint.query());
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &text).into());
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn print_page(output: Output, page: PageResponse<Flight>) -> Result<(), CliError> {
    match output {
        Output::Json => print_json(&serde_json::to_value(page)?),
        Output::Rows(dates) => {
            for flight in &page.content {
                println!("{}", flight_row(flight, dates));
            }
            println!("page {} of {} ({} flights)", page.number + 1, page.total_pages.max(1), page.total_elements);
            Ok(())
        }
    }
}

/// One tab-separated line: id, number, airline, destination, gate,
/// departure, status.
fn flight_row(flight: &Flight, dates: DateFormat) -> String {
    [
        flight.id.to_string(),
        flight.flight_number.clone(),
        flight.airline.clone(),
        flight.destination.clone(),
        flight.gate.clone(),
        format_flight_date(&flight.departure_time, dates),
        status_label(flight.status).to_owned(),
    ]
    .join("\t")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
