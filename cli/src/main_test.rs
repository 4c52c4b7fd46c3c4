use clap::Parser;

use super::*;

fn create_args(gate: &str) -> CreateArgs {
    CreateArgs {
        airline: "KLM".to_owned(),
        destination: "Amsterdam".to_owned(),
        gate: gate.to_owned(),
        departure_time: "2025-03-05T14:30".to_owned(),
    }
}

#[test]
fn base_url_defaults_to_host_proxy() {
    let cli = Cli::try_parse_from(["flightdesk-cli", "ping"]).unwrap();
    assert_eq!(cli.base_url, "http://127.0.0.1:3000/api");
    assert!(matches!(cli.command, Command::Ping));
}

#[test]
fn list_uses_default_paging() {
    let cli = Cli::try_parse_from(["flightdesk-cli", "flights", "list"]).unwrap();
    let Command::Flights(FlightsCommand { command: FlightsSubcommand::List { paging } }) = cli.command else {
        panic!("expected flights list");
    };
    assert_eq!(paging.page, 0);
    assert_eq!(paging.size, DEFAULT_PAGE_SIZE);
}

#[test]
fn update_parses_status_case_insensitively() {
    let cli = Cli::try_parse_from(["flightdesk-cli", "flights", "update", "4", "--status", "on_time"]).unwrap();
    let Command::Flights(FlightsCommand { command: FlightsSubcommand::Update(args) }) = cli.command else {
        panic!("expected flights update");
    };
    assert_eq!(args.id, 4);
    assert_eq!(args.status, Some(FlightStatus::OnTime));
}

#[test]
fn update_rejects_unknown_status() {
    let err = Cli::try_parse_from(["flightdesk-cli", "flights", "update", "4", "--status", "boarding"]).unwrap_err();
    assert!(err.to_string().contains("unknown status"));
}

#[test]
fn create_request_accepts_valid_input() {
    let body = create_request(create_args("A12")).unwrap();
    assert_eq!(body.gate, "A12");
    assert_eq!(body.departure_time, "2025-03-05T14:30");
}

#[test]
fn create_request_rejects_bad_gate() {
    let err = create_request(create_args("a12")).unwrap_err();
    assert!(matches!(err, CliError::Invalid { field: "Gate", source: FieldError::GatePattern }));
}

#[test]
fn create_request_rejects_short_airline() {
    let mut args = create_args("B3");
    args.airline = "K".to_owned();
    let err = create_request(args).unwrap_err();
    assert_eq!(err.to_string(), "invalid Airline: must be at least 2 characters");
}

#[test]
fn update_request_requires_a_change() {
    let args = UpdateArgs { id: 1, status: None, gate: None, departure_time: None };
    assert!(matches!(update_request(args), Err(CliError::EmptyUpdate)));
}

#[test]
fn update_request_validates_only_provided_fields() {
    let args = UpdateArgs { id: 1, status: Some(FlightStatus::Delayed), gate: None, departure_time: None };
    let body = update_request(args).unwrap();
    assert_eq!(body.status, Some(FlightStatus::Delayed));
    assert_eq!(body.gate, None);

    let args = UpdateArgs { id: 1, status: None, gate: Some("123".to_owned()), departure_time: None };
    assert!(matches!(update_request(args), Err(CliError::Invalid { field: "Gate", .. })));
}

#[test]
fn confirm_accepts_yes_variants_only() {
    let mut prompt = Vec::new();
    assert!(confirm("Delete? ", "Y\n".as_bytes(), &mut prompt).unwrap());
    assert_eq!(prompt, b"Delete? ");

    assert!(confirm("Delete? ", " yes \n".as_bytes(), Vec::new()).unwrap());
    assert!(!confirm("Delete? ", "n\n".as_bytes(), Vec::new()).unwrap());
    assert!(!confirm("Delete? ", "".as_bytes(), Vec::new()).unwrap());
}

#[test]
fn api_error_display_prefers_server_message() {
    let err = CliError::from(ApiError::Status { status: 404, message: Some("Flight not found".to_owned()) });
    assert_eq!(err.to_string(), "Flight not found");
    let err = CliError::from(ApiError::Transport("reset".to_owned()));
    assert_eq!(err.to_string(), "flight API request failed");
}

fn sample_flight() -> Flight {
    Flight {
        id: 7,
        flight_number: "KL1234".to_owned(),
        airline: "KLM".to_owned(),
        destination: "Amsterdam".to_owned(),
        gate: "A12".to_owned(),
        departure_time: "2025-03-05T14:30:00".to_owned(),
        status: FlightStatus::OnTime,
    }
}

#[test]
fn output_is_json_without_dates_option() {
    let cli = Cli::try_parse_from(["flightdesk-cli", "flights", "list"]).unwrap();
    assert_eq!(Output::from_arg(cli.dates.as_deref()), Output::Json);
}

#[test]
fn dates_option_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["flightdesk-cli", "flights", "get", "7", "--dates", "Time"]).unwrap();
    assert_eq!(Output::from_arg(cli.dates.as_deref()), Output::Rows(DateFormat::Time));
}

#[test]
fn unknown_dates_name_falls_back_to_medium() {
    assert_eq!(Output::from_arg(Some("fancy")), Output::Rows(DateFormat::Medium));
    assert_eq!(Output::from_arg(Some(" short ")), Output::Rows(DateFormat::Short));
}

#[test]
fn flight_row_formats_departure_with_chosen_style() {
    let flight = sample_flight();
    assert_eq!(flight_row(&flight, DateFormat::Short), "7\tKL1234\tKLM\tAmsterdam\tA12\tMar 5, 02:30 PM\tOn Time");
    assert_eq!(flight_row(&flight, DateFormat::Date), "7\tKL1234\tKLM\tAmsterdam\tA12\tWed, Mar 5\tOn Time");
}
