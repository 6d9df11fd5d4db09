mod render;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use escale_calendar::MonthCursor;
use escale_client::{Config, HttpFlightApi};
use escale_core::{Passenger, ReservationRequest, SearchQuery, SortKey};
use escale_search::{RetryPolicy, SearchController, SearchError};

#[derive(Parser)]
#[command(name = "escale", about = "Recherche et réservation de vols")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search flights; all filters are optional
    Search {
        /// Departure city
        #[arg(long = "from")]
        from: Option<String>,
        /// Arrival city
        #[arg(long = "to")]
        to: Option<String>,
        /// Departure date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Server-side ordering: prix or temps_trajet
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Show remaining seats for a flight
    Seats { flight_id: Uuid },
    /// Reserve seats on a flight
    Reserve {
        flight_id: Uuid,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = 1)]
        seats: u32,
    },
    /// Print the date picker's month view
    Calendar {
        /// Month to display, YYYY-MM; defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escale=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Flight service at {}", config.api.base_url);

    let api = HttpFlightApi::new(&config.api).expect("Failed to build flight API client");
    let controller = SearchController::with_retry(
        Arc::new(api),
        RetryPolicy {
            extra_attempts: config.search.retry_extra_attempts,
            delay: Duration::from_millis(config.search.retry_delay_ms),
        },
    );

    let cli = Cli::parse();
    if let Err(err) = run(cli.command, &controller).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(command: Command, controller: &SearchController) -> Result<(), SearchError> {
    match command {
        Command::Search {
            from,
            to,
            date,
            sort,
        } => {
            let query = SearchQuery {
                departure_city: from,
                arrival_city: to,
                departure_date: date,
                sort_key: sort,
            };
            let flights = controller.search(&query).await?;
            print!("{}", render::render_results(&flights));
        }
        Command::Seats { flight_id } => {
            let seats = controller.available_seats(flight_id).await?;
            println!("Places disponibles: {seats}");
        }
        Command::Reserve {
            flight_id,
            last_name,
            first_name,
            email,
            seats,
        } => {
            let request = ReservationRequest {
                flight_id,
                passenger: Passenger {
                    last_name,
                    first_name,
                    email: email.into(),
                },
                seat_count: seats,
            };
            let response = controller.reserve(&request).await?;
            println!("Réservation confirmée: {}", response.reservation_number);
            println!(
                "Vol {} — {} place(s) pour {} {}",
                response.flight_id,
                response.seat_count,
                response.passenger.first_name,
                response.passenger.last_name
            );
        }
        Command::Calendar { month } => {
            let today = Local::now().date_naive();
            let cursor = match month {
                Some(value) => parse_month(&value)?,
                None => MonthCursor::containing(today),
            };
            print!("{}", render::render_month(cursor, today));
        }
    }
    Ok(())
}

fn parse_month(value: &str) -> Result<MonthCursor, SearchError> {
    let first = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").map_err(|_| {
        escale_core::CoreError::ValidationError(format!(
            "Invalid month (expected YYYY-MM): {value}"
        ))
    })?;
    Ok(MonthCursor::containing(first))
}
