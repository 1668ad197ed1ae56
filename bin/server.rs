// Hotel Reservation System - Web Server
// JSON API over a single shared HotelRegistry

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use clap::Parser;
use hotel_reservation::{
    init_logging, registry_from_settings, Booking, HotelError, HotelRegistry, Room, Settings,
    SettingsArgs, VERSION,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Shared application state.
///
/// One registry behind one mutex: every request sees the same rooms,
/// bookings and session, and `reserve` is applied as a single step.
#[derive(Clone)]
struct AppState {
    hotel: Arc<Mutex<HotelRegistry>>,
}

impl AppState {
    fn new(hotel: HotelRegistry) -> Self {
        Self {
            hotel: Arc::new(Mutex::new(hotel)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HotelRegistry>, Response> {
        self.hotel.lock().map_err(|_| {
            error!("hotel registry mutex poisoned");
            ApiResponse::<()>::error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        })
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Response {
        let body = ApiResponse::<T> {
            success: false,
            data: None,
            error: Some(message.into()),
        };
        (status, Json(body)).into_response()
    }
}

fn status_for(err: HotelError) -> StatusCode {
    match err {
        HotelError::DuplicateUsername => StatusCode::CONFLICT,
        HotelError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        HotelError::NotSignedIn => StatusCode::UNAUTHORIZED,
        HotelError::UnitUnavailable => StatusCode::CONFLICT,
    }
}

fn hotel_error(err: HotelError) -> Response {
    ApiResponse::<()>::error(status_for(err), err.to_string())
}

// ============================================================================
// Request / response bodies
// ============================================================================

#[derive(Deserialize)]
struct CredentialsRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct ReservationRequest {
    room_number: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

/// Booking plus its signed night count
#[derive(Serialize)]
struct BookingResponse {
    #[serde(flatten)]
    booking: Booking,
    nights: i64,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            nights: booking.nights(),
            booking,
        }
    }
}

#[derive(Serialize)]
struct SessionResponse {
    signed_in: bool,
    username: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok(VERSION))
}

/// POST /api/register - Create an account
async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    let mut hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    match hotel.register(&req.username, &req.password) {
        Ok(()) => (StatusCode::CREATED, Json(ApiResponse::ok(req.username))).into_response(),
        Err(e) => hotel_error(e),
    }
}

/// POST /api/sign-in - Replace the current session
async fn sign_in(State(state): State<AppState>, Json(req): Json<CredentialsRequest>) -> Response {
    let mut hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    match hotel.sign_in(&req.username, &req.password) {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::ok(req.username))).into_response(),
        Err(e) => hotel_error(e),
    }
}

/// POST /api/sign-out - Clear the current session
async fn sign_out(State(state): State<AppState>) -> Response {
    let mut hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    hotel.sign_out();
    (StatusCode::OK, Json(ApiResponse::ok(()))).into_response()
}

/// GET /api/session - Who is signed in
async fn session(State(state): State<AppState>) -> Response {
    let hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    let response = SessionResponse {
        signed_in: hotel.is_signed_in(),
        username: hotel.current_user().map(str::to_string),
    };
    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/rooms - Available rooms
async fn list_rooms(State(state): State<AppState>) -> Response {
    let hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    let rooms: Vec<Room> = hotel.list_available().cloned().collect();
    (StatusCode::OK, Json(ApiResponse::ok(rooms))).into_response()
}

/// POST /api/reservations - Reserve a room for the signed-in guest
async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<ReservationRequest>,
) -> Response {
    let mut hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    match hotel.reserve(req.room_number, req.check_in, req.check_out) {
        Ok(booking) => {
            let response = BookingResponse::from(booking);
            (StatusCode::CREATED, Json(ApiResponse::ok(response))).into_response()
        }
        Err(e) => hotel_error(e),
    }
}

/// GET /api/reservations - Bookings of the signed-in guest
async fn my_reservations(State(state): State<AppState>) -> Response {
    let hotel = match state.lock() {
        Ok(hotel) => hotel,
        Err(resp) => return resp,
    };

    let response = match hotel.my_reservations() {
        Ok(bookings) => {
            let bookings: Vec<BookingResponse> =
                bookings.cloned().map(BookingResponse::from).collect();
            (StatusCode::OK, Json(ApiResponse::ok(bookings))).into_response()
        }
        Err(e) => hotel_error(e),
    };
    response
}

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .route("/session", get(session))
        .route("/rooms", get(list_rooms))
        .route(
            "/reservations",
            get(my_reservations).post(create_reservation),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "hotel-server", version, about = "JSON API for the hotel reservation system")]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Listen address, overrides `server.bind`
    #[arg(long)]
    bind: Option<String>,
}

impl Cli {
    fn apply(&self, settings: Settings) -> Settings {
        let mut settings = self.settings.apply(settings);
        if let Some(bind) = &self.bind {
            settings.server.bind = bind.clone();
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.apply(Settings::load(cli.settings.config.as_deref())?);
    init_logging(&settings.logging.filter)?;

    let hotel = registry_from_settings(&settings)?;
    info!(rooms = hotel.rooms().len(), "registry seeded");

    let listener = tokio::net::TcpListener::bind(&settings.server.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.server.bind))?;

    info!(addr = %settings.server.bind, version = VERSION, "hotel server listening");
    axum::serve(listener, app(AppState::new(hotel)))
        .await
        .context("Server error")?;

    Ok(())
}
