//! # REST API for Events
//!
//! `/intake` and `/output` share one set of handlers, parameterised by the
//! event kind. Every request validates the `date` query value first; the method
//! then decides between rendering, inserting and deleting. Mutations answer
//! with an empty body and an `HX-Trigger` header so the page reloads the
//! fragment.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, MethodRouter},
    Form,
};
use shared::{CreateEventForm, EventKind, EventQuery};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::io::html::render_day_log;
use crate::AppState;

pub const HX_TRIGGER: &str = "HX-Trigger";

/// All methods of one event kind's route
pub fn event_routes(kind: EventKind) -> MethodRouter<AppState> {
    get(move |state: State<AppState>, query: QueryResult| get_day_log(kind, state, query))
        .post(
            move |state: State<AppState>,
                  query: QueryResult,
                  form: Result<Form<CreateEventForm>, FormRejection>| {
                create_event(kind, state, query, form)
            },
        )
        .delete(move |state: State<AppState>, query: QueryResult| {
            delete_event(kind, state, query)
        })
        .fallback(move |state: State<AppState>, method: Method, query: QueryResult| {
            unsupported_method(kind, state, method, query)
        })
}

pub type QueryResult = Result<Query<EventQuery>, QueryRejection>;

/// An undecodable query string reads as an empty one, so it fails the date check
fn read_query(query: QueryResult) -> EventQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!("Unreadable query string: {}", rejection);
            EventQuery::default()
        }
    }
}

/// Empty 200 telling htmx which log changed
fn updated(kind: EventKind) -> Response {
    (StatusCode::OK, [(HX_TRIGGER, kind.update_trigger())]).into_response()
}

/// Render the day log fragment
pub async fn get_day_log(
    kind: EventKind,
    State(state): State<AppState>,
    query: QueryResult,
) -> AppResult<Html<String>> {
    let query = read_query(query);
    info!("GET /{} - query: {:?}", kind, query);

    let date = state.event_service.parse_date(query.date.as_deref())?;
    let log = state.event_service.day_log(kind, date).await?;
    let view = state.event_table_service.day_log_view(&log);

    Ok(Html(render_day_log(&view)))
}

/// Add an event from the submitted form
pub async fn create_event(
    kind: EventKind,
    State(state): State<AppState>,
    query: QueryResult,
    form: Result<Form<CreateEventForm>, FormRejection>,
) -> AppResult<Response> {
    let query = read_query(query);
    info!("POST /{} - query: {:?}", kind, query);

    let date = state.event_service.parse_date(query.date.as_deref())?;

    // A missing or unreadable body counts as a form with empty fields
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Unreadable form body: {}", rejection);
            CreateEventForm::default()
        }
    };

    state.event_service.create_event(kind, date, &form).await?;
    Ok(updated(kind))
}

/// Delete one event of the day
pub async fn delete_event(
    kind: EventKind,
    State(state): State<AppState>,
    query: QueryResult,
) -> AppResult<Response> {
    let query = read_query(query);
    info!("DELETE /{} - query: {:?}", kind, query);

    let date = state.event_service.parse_date(query.date.as_deref())?;
    state
        .event_service
        .delete_event(kind, date, query.id.as_deref())
        .await?;

    Ok(updated(kind))
}

/// Anything but GET, POST and DELETE. The date is still checked first.
pub async fn unsupported_method(
    kind: EventKind,
    State(state): State<AppState>,
    method: Method,
    query: QueryResult,
) -> AppError {
    warn!("{} /{} is not supported", method, kind);

    let query = read_query(query);

    match state.event_service.parse_date(query.date.as_deref()) {
        Ok(_) => AppError::InvalidMethod,
        Err(err) => err,
    }
}
