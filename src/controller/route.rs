use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::flight_route::RouteVisibility;

use crate::{
    controller::MultipartForm,
    error::AppError,
    middleware::auth::{AuthClaims, AuthGuard, OptionalAuthClaims, Permission},
    model::route::{CreateRouteParams, RouteQuery, UpdateRouteParams, Waypoint},
    service::{
        media::{MediaService, ROUTE_FILE_DIR},
        route::RouteService,
    },
    state::AppState,
};

use super::parse_field;

/// List routes visible to the viewer, with search filters and ordering.
pub async fn list_routes(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Query(query): Query<RouteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let routes = RouteService::new(&state).list(&query, viewer_id).await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Create a route (multipart).
///
/// Text fields: `title`, `departure`, `destination`, coordinates,
/// `description`, `flight_date` (YYYY-MM-DD), `flight_duration` (seconds),
/// `distance`, `aircraft_type`, `visibility` (public/followers/private, or
/// the legacy `is_public` flag) and `waypoints` (JSON array). File field:
/// `route_file`.
///
/// # Returns
/// - `201 Created` - The new route
/// - `400 Bad Request` - Missing required fields or malformed waypoints
/// - `403 Forbidden` - Demo (read-only) account
pub async fn create_route(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let form = MultipartForm::read(multipart).await?;

    let title = required_text(&form, "title")?;
    let departure = required_text(&form, "departure")?;
    let destination = required_text(&form, "destination")?;

    let params = CreateRouteParams {
        pilot_id: user.id,
        title,
        departure,
        destination,
        departure_lat: parse_field(&form, "departure_lat")?,
        departure_lng: parse_field(&form, "departure_lng")?,
        destination_lat: parse_field(&form, "destination_lat")?,
        destination_lng: parse_field(&form, "destination_lng")?,
        description: optional_text(&form, "description"),
        flight_date: parse_flight_date(&form)?,
        flight_duration: parse_field(&form, "flight_duration")?,
        distance: parse_field(&form, "distance")?,
        aircraft_type: optional_text(&form, "aircraft_type"),
        route_file: upload_route_file(&state, &form).await?,
        waypoints: parse_waypoints(&form)?,
        visibility: parse_visibility(&form)?.unwrap_or(RouteVisibility::Public),
    };

    let route = RouteService::new(&state).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(route)))
}

/// Get a single route; hidden routes 404.
pub async fn route_detail(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let route = RouteService::new(&state).get(route_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Update the caller's own route (multipart, partial).
pub async fn update_route(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(route_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let form = MultipartForm::read(multipart).await?;

    let params = UpdateRouteParams {
        title: optional_text(&form, "title"),
        departure: optional_text(&form, "departure"),
        destination: optional_text(&form, "destination"),
        departure_lat: parse_field(&form, "departure_lat")?,
        departure_lng: parse_field(&form, "departure_lng")?,
        destination_lat: parse_field(&form, "destination_lat")?,
        destination_lng: parse_field(&form, "destination_lng")?,
        description: optional_text(&form, "description"),
        flight_date: parse_flight_date(&form)?,
        flight_duration: parse_field(&form, "flight_duration")?,
        distance: parse_field(&form, "distance")?,
        aircraft_type: optional_text(&form, "aircraft_type"),
        route_file: upload_route_file(&state, &form).await?,
        waypoints: parse_waypoints(&form)?,
        visibility: parse_visibility(&form)?,
    };

    let route = RouteService::new(&state)
        .update(&user, route_id, params)
        .await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Delete the caller's own route.
pub async fn delete_route(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    RouteService::new(&state).delete(&user, route_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Toggle a like on a visible route. Open to demo accounts.
pub async fn like_route(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let result = RouteService::new(&state).like_toggle(&user, route_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Toggle a save on a visible route. Open to demo accounts.
pub async fn save_route(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let result = RouteService::new(&state).save_toggle(&user, route_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// The caller's own routes, all visibilities.
pub async fn my_routes(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let routes = RouteService::new(&state).mine(&user).await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Routes the caller saved and can still see.
pub async fn saved_routes(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let routes = RouteService::new(&state).saved(&user).await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Routes from pilots the caller follows.
pub async fn following_routes(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let routes = RouteService::new(&state).following_feed(&user).await?;

    Ok((StatusCode::OK, Json(routes)))
}

fn required_text(form: &MultipartForm, name: &str) -> Result<String, AppError> {
    match form.text(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(AppError::Validation {
            field: name.to_string(),
            message: format!("'{}' is required.", name),
        }),
    }
}

fn optional_text(form: &MultipartForm, name: &str) -> Option<String> {
    form.text(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_flight_date(form: &MultipartForm) -> Result<Option<NaiveDate>, AppError> {
    match form.text("flight_date") {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation {
                field: "flight_date".to_string(),
                message: "Expected a date formatted YYYY-MM-DD.".to_string(),
            }),
    }
}

/// Parses and validates the `waypoints` JSON field. The submitted JSON must
/// be an array of `{name?, lat, lng}` objects; anything else is a 400.
fn parse_waypoints(form: &MultipartForm) -> Result<Option<serde_json::Value>, AppError> {
    match form.text("waypoints") {
        None | Some("") => Ok(None),
        Some(raw) => {
            let waypoints: Vec<Waypoint> =
                serde_json::from_str(raw).map_err(|_| AppError::Validation {
                    field: "waypoints".to_string(),
                    message: "Expected a JSON array of {name, lat, lng} objects.".to_string(),
                })?;

            Ok(Some(serde_json::json!(waypoints)))
        }
    }
}

/// Parses `visibility`, falling back to the legacy `is_public` flag when the
/// explicit field is absent.
fn parse_visibility(form: &MultipartForm) -> Result<Option<RouteVisibility>, AppError> {
    match form.text("visibility") {
        Some("public") => Ok(Some(RouteVisibility::Public)),
        Some("followers") => Ok(Some(RouteVisibility::Followers)),
        Some("private") => Ok(Some(RouteVisibility::Private)),
        Some("") | None => match form.text("is_public") {
            Some(_) if form.flag("is_public") => Ok(Some(RouteVisibility::Public)),
            Some(_) => Ok(Some(RouteVisibility::Private)),
            None => Ok(None),
        },
        Some(_) => Err(AppError::Validation {
            field: "visibility".to_string(),
            message: "Expected one of: public, followers, private.".to_string(),
        }),
    }
}

async fn upload_route_file(
    state: &AppState,
    form: &MultipartForm,
) -> Result<Option<String>, AppError> {
    let Some(file) = form.file_named("route_file") else {
        return Ok(None);
    };

    let media = MediaService::new(&state.http_client, &state.media);
    let key = media
        .upload(ROUTE_FILE_DIR, &file.filename, file.bytes.clone())
        .await?;

    Ok(Some(key))
}

#[cfg(test)]
mod test {
    use super::*;

    fn form_with(name: &str, value: &str) -> MultipartForm {
        let mut form = MultipartForm::default();
        form.fields.insert(name.to_string(), value.to_string());
        form
    }

    #[test]
    fn visibility_prefers_the_explicit_field() {
        let form = form_with("visibility", "followers");
        assert!(matches!(
            parse_visibility(&form),
            Ok(Some(RouteVisibility::Followers))
        ));
    }

    #[test]
    fn legacy_is_public_flag_still_works() {
        assert!(matches!(
            parse_visibility(&form_with("is_public", "true")),
            Ok(Some(RouteVisibility::Public))
        ));
        assert!(matches!(
            parse_visibility(&form_with("is_public", "false")),
            Ok(Some(RouteVisibility::Private))
        ));
        assert!(matches!(
            parse_visibility(&MultipartForm::default()),
            Ok(None)
        ));
    }

    #[test]
    fn malformed_waypoints_are_a_field_error() {
        let form = form_with("waypoints", "{\"lat\": 1}");

        match parse_waypoints(&form) {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "waypoints"),
            other => panic!("expected a validation error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn waypoints_accept_optional_names() {
        let form = form_with(
            "waypoints",
            r#"[{"name": "VOR BAM", "lat": 52.1, "lng": 13.5}, {"lat": 50.0, "lng": 8.6}]"#,
        );

        let value = parse_waypoints(&form).ok().flatten();
        assert!(value.is_some());
    }
}
