use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::health))
        .merge(event_routes())
        .merge(student_routes())
        .merge(participation_routes())
        .merge(report_routes())
        .merge(staff_routes())
        .merge(self_service_routes())
}

fn event_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::event::list_events,
            handlers::event::create_event
        ))
        .routes(routes!(handlers::event::delete_event))
}

fn student_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::student::create_student))
        .routes(routes!(handlers::student::find_or_create_student))
}

fn participation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::registration::register_student))
        .routes(routes!(handlers::registration::list_registrations))
        .routes(routes!(
            handlers::attendance::mark_attendance,
            handlers::attendance::list_attendance
        ))
        .routes(routes!(handlers::feedback::submit_feedback))
}

fn report_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::report::registrations))
        .routes(routes!(handlers::report::attendance))
        .routes(routes!(handlers::report::feedback))
        .routes(routes!(handlers::report::event_analysis))
        .routes(routes!(handlers::report::student_analysis))
        .routes(routes!(handlers::report::student_participation))
        .routes(routes!(handlers::report::top_students))
        .routes(routes!(handlers::report::events_by_type))
}

fn staff_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::staff::list_events))
        .routes(routes!(handlers::staff::event_registrations))
        .routes(routes!(handlers::staff::mark_attendance))
        .routes(routes!(handlers::staff::event_attendance))
        .routes(routes!(handlers::staff::list_feedback))
}

fn self_service_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::me::participation))
        .routes(routes!(handlers::me::feedback))
}
