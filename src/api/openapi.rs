//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{badge, drivers, equipment, health, maintenance, notifications, questions, submissions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LiftCheck API",
        version = "1.0.0",
        description = "Forklift Pre-Operation Checklist REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Badge
        badge::check_badge,
        // Equipment
        equipment::list_equipment,
        equipment::get_default_equipment,
        equipment::list_unit_questions,
        equipment::create_equipment,
        equipment::set_default_equipment,
        equipment::delete_equipment,
        // Submissions
        submissions::submit_checklist,
        submissions::list_submissions,
        submissions::list_submission_responses,
        submissions::delete_submission,
        submissions::update_response_notes,
        // Questions
        questions::list_questions,
        questions::create_question,
        questions::update_question,
        questions::set_question_active,
        questions::list_assignments,
        questions::assign_question,
        questions::unassign_question,
        // Drivers
        drivers::list_drivers,
        drivers::create_driver,
        drivers::update_driver,
        drivers::delete_driver,
        // Notifications
        notifications::list_notifications,
        notifications::mark_notification_read,
        notifications::open_maintenance_from_notification,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::create_maintenance,
        maintenance::update_maintenance,
        maintenance::delete_maintenance,
    ),
    components(
        schemas(
            // Badge
            badge::BadgeCheckRequest,
            badge::BadgeCheckResponse,
            // Equipment
            crate::models::equipment::EquipmentUnit,
            crate::models::equipment::CreateEquipmentUnit,
            // Questions
            crate::models::question::Question,
            crate::models::question::CreateQuestion,
            crate::models::question::UpdateQuestion,
            crate::models::question::SetQuestionActive,
            // Drivers
            crate::models::driver::Driver,
            crate::models::driver::CreateDriver,
            crate::models::driver::UpdateDriver,
            // Submissions
            crate::models::submission::Submission,
            crate::models::submission::SubmissionWithEquipment,
            crate::models::submission::ChecklistResponse,
            crate::models::submission::ResponseWithQuestion,
            crate::models::submission::SubmitChecklist,
            crate::models::submission::SubmitResponse,
            crate::models::submission::UpdateResponseNotes,
            // Notifications
            crate::models::notification::FailNotification,
            // Maintenance
            crate::models::maintenance::MaintenanceRecord,
            crate::models::maintenance::CreateMaintenance,
            crate::models::maintenance::UpdateMaintenance,
            crate::models::maintenance::OpenFromNotification,
            // Enums
            crate::models::enums::ResponseStatus,
            crate::models::enums::MaintenancePriority,
            crate::models::enums::MaintenanceStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "badge", description = "Badge validation"),
        (name = "equipment", description = "Equipment unit management"),
        (name = "submissions", description = "Checklist submissions and responses"),
        (name = "questions", description = "Checklist questions and assignments"),
        (name = "drivers", description = "Qualified driver management"),
        (name = "notifications", description = "Fail notifications"),
        (name = "maintenance", description = "Maintenance records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
