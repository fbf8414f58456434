use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, instrument};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
};
use shared::models::{Appointment, ReminderResponse};

fn reminder_body(appointment: &Appointment) -> String {
    format!(
        "Hi {}, this is a reminder for your {} appointment on {}.",
        appointment.customer_name,
        appointment.service,
        appointment.scheduled_at.0.format("%Y-%m-%d %H:%M")
    )
}

/// Hand off a WhatsApp reminder for an appointment.
///
/// Fire-and-forget: a 200 confirms hand-off to the provider, not delivery.
#[utoipa::path(
    post,
    path = "/api/appointments/{id}/reminder",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Reminder handed off", body = ReminderResponse),
        (status = 404, description = "Unknown appointment"),
        (status = 502, description = "Provider unconfigured or rejected the message")
    ),
    tag = "Reminders"
)]
#[instrument(skip(state))]
pub async fn send_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReminderResponse>> {
    let appointment = state
        .records
        .appointment(id)
        .ok_or_else(|| ApiError::not_found("appointment not found"))?;

    let body = reminder_body(&appointment);
    if let Err(err) = state
        .reminders
        .send_message(&appointment.customer_phone, &body)
        .await
    {
        error!(appointment_id = %id, error = %err, "reminder hand-off failed");
        metrics::counter!("reminders_total", "status" => "error").increment(1);
        return Err(err.into());
    }

    metrics::counter!("reminders_total", "status" => "ok").increment(1);
    Ok(Json(ReminderResponse {
        appointment_id: id,
        to: appointment.customer_phone,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_state::testing::{state_with_sink, test_state},
        services::whatsapp::testing::RecordingSink,
    };
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use chrono::{TimeZone, Utc};
    use http::StatusCode;
    use shared::models::{CreateAppointmentRequest, Timestamp};

    fn seeded_appointment(state: &Arc<AppState>) -> Appointment {
        state.records.create_appointment(CreateAppointmentRequest {
            customer_name: "Dana".into(),
            customer_phone: "+15550100".into(),
            service: "Haircut".into(),
            scheduled_at: Timestamp(Utc.with_ymd_and_hms(2026, 9, 3, 14, 30, 0).unwrap()),
        })
    }

    #[test]
    fn reminder_body_names_customer_service_and_time() {
        let state = test_state();
        let appointment = seeded_appointment(&state);
        let body = reminder_body(&appointment);
        assert_eq!(
            body,
            "Hi Dana, this is a reminder for your Haircut appointment on 2026-09-03 14:30."
        );
    }

    #[tokio::test]
    async fn reminder_is_handed_to_the_sink() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with_sink(sink.clone());
        let appointment = seeded_appointment(&state);

        let app = Router::new()
            .route("/api/appointments/{id}/reminder", post(send_reminder))
            .with_state(state);
        let server = TestServer::new(app).expect("test server");

        let response = server
            .post(&format!("/api/appointments/{}/reminder", appointment.id))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let payload: ReminderResponse = response.json();
        assert_eq!(payload.appointment_id, appointment.id);
        assert_eq!(payload.to, "+15550100");

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+15550100");
        assert!(sent[0].1.contains("Haircut"));
    }

    #[tokio::test]
    async fn unknown_appointment_is_not_found() {
        let app = Router::new()
            .route("/api/appointments/{id}/reminder", post(send_reminder))
            .with_state(test_state());
        let server = TestServer::new(app).expect("test server");

        let response = server
            .post(&format!("/api/appointments/{}/reminder", Uuid::new_v4()))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sink_failure_becomes_bad_gateway() {
        let sink = Arc::new(RecordingSink {
            fail_with_missing_credentials: true,
            ..RecordingSink::default()
        });
        let state = state_with_sink(sink);
        let appointment = seeded_appointment(&state);

        let app = Router::new()
            .route("/api/appointments/{id}/reminder", post(send_reminder))
            .with_state(state);
        let server = TestServer::new(app).expect("test server");

        let response = server
            .post(&format!("/api/appointments/{}/reminder", appointment.id))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);

        let payload: serde_json::Value = response.json();
        assert_eq!(payload["code"], "SHK.REMINDER.UNCONFIGURED");
    }
}
