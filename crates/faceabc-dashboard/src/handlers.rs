//! Request handlers for the dashboard.
//!
//! Every handler locks the session once, after any request body has been read,
//! and renders from that snapshot.

use axum::{
    Form,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use faceabc_ledger::{CSV_FILE_NAME, RecordFilter, to_csv};
use faceabc_workflow::{
    CameraFrame, ComplaintDecision, ComplaintForm, OutcomeKind, ReviewDecision,
};
use uuid::Uuid;

use crate::api_types::{ComplaintDecisionForm, IncidentParam, ReviewForm};
use crate::error::DashboardError;
use crate::pages::{self, Notice};
use crate::state::AppState;
use crate::templates::Tone;

/// Multipart field carrying the camera frame.
pub const FRAME_FIELD: &str = "frame";

fn multipart_error(err: MultipartError) -> DashboardError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DashboardError::PayloadTooLarge(err.body_text())
    } else {
        DashboardError::InvalidRequest(err.body_text())
    }
}

fn review_location(incident_id: &str) -> String {
    format!("/review?incident={incident_id}")
}

fn outcome_tone(kind: OutcomeKind) -> Tone {
    match kind {
        OutcomeKind::Alert => Tone::Error,
        OutcomeKind::Cleared => Tone::Success,
        OutcomeKind::Escalated => Tone::Info,
    }
}

// =============================================================================
// Camera Dashboard
// =============================================================================

/// Handler for the camera dashboard.
pub async fn camera(State(state): State<AppState>) -> Html<String> {
    let session = state.session();
    Html(pages::camera_page(
        &session,
        state.controller(),
        &state.config().dashboard.operator,
        &[],
    ))
}

fn camera_with(state: &AppState, status: StatusCode, notice: Notice) -> Response {
    let session = state.session();
    let html = pages::camera_page(
        &session,
        state.controller(),
        &state.config().dashboard.operator,
        &[notice],
    );
    (status, Html(html)).into_response()
}

/// Store an uploaded frame and draw a score for it.
pub async fn camera_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, DashboardError> {
    let mut frame = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FRAME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .map(str::to_string)
            .or_else(|| {
                file_name
                    .as_deref()
                    .and_then(|name| mime_guess::from_path(name).first())
                    .map(|mime| mime.to_string())
            })
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if !bytes.is_empty() {
            frame = Some(CameraFrame {
                bytes: bytes.to_vec(),
                content_type,
                file_name,
            });
        }
    }

    let Some(frame) = frame else {
        return Ok(camera_with(
            &state,
            StatusCode::BAD_REQUEST,
            Notice::new(Tone::Warning, "Choose an image to upload."),
        ));
    };

    let score = state.draw_score();
    tracing::info!(
        bytes = frame.bytes.len(),
        content_type = %frame.content_type,
        score,
        "Camera frame uploaded"
    );
    state.session().set_frame(frame, score);

    Ok(Redirect::to("/").into_response())
}

/// Route the current frame's score. Uncertain matches go to the review board.
pub async fn camera_check(State(state): State<AppState>) -> Response {
    let decision = {
        let mut session = state.session();
        state.controller().run_face_check(&mut session)
    };

    match decision {
        None => camera_with(
            &state,
            StatusCode::BAD_REQUEST,
            Notice::new(Tone::Warning, "Upload a camera frame before running a face check."),
        ),
        Some(d) if d.requires_review() => Redirect::to(&review_location(&d.incident_id)).into_response(),
        Some(d) => camera_with(
            &state,
            StatusCode::OK,
            Notice::new(
                Tone::Success,
                format!("Match logged automatically as {}.", d.incident_id),
            ),
        ),
    }
}

/// Force the next incident into human review.
pub async fn camera_force(State(state): State<AppState>) -> Redirect {
    let decision = state.controller().force_audit(&mut state.session());
    Redirect::to(&review_location(&decision.incident_id))
}

/// The uploaded frame, as uploaded.
pub async fn camera_frame(State(state): State<AppState>) -> Result<Response, DashboardError> {
    let session = state.session();
    let frame = session
        .frame()
        .ok_or_else(|| DashboardError::NotFound("camera frame".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, frame.content_type.clone())],
        frame.bytes.clone(),
    )
        .into_response())
}

// =============================================================================
// Human Review Board
// =============================================================================

/// Handler for the review board.
pub async fn review(
    State(state): State<AppState>,
    Query(params): Query<IncidentParam>,
) -> Html<String> {
    let session = state.session();
    Html(pages::review_page(
        &session,
        &state.config().dashboard.operator,
        params.incident.as_deref(),
        &[],
    ))
}

/// Record a reviewer decision.
pub async fn review_submit(State(state): State<AppState>, Form(form): Form<ReviewForm>) -> Response {
    let operator = &state.config().dashboard.operator;

    let decision = match form.decision.parse::<ReviewDecision>() {
        Ok(decision) => decision,
        Err(_) => {
            let session = state.session();
            let html = pages::review_page(
                &session,
                operator,
                Some(&form.incident_id),
                &[Notice::new(Tone::Warning, "Choose a decision before submitting.")],
            );
            return (StatusCode::BAD_REQUEST, Html(html)).into_response();
        }
    };

    let mut session = state.session();
    match state
        .controller()
        .submit_review(&mut session, &form.incident_id, decision)
    {
        Ok(outcome) => {
            let notices = [
                Notice::new(outcome_tone(outcome.kind), outcome.message()),
                Notice::new(Tone::Success, outcome.confirmation()),
            ];
            Html(pages::review_page(&session, operator, None, &notices)).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            let status = DashboardError::from(e).status_code();
            let html = pages::review_page(
                &session,
                operator,
                Some(&form.incident_id),
                &[Notice::new(Tone::Error, message)],
            );
            (status, Html(html)).into_response()
        }
    }
}

// =============================================================================
// System Logs
// =============================================================================

/// Handler for the system logs page.
pub async fn logs(State(state): State<AppState>, Query(params): Query<IncidentParam>) -> Html<String> {
    let incident = params.incident.filter(|id| !id.is_empty());
    let session = state.session();
    let records = session.incidents.query(&RecordFilter {
        incident_id: incident.clone(),
        ..Default::default()
    });

    Html(pages::logs_page(
        &records,
        &state.config().dashboard.operator,
        incident.as_deref(),
    ))
}

/// The full incident ledger as CSV.
pub async fn logs_csv(State(state): State<AppState>) -> Response {
    let csv = to_csv(state.session().incidents.records());
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response()
}

// =============================================================================
// Complaints
// =============================================================================

/// Handler for the complaint portal.
pub async fn complaint_portal(State(state): State<AppState>) -> Html<String> {
    Html(pages::complaint_portal_page(
        &ComplaintForm::default(),
        &state.config().dashboard.operator,
        &[],
    ))
}

/// File a complaint.
pub async fn complaint_submit(
    State(state): State<AppState>,
    Form(form): Form<ComplaintForm>,
) -> Response {
    let operator = &state.config().dashboard.operator;
    let result = {
        let mut session = state.session();
        state.controller().submit_complaint(&mut session, &form)
    };

    match result {
        Ok(complaint) => {
            let notice = Notice::new(
                Tone::Success,
                format!(
                    "Complaint submitted for {}. The ethics board will review it.",
                    complaint.incident_id
                ),
            );
            Html(pages::complaint_portal_page(&ComplaintForm::default(), operator, &[notice]))
                .into_response()
        }
        Err(e) => {
            let message = e.to_string();
            let status = DashboardError::from(e).status_code();
            // Keep what the user typed.
            let html = pages::complaint_portal_page(&form, operator, &[Notice::new(Tone::Warning, message)]);
            (status, Html(html)).into_response()
        }
    }
}

/// Handler for the complaint review page.
pub async fn complaint_review(State(state): State<AppState>) -> Html<String> {
    let session = state.session();
    Html(pages::complaint_review_page(
        &session,
        &state.config().dashboard.operator,
        &[],
    ))
}

/// Record the ethics board's decision on a complaint.
pub async fn complaint_decide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ComplaintDecisionForm>,
) -> Response {
    let operator = &state.config().dashboard.operator;
    let mut session = state.session();

    let (status, notice) = match form.decision.parse::<ComplaintDecision>() {
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Notice::new(Tone::Warning, "Choose a decision before submitting."),
        ),
        Ok(decision) => match state.controller().decide_complaint(&mut session, id, decision) {
            Ok(resolution) => (StatusCode::OK, Notice::new(Tone::Success, resolution.message())),
            Err(e) => {
                let message = e.to_string();
                (DashboardError::from(e).status_code(), Notice::new(Tone::Error, message))
            }
        },
    };

    let html = pages::complaint_review_page(&session, operator, &[notice]);
    (status, Html(html)).into_response()
}

// =============================================================================
// API Handlers (JSON responses)
// =============================================================================

pub mod api {
    use super::*;
    use crate::api_types::*;
    use axum::Json;

    /// List ledger records.
    pub async fn incidents(
        State(state): State<AppState>,
        Query(query): Query<IncidentQuery>,
    ) -> Json<RecordListResponse> {
        let filter = RecordFilter {
            incident_id: query.incident_id,
            event: query.event,
            actor: query.actor,
            newest_first: query.newest_first,
            limit: query.limit,
        };
        let records = state.session().incidents.query(&filter);
        Json(RecordListResponse {
            total: records.len(),
            records,
        })
    }

    /// One incident's reconstructed state and history.
    pub async fn incident_get(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<IncidentResponse>, DashboardError> {
        let session = state.session();
        let incident_state = session
            .incidents
            .state_of(&id)
            .ok_or_else(|| DashboardError::NotFound(format!("incident {id}")))?;

        Ok(Json(IncidentResponse {
            confidence: session.incidents.routed_confidence(&id),
            history: session.incidents.history(&id).into_iter().cloned().collect(),
            state: incident_state,
            incident_id: id,
        }))
    }

    /// The human review queue.
    pub async fn reviews(State(state): State<AppState>) -> Json<Vec<PendingReviewResponse>> {
        let pending = state.session().incidents.pending_reviews();
        Json(pending.into_iter().map(Into::into).collect())
    }

    /// All complaints in filing order.
    pub async fn complaints(State(state): State<AppState>) -> Json<Vec<ComplaintResponse>> {
        let session = state.session();
        Json(session.complaints.all().iter().map(Into::into).collect())
    }

    pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
        let session = state.session();
        Json(HealthResponse {
            status: "ok",
            records: session.incidents.len(),
            pending_reviews: session.incidents.pending_reviews().len(),
            pending_complaints: session.complaints.pending().len(),
        })
    }
}
