//! Page templates for dashboard views.

use crate::assets::DATABASE_IMAGE;
use crate::templates::{
    Tone, badge, card, empty_state, html_escape, input, layout, notice, page_header, progress,
    radio_group, stats_card, submit_button, table, textarea,
};
use faceabc_ledger::{
    ComplaintRecord, ComplaintStatus, CSV_FILE_NAME, IncidentRecord, IncidentState, TIME_FORMAT,
};
use faceabc_workflow::{
    ComplaintDecision, ComplaintForm, ConfidenceBand, ReviewDecision, Session, WorkflowController,
};

/// A message shown at the top of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Route serving the session's camera frame.
const FRAME_URL: &str = "/camera/frame";

fn database_image_url() -> String {
    format!("/assets/{DATABASE_IMAGE}")
}

fn figure(src: &str, alt: &str, caption: &str, height: &str) -> String {
    format!(
        r#"<figure>
                    <img src="{src}" alt="{alt}" class="rounded-lg border border-gray-200 {height} object-contain">
                    <figcaption class="text-sm text-gray-500 mt-2">{caption}</figcaption>
                </figure>"#
    )
}

fn render_notices(notices: &[Notice]) -> String {
    notices.iter().map(|n| notice(n.tone, &n.message)).collect()
}

fn band_color(band: ConfidenceBand) -> &'static str {
    match band {
        ConfidenceBand::High => "green",
        ConfidenceBand::Medium => "yellow",
        ConfidenceBand::Low => "red",
    }
}

fn band_tone(band: ConfidenceBand) -> Tone {
    match band {
        ConfidenceBand::High => Tone::Success,
        ConfidenceBand::Medium => Tone::Warning,
        ConfidenceBand::Low => Tone::Error,
    }
}

fn state_badge(state: IncidentState) -> String {
    let color = match state {
        IncidentState::Detected => "gray",
        IncidentState::AutoLogged => "green",
        IncidentState::PendingHumanReview => "yellow",
        IncidentState::Decided => "blue",
    };
    badge(state.label(), color)
}

fn status_badge(status: ComplaintStatus) -> String {
    let color = match status {
        ComplaintStatus::Pending => "yellow",
        ComplaintStatus::Compensated => "green",
        ComplaintStatus::Dismissed => "gray",
    };
    badge(&status.to_string(), color)
}

// =============================================================================
// Camera Dashboard
// =============================================================================

pub fn camera_page(
    session: &Session,
    controller: &WorkflowController,
    operator: &str,
    notices: &[Notice],
) -> String {
    let pending_complaints = session.complaints.pending().len();
    let stats = format!(
        r##"<div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
            {records}
            {reviews}
            {complaints}
        </div>"##,
        records = stats_card("Ledger Records", &session.incidents.len().to_string(), "scroll", "blue"),
        reviews = stats_card(
            "Pending Reviews",
            &session.incidents.pending_reviews().len().to_string(),
            "user-check",
            "yellow"
        ),
        complaints = stats_card("Open Complaints", &pending_complaints.to_string(), "comment-dots", "purple"),
    );

    let upload = card(
        "Camera Feed",
        r##"<form action="/camera/upload" method="post" enctype="multipart/form-data" class="flex flex-col md:flex-row gap-4 items-start md:items-end">
            <div class="flex-1 space-y-1">
                <label for="frame" class="block text-sm font-medium text-gray-700">Upload a camera frame</label>
                <input type="file" name="frame" id="frame" accept="image/*" required
                       class="block w-full text-sm text-gray-700 file:mr-4 file:py-2 file:px-4 file:rounded-lg file:border-0 file:bg-primary-50 file:text-primary-700">
            </div>
            <button type="submit" class="bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
                <i class="fas fa-upload mr-2"></i>Upload
            </button>
        </form>"##,
    );

    let analysis = match session.score() {
        Some(score) => {
            let band = controller.band(score);
            format!(
                r##"<div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <img src="{FRAME_URL}" alt="Camera frame" class="rounded-lg border border-gray-200 max-h-72 object-contain">
                    <div class="space-y-4">
                        <div>
                            <p class="text-sm text-gray-500">Confidence</p>
                            <p class="text-3xl font-bold text-gray-900">{score:.2}</p>
                        </div>
                        {bar}
                        {message}
                        <p class="text-xs text-gray-500">Threshold for automatic logging: {threshold:.2}</p>
                    </div>
                </div>"##,
                bar = progress(score, band_color(band)),
                message = notice(band_tone(band), band.message()),
                threshold = controller.threshold(),
            )
        }
        None => empty_state(
            "camera",
            "No frame uploaded",
            "Upload a camera frame to run a face check.",
            None,
        ),
    };

    let actions = format!(
        r##"<div class="flex flex-wrap gap-4">
            <form action="/camera/check" method="post">{check}</form>
            <form action="/camera/force" method="post">{force}</form>
        </div>"##,
        check = submit_button("Run Face Check", "search", "primary"),
        force = submit_button("Force Audit", "user-shield", "danger"),
    );

    let alarm = session.alarm().map_or(String::new(), |alarm| {
        let state = session
            .incidents
            .state_of(&alarm.incident_id)
            .unwrap_or(IncidentState::Detected);
        format!(
            r##"<div class="mt-6">{}</div>"##,
            card(
                "Current Alarm",
                &format!(
                    r##"<div class="flex items-center justify-between">
                        <div>
                            <p class="font-mono text-lg text-gray-900">{id}</p>
                            <p class="text-sm text-gray-500">Confidence {confidence:.2}</p>
                        </div>
                        <div class="flex items-center gap-4">
                            {state}
                            <a href="/review?incident={id}" class="text-primary-600 hover:underline text-sm">Open in review board</a>
                        </div>
                    </div>"##,
                    id = html_escape(&alarm.incident_id),
                    confidence = alarm.confidence,
                    state = state_badge(state),
                )
            )
        )
    });

    let content = format!(
        r##"{header}
        {notices}
        {stats}
        <div class="space-y-6">
            {upload}
            {analysis_card}
            {actions}
        </div>
        {alarm}"##,
        header = page_header("Camera Dashboard", "Simulated facial recognition on uploaded frames"),
        notices = render_notices(notices),
        analysis_card = card("Face Check", &analysis),
    );

    layout("Camera Dashboard", "/", operator, &content)
}

// =============================================================================
// Human Review Board
// =============================================================================

/// Incident shown on the review board: the requested one if it is pending,
/// otherwise the current alarm if pending, otherwise the oldest pending.
pub fn selected_incident(session: &Session, requested: Option<&str>) -> Option<String> {
    let pending = session.incidents.pending_reviews();
    let is_pending = |id: &str| pending.iter().any(|p| p.incident_id == id);

    requested
        .filter(|id| is_pending(id))
        .map(str::to_string)
        .or_else(|| {
            session
                .alarm()
                .map(|a| a.incident_id.as_str())
                .filter(|id| is_pending(id))
                .map(str::to_string)
        })
        .or_else(|| pending.first().map(|p| p.incident_id.clone()))
}

pub fn review_page(
    session: &Session,
    operator: &str,
    requested: Option<&str>,
    notices: &[Notice],
) -> String {
    let pending = session.incidents.pending_reviews();
    let header = page_header("Human Review Board", "Decide incidents that need a human");

    let Some(selected) = selected_incident(session, requested) else {
        let content = format!(
            "{header}{notices}{}",
            card(
                "Pending Reviews",
                &empty_state(
                    "check-double",
                    "Nothing to review",
                    "No incidents are waiting for human review.",
                    Some(("Back to Camera Dashboard", "/")),
                )
            ),
            notices = render_notices(notices),
        );
        return layout("Human Review Board", "/review", operator, &content);
    };

    let options: String = pending
        .iter()
        .map(|p| {
            let chosen = if p.incident_id == selected { "selected" } else { "" };
            format!(
                r#"<option value="{id}" {chosen}>{id} ({confidence:.2})</option>"#,
                id = html_escape(&p.incident_id),
                confidence = p.confidence,
            )
        })
        .collect();

    let confidence = session
        .incidents
        .routed_confidence(&selected)
        .unwrap_or_default();

    let comparison = if session.has_image() {
        format!(
            r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">{}{}</div>"#,
            figure(FRAME_URL, "Uploaded frame", "Uploaded Image", "max-h-64"),
            figure(&database_image_url(), "Database match", "Database Match", "max-h-64"),
        )
    } else {
        notice(Tone::Warning, "No camera frame uploaded; image comparison unavailable.")
    };

    let decisions: Vec<(&str, &str, bool)> = ReviewDecision::ALL
        .iter()
        .map(|d| (d.slug(), d.label(), false))
        .collect();

    let form = format!(
        r##"<form action="/review" method="post" class="space-y-6">
            <div class="space-y-1">
                <label for="incident_id" class="block text-sm font-medium text-gray-700">Incident</label>
                <select name="incident_id" id="incident_id"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900">{options}</select>
            </div>
            {comparison}
            <div class="flex items-center gap-4">
                <span class="text-sm text-gray-500">Match confidence</span>
                <span class="font-semibold text-gray-900">{confidence:.2}</span>
            </div>
            {radios}
            {submit}
        </form>"##,
        radios = radio_group("decision", "Decision", &decisions),
        submit = submit_button("Submit Decision", "gavel", "primary"),
    );

    let content = format!(
        "{header}{notices}{}",
        card(&format!("Pending Reviews ({})", pending.len()), &form),
        notices = render_notices(notices),
    );
    layout("Human Review Board", "/review", operator, &content)
}

// =============================================================================
// System Logs
// =============================================================================

fn record_row(record: &IncidentRecord) -> Vec<String> {
    vec![
        record.time.format(TIME_FORMAT).to_string(),
        format!(r#"<span class="font-mono">{}</span>"#, html_escape(&record.incident_id)),
        record.event.label().to_string(),
        html_escape(&record.action),
        record.confidence_display(),
        record.handled_by.label().to_string(),
    ]
}

pub fn logs_page(records: &[IncidentRecord], operator: &str, incident: Option<&str>) -> String {
    let filter_value = incident.unwrap_or_default();
    let toolbar = format!(
        r##"<div class="flex flex-col md:flex-row gap-4 md:items-end justify-between mb-4">
            <form action="/logs" method="get" class="flex gap-2 items-end">
                {field}
                <button type="submit" class="bg-gray-100 hover:bg-gray-200 text-gray-700 px-4 py-2 rounded-lg">Filter</button>
            </form>
            <a href="/logs.csv" download="{CSV_FILE_NAME}"
               class="inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium">
                <i class="fas fa-download"></i> Download Logs
            </a>
        </div>"##,
        field = input("incident", "Incident ID", filter_value, "INC-1001"),
    );

    let body = if records.is_empty() {
        empty_state("scroll", "No records", "The incident ledger is empty.", None)
    } else {
        let rows: Vec<Vec<String>> = records.iter().map(record_row).collect();
        table(
            &["Time", "Incident ID", "Event", "Action", "Confidence", "Handled By"],
            &rows,
        )
    };

    let content = format!(
        "{header}{}",
        card("Incident Ledger", &format!("{toolbar}{body}")),
        header = page_header("System Logs", "Append-only record of every incident event"),
    );
    layout("System Logs", "/logs", operator, &content)
}

// =============================================================================
// User Complaint Portal
// =============================================================================

pub fn complaint_portal_page(form: &ComplaintForm, operator: &str, notices: &[Notice]) -> String {
    let body = format!(
        r##"<form action="/complaints" method="post" class="space-y-4">
            {user}
            {contact}
            {incident}
            {text}
            {submit}
        </form>"##,
        user = input("user", "Your Name", &form.user, ""),
        contact = input("contact", "Contact Info", &form.contact, "Email or phone"),
        incident = input("incident_id", "Incident ID", &form.incident_id, "INC-1001"),
        text = textarea("text", "Describe the issue", &form.text),
        submit = submit_button("Submit Complaint", "paper-plane", "primary"),
    );

    let content = format!(
        "{header}{notices}{}",
        card("File a Complaint", &body),
        header = page_header(
            "User Complaint Portal",
            "Believe you were misidentified? Tell the ethics board."
        ),
        notices = render_notices(notices),
    );
    layout("User Complaint Portal", "/complaints", operator, &content)
}

// =============================================================================
// Complaint Review
// =============================================================================

/// One pending complaint. The camera frame is shown only when the session has one.
fn complaint_card(complaint: &ComplaintRecord, has_image: bool) -> String {
    let uploaded = if has_image {
        figure(FRAME_URL, "Uploaded frame", "Uploaded Image", "max-h-40")
    } else {
        String::new()
    };
    let images = format!(
        r#"<div class="grid grid-cols-2 gap-4">{uploaded}{}</div>"#,
        figure(&database_image_url(), "Database match", "Database Match", "max-h-40"),
    );

    let decisions: Vec<(&str, &str, bool)> = ComplaintDecision::ALL
        .iter()
        .map(|d| (d.slug(), d.label(), false))
        .collect();

    format!(
        r##"<div class="border border-gray-200 rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-between">
                <div>
                    <span class="font-medium text-gray-900">{user}</span>
                    <span class="text-sm text-gray-500 ml-2">{contact}</span>
                </div>
                <span class="font-mono text-sm text-gray-700">{incident}</span>
            </div>
            <p class="text-gray-700">{text}</p>
            <p class="text-xs text-gray-400">Filed {time}</p>
            {images}
            <form action="/complaints/{id}/decide" method="post" class="flex flex-col md:flex-row gap-4 md:items-end">
                {radios}
                {submit}
            </form>
        </div>"##,
        user = html_escape(&complaint.user),
        contact = html_escape(&complaint.contact),
        incident = html_escape(&complaint.incident_id),
        text = html_escape(&complaint.complaint_text),
        time = complaint.time.format(TIME_FORMAT),
        id = complaint.id,
        radios = radio_group("decision", "Decision", &decisions),
        submit = submit_button("Record Decision", "gavel", "primary"),
    )
}

pub fn complaint_review_page(session: &Session, operator: &str, notices: &[Notice]) -> String {
    let pending = session.complaints.pending();
    let pending_body = if pending.is_empty() {
        empty_state(
            "inbox",
            "No open complaints",
            "Every complaint has been decided.",
            None,
        )
    } else {
        format!(
            r#"<div class="space-y-4">{}</div>"#,
            pending
                .iter()
                .map(|c| complaint_card(c, session.has_image()))
                .collect::<String>()
        )
    };

    let decided: Vec<Vec<String>> = session
        .complaints
        .all()
        .iter()
        .filter(|c| !c.is_pending())
        .map(|c| {
            vec![
                c.decided_at
                    .map(|t| t.format(TIME_FORMAT).to_string())
                    .unwrap_or_default(),
                html_escape(&c.user),
                html_escape(&c.incident_id),
                status_badge(c.status),
            ]
        })
        .collect();

    let history = if decided.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="mt-6">{}</div>"#,
            card(
                "Decided Complaints",
                &table(&["Decided", "User", "Incident ID", "Status"], &decided)
            )
        )
    };

    let content = format!(
        "{header}{notices}{}{history}",
        card(&format!("Open Complaints ({})", pending.len()), &pending_body),
        header = page_header("Complaint Review", "Ethics board decisions on user complaints"),
        notices = render_notices(notices),
    );
    layout("Complaint Review", "/complaints/review", operator, &content)
}
