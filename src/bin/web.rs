//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use scoreboard_web::{
    advance_round, advancing_count, standings, Scoreboard, ScoreboardId, TeamStanding,
    DEFAULT_ADVANCE_COUNT,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-scoreboard entry: scoreboard data + last activity time (for auto-cleanup).
struct ScoreboardEntry {
    scoreboard: Scoreboard,
    last_activity: Instant,
}

/// In-memory state: many scoreboards by ID (sessioned). Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<ScoreboardId, ScoreboardEntry>>>;

/// Inactivity threshold: scoreboards not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Scoreboard state plus the derived ranking, as one payload for the client.
#[derive(serde::Serialize)]
struct ScoreboardView {
    id: ScoreboardId,
    current_round: u32,
    advance_count: usize,
    /// Clamped count for the stats readout: min(advance_count, total_teams).
    advancing: usize,
    total_teams: usize,
    teams: Vec<TeamStanding>,
}

fn view(board: &Scoreboard) -> ScoreboardView {
    ScoreboardView {
        id: board.id,
        current_round: board.current_round,
        advance_count: board.advance_count,
        advancing: advancing_count(board),
        total_teams: board.teams.len(),
        teams: standings(board),
    }
}

#[derive(Deserialize)]
struct CreateScoreboardBody {
    #[serde(default = "default_advance_count")]
    advance_count: usize,
}

fn default_advance_count() -> usize {
    DEFAULT_ADVANCE_COUNT
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct AdjustScoreBody {
    delta: i32,
}

#[derive(Deserialize)]
struct AdvanceCountBody {
    advance_count: usize,
}

/// Path segment: scoreboard id (e.g. /api/scoreboards/{id})
#[derive(Deserialize)]
struct ScoreboardPath {
    id: ScoreboardId,
}

/// Path segments: scoreboard id and team id (e.g. /api/scoreboards/{id}/teams/{team_id})
#[derive(Deserialize)]
struct ScoreboardTeamPath {
    id: ScoreboardId,
    team_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "scoreboard-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new scoreboard (returns it with id; client stores id for subsequent requests).
#[post("/api/scoreboards")]
async fn api_create_scoreboard(
    state: AppState,
    body: Option<Json<CreateScoreboardBody>>,
) -> HttpResponse {
    let advance_count = body
        .as_ref()
        .map(|b| b.advance_count)
        .unwrap_or_else(default_advance_count);
    let scoreboard = Scoreboard::new(advance_count);
    let id = scoreboard.id;
    log::info!("Created scoreboard {}", id);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = ScoreboardEntry {
        scoreboard,
        last_activity: Instant::now(),
    };
    let response = HttpResponse::Ok().json(view(&entry.scoreboard));
    g.insert(id, entry);
    response
}

/// Get a scoreboard by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/scoreboards/{id}")]
async fn api_get_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(view(&entry.scoreboard))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    }
}

/// Add a team (name must be non-empty and unique, case-insensitive).
#[post("/api/scoreboards/{id}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<ScoreboardPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    let message = match s.add_team(body.name.as_str()) {
        Ok(team) => format!("Team \"{}\" added", team.name),
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    HttpResponse::Ok().json(serde_json::json!({ "message": message, "scoreboard": view(s) }))
}

/// Remove a team by id.
#[delete("/api/scoreboards/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<ScoreboardTeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    match s.remove_team(path.team_id) {
        Ok(team) => {
            let message = format!("Team \"{}\" removed", team.name);
            HttpResponse::Ok()
                .json(serde_json::json!({ "message": message, "scoreboard": view(s) }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Apply a score delta to one team (the UI sends +1 / -1; any integer is accepted).
/// Scores never go below 0. Unknown team ids are ignored.
#[put("/api/scoreboards/{id}/teams/{team_id}/score")]
async fn api_adjust_score(
    state: AppState,
    path: Path<ScoreboardTeamPath>,
    body: Json<AdjustScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    s.adjust_score(path.team_id, body.delta);
    HttpResponse::Ok().json(view(s))
}

/// Update how many top-scoring teams survive a round advance (clamped to >= 1).
#[put("/api/scoreboards/{id}/advance-count")]
async fn api_set_advance_count(
    state: AppState,
    path: Path<ScoreboardPath>,
    body: Json<AdvanceCountBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    s.set_advance_count(body.advance_count);
    HttpResponse::Ok().json(view(s))
}

/// Advance to the next round: keep the top teams, reset their scores.
#[post("/api/scoreboards/{id}/advance")]
async fn api_advance_round(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    match advance_round(s) {
        Ok(outcome) => {
            let message = format!(
                "Round {} complete! {} teams advance to Round {}",
                outcome.completed_round, outcome.advanced, outcome.next_round
            );
            HttpResponse::Ok()
                .json(serde_json::json!({ "message": message, "scoreboard": view(s) }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the tournament: remove all teams, back to round 1.
#[post("/api/scoreboards/{id}/reset")]
async fn api_reset_tournament(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" })),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.scoreboard;
    s.reset();
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Tournament reset",
        "scoreboard": view(s)
    }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<ScoreboardId, ScoreboardEntry>::new()));

    // Background task: every 30 minutes, remove scoreboards inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive scoreboard(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_scoreboard)
            .service(api_get_scoreboard)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_adjust_score)
            .service(api_set_advance_count)
            .service(api_advance_round)
            .service(api_reset_tournament)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
