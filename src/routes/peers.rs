use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{parse_tags, rank, viewer_tag_set};
use crate::models::{
    ErrorResponse, FindPeersQuery, MatchesResponse, ProfileResponse, UpdateProfileRequest,
    ViewerProfile,
};
use crate::routes::AppState;

/// Configure peer connect routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/peers/matches", web::get().to(find_matches))
        .route("/peers/profile", web::get().to(get_profile))
        .route("/peers/profile", web::put().to(update_profile));
}

/// Find peer matches endpoint
///
/// GET /api/v1/peers/matches?limit=20
///
/// Recomputes the viewer tag set from the stored profile and ranks the
/// candidate pool by affinity. Scores are transient; every request ranks
/// fresh.
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<FindPeersQuery>,
) -> impl Responder {
    let limit = query
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let viewer = state.store.viewer().await;
    let viewer_tags = viewer_tag_set(&viewer.skills, &viewer.interests);

    let total_candidates = state.profiles.len();
    let mut matches = rank(&viewer_tags, &state.profiles);
    matches.truncate(limit);

    tracing::info!(
        "Ranked {} candidates against {} viewer tags, returning {}",
        total_candidates,
        viewer_tags.len(),
        matches.len()
    );

    HttpResponse::Ok().json(MatchesResponse {
        matches,
        total_candidates,
    })
}

/// Get the viewer's profile
///
/// GET /api/v1/peers/profile
async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    let profile = state.store.viewer().await;
    HttpResponse::Ok().json(profile_response(profile))
}

/// Update the viewer's profile
///
/// PUT /api/v1/peers/profile
///
/// Request body:
/// ```json
/// {
///   "name": "You",
///   "year": "2nd Year",
///   "branch": "CSE",
///   "skills": "web, ui",
///   "interests": "android, cloud"
/// }
/// ```
///
/// Skills and interests are comma-separated free text, split and trimmed
/// here at the boundary.
async fn update_profile(
    state: web::Data<AppState>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = ViewerProfile {
        name: req.name.clone(),
        year: req.year.clone(),
        branch: req.branch.clone(),
        skills: parse_tags(&req.skills),
        interests: parse_tags(&req.interests),
    };

    match state.store.update_viewer(profile.clone()).await {
        Ok(()) => HttpResponse::Ok().json(profile_response(profile)),
        Err(e) => {
            tracing::error!("Failed to persist profile update: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to update profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn profile_response(profile: ViewerProfile) -> ProfileResponse {
    let mut tags: Vec<String> = viewer_tag_set(&profile.skills, &profile.interests)
        .into_iter()
        .collect();
    tags.sort();

    ProfileResponse { profile, tags }
}
