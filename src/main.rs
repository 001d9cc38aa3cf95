use std::sync::Arc;

use club_admin::config::AppConfig;
use club_admin::error::AppError;
use club_admin::persistence::{LocalStore, MemoryStore, RecordStore, RestStore};
use club_admin::store::Workspace;
use club_admin::telemetry;
use club_admin::workflows::catalog::{catalog_router, CatalogService, Course, Instructor};
use club_admin::workflows::clubs::{club_router, Club, ClubDraft, ClubService};
use club_admin::workflows::registration::{
    registration_router, Member, MemberDraft, RegistrationService,
};
use club_admin::workflows::reports::{report_router, Report, ReportService};
use club_admin::workflows::statistics::statistics_router;
use club_admin::workflows::WorkflowError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let workspace = Arc::new(Workspace::new());

    match config.persistence.api_base_url.clone() {
        Some(base_url) => {
            tracing::info!(%base_url, "using REST persistence collaborator");
            let member_store = Arc::new(RestStore::<Member>::new(base_url.clone()));
            let club_store = Arc::new(RestStore::<Club>::new(base_url.clone()));
            let report_store = Arc::new(RestStore::<Report>::new(base_url));
            run(config, workspace, member_store, club_store, report_store, false).await
        }
        None => {
            tracing::info!("CLUB_API_BASE_URL not set; running in demo mode with seeded data");
            let member_store = Arc::new(MemoryStore::<Member>::default());
            let club_store = Arc::new(MemoryStore::<Club>::default());
            let report_store = Arc::new(MemoryStore::<Report>::default());
            run(config, workspace, member_store, club_store, report_store, true).await
        }
    }
}

async fn run<M, C, R>(
    config: AppConfig,
    workspace: Arc<Workspace>,
    member_store: Arc<M>,
    club_store: Arc<C>,
    report_store: Arc<R>,
    seed: bool,
) -> Result<(), AppError>
where
    M: RecordStore<Member> + 'static,
    C: RecordStore<Club> + 'static,
    R: RecordStore<Report> + 'static,
{
    let registrations = Arc::new(RegistrationService::new(
        member_store,
        workspace.members.clone(),
    ));
    let clubs = Arc::new(ClubService::new(club_store, workspace.clubs.clone()));
    let reports = Arc::new(ReportService::new(
        report_store,
        workspace.reports.clone(),
        workspace.clubs.clone(),
    ));
    let catalog = Arc::new(CatalogService::new(
        Arc::new(LocalStore::<Course>::new(config.persistence.data_dir.clone())),
        Arc::new(LocalStore::<Instructor>::new(
            config.persistence.data_dir.clone(),
        )),
        workspace.courses.clone(),
        workspace.instructors.clone(),
    ));

    if seed {
        if let Err(err) = seed_demo(&clubs, &registrations) {
            tracing::warn!(error = %err, "demo seed failed");
        }
    }

    // Initial loads; a dead collaborator should not stop the server from
    // coming up with empty working sets.
    match registrations.refresh() {
        Ok(count) => tracing::info!(count, "loaded registrations"),
        Err(err) => tracing::warn!(error = %err, "could not load registrations"),
    }
    match clubs.refresh() {
        Ok(count) => tracing::info!(count, "loaded clubs"),
        Err(err) => tracing::warn!(error = %err, "could not load clubs"),
    }
    match catalog.refresh() {
        Ok((courses, instructors)) => {
            tracing::info!(courses, instructors, "loaded catalog")
        }
        Err(err) => tracing::warn!(error = %err, "could not load catalog"),
    }
    match reports.refresh() {
        Ok(count) => tracing::info!(count, "loaded reports"),
        Err(err) => tracing::warn!(error = %err, "could not load reports"),
    }

    let app = registration_router(registrations)
        .merge(club_router(clubs))
        .merge(catalog_router(catalog))
        .merge(report_router(reports))
        .merge(statistics_router(workspace));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "club admin API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Demo-mode fixtures so the API is explorable without a mock backend.
fn seed_demo<M, C>(
    clubs: &ClubService<C>,
    registrations: &RegistrationService<M>,
) -> Result<(), WorkflowError>
where
    M: RecordStore<Member> + 'static,
    C: RecordStore<Club> + 'static,
{
    let chess = clubs.create(ClubDraft {
        avatar: String::new(),
        name: "Câu lạc bộ Cờ vua".to_string(),
        description: "Giao lưu cờ vua hàng tuần".to_string(),
        chu_nhiem: "Trần Thị Lan".to_string(),
        active: true,
    })?;
    let music = clubs.create(ClubDraft {
        avatar: String::new(),
        name: "Câu lạc bộ Âm nhạc".to_string(),
        description: "Ban nhạc sinh viên".to_string(),
        chu_nhiem: "Lê Văn Minh".to_string(),
        active: true,
    })?;

    let first = registrations.submit(MemberDraft {
        name: "Nguyễn Văn An".to_string(),
        email: "an.nguyen@example.com".to_string(),
        phone: "0901234567".to_string(),
        gender: "male".to_string(),
        address: "Hà Nội".to_string(),
        skills: "cờ vua".to_string(),
        club: chess.id.clone(),
        reason: "Muốn luyện tập cờ vua".to_string(),
    })?;
    registrations.submit(MemberDraft {
        name: "Phạm Thị Bích".to_string(),
        email: "bich.pham@example.com".to_string(),
        phone: "0907654321".to_string(),
        gender: "female".to_string(),
        address: "Đà Nẵng".to_string(),
        skills: "guitar".to_string(),
        club: music.id,
        reason: "Thích chơi nhạc".to_string(),
    })?;
    registrations.approve(&first.id)?;

    tracing::info!("seeded demo clubs and registrations");
    Ok(())
}
