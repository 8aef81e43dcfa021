use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_management_api::config::{PasswordPolicyConfig, RateLimitConfig, ServerConfig};
use user_management_api::db::Database;
use user_management_api::handlers::users::{json_error_handler, AppState};
use user_management_api::repositories::users::UserRepository;
use user_management_api::routes::configure_all_routes;
use user_management_api::services::auth::TokenService;
use user_management_api::services::users::{MongoUserService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (profile, env_loaded) = load_env_file();
    init_logging();

    match env_loaded {
        Ok(()) => info!("Current profile: {} (.env 파일 로드 됨)", profile),
        Err(e) => error!("Current profile: {} (.env 파일 로드 실패: {})", profile, e),
    }

    info!("🚀 사용자 관리 서비스 시작중...");

    let (state, token_service) = initialize_services().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state, token_service).await
}

async fn initialize_services() -> io::Result<(web::Data<AppState>, Arc<TokenService>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e)
    })?;

    let user_repo = UserRepository::new(&database.get_database());
    user_repo.create_indexes().await.map_err(|e| {
        error!("인덱스 생성 실패: {}", e);
        io::Error::other(e)
    })?;

    let password_policy = PasswordPolicyConfig::load();
    info!("비밀번호 정책 로드됨: {:?}", password_policy);

    let user_service: Arc<dyn UserService> =
        Arc::new(MongoUserService::new(user_repo, password_policy.clone()));

    let state = web::Data::new(AppState::new(user_service, password_policy));
    let token_service = Arc::new(TokenService::from_config());

    Ok((state, token_service))
}

async fn start_http_server(
    state: web::Data<AppState>,
    token_service: Arc<TokenService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정 생성 실패"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let token_service = token_service.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(|cfg| configure_all_routes(cfg, token_service))
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// `PROFILE`에 맞는 `.env` 파일을 로드하고 결과를 반환합니다.
///
/// 로거가 초기화되기 전에 호출되므로 결과 기록은 호출자가 담당합니다.
fn load_env_file() -> (String, Result<(), dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    (profile, loaded)
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
