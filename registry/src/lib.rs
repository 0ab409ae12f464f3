use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::dashboard::DashboardRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::resource::ResourceRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::notifier::StatusChangeNotice;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::dashboard::DashboardRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::resource::ResourceRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    resource_repository: Arc<dyn ResourceRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    dashboard_repository: Arc<dyn DashboardRepository>,
    status_change_tx: mpsc::Sender<StatusChangeNotice>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: &AppConfig,
        status_change_tx: mpsc::Sender<StatusChangeNotice>,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let resource_repository = Arc::new(ResourceRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let dashboard_repository = Arc::new(DashboardRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            resource_repository,
            booking_repository,
            dashboard_repository,
            status_change_tx,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn resource_repository(&self) -> Arc<dyn ResourceRepository> {
        self.resource_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn dashboard_repository(&self) -> Arc<dyn DashboardRepository> {
        self.dashboard_repository.clone()
    }

    pub fn status_change_sender(&self) -> mpsc::Sender<StatusChangeNotice> {
        self.status_change_tx.clone()
    }
}
