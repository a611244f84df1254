use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::grid::GridRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use kernel::model::admin::AdminSecret;
use kernel::repository::grid::GridRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;
use shared::config::{AppConfig, PaymentConfig};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    grid_repository: Arc<dyn GridRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    admin_secret: AdminSecret,
    payment: PaymentConfig,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let grid_repository = Arc::new(GridRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            grid_repository,
            reservation_repository,
            admin_secret: AdminSecret::new(app_config.admin.secret),
            payment: app_config.payment,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn grid_repository(&self) -> Arc<dyn GridRepository> {
        self.grid_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn admin_secret(&self) -> &AdminSecret {
        &self.admin_secret
    }

    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }
}
