use serde::{Deserialize, Serialize};
use crate::books::domain::model::CatalogStats;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct CatalogStatsCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> CatalogStatsCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogStatsCommandRequest {}

impl CatalogStatsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogStatsCommandResponse {
    pub stats: CatalogStats,
}

impl CatalogStatsCommandResponse {
    pub fn new(stats: CatalogStats) -> Self {
        Self {
            stats,
        }
    }
}

impl Command<CatalogStatsCommandRequest, CatalogStatsCommandResponse> for CatalogStatsCommand<'_> {
    fn execute(&mut self, _req: CatalogStatsCommandRequest) -> Result<CatalogStatsCommandResponse, CommandError> {
        Ok(CatalogStatsCommandResponse::new(self.catalog_service.catalog_stats()))
    }
}
