use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, CatalogStats};
use crate::core::command::{Command, CommandError};

pub(crate) struct GetStatsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetStatsCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GetStatsCommandRequest {}


#[derive(Debug, Serialize)]
pub(crate) struct GetStatsCommandResponse {
    #[serde(flatten)]
    pub stats: CatalogStats,
}

impl GetStatsCommandResponse {
    pub fn new(stats: CatalogStats) -> Self {
        Self {
            stats,
        }
    }
}

#[async_trait]
impl Command<GetStatsCommandRequest, GetStatsCommandResponse> for GetStatsCommand {
    async fn execute(&self, _req: GetStatsCommandRequest) -> Result<GetStatsCommandResponse, CommandError> {
        self.catalog_service.stats()
            .await.map_err(CommandError::from).map(GetStatsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::fixtures::sample_book;
    use crate::catalog::command::get_stats_cmd::{GetStatsCommand, GetStatsCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::testing::temp_catalog;
    use crate::core::command::Command;
    use crate::core::domain::API_VERSION;
    use crate::utils::testing::unreachable_url;

    #[tokio::test]
    async fn test_should_run_get_stats() {
        let (_dir, config, svc) = temp_catalog(unreachable_url().as_str()).await;
        svc.add_book(&sample_book(1)).await.expect("should add book");

        let res = GetStatsCommand::new(svc).execute(GetStatsCommandRequest::default()).await.expect("should get stats");
        assert_eq!(1, res.stats.total_books);
        assert_eq!(config.library_file, res.stats.library_file);

        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!(1, json["total_books"]);
        assert_eq!(API_VERSION, json["api_version"]);
    }
}
