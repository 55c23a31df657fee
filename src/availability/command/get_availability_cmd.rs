use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::availability::domain::AvailabilityService;
use crate::availability::dto::AvailabilityDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetAvailabilityCommand {
    availability_service: Box<dyn AvailabilityService>,
}

impl GetAvailabilityCommand {
    pub(crate) fn new(availability_service: Box<dyn AvailabilityService>) -> Self {
        Self {
            availability_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetAvailabilityCommandRequest {
    pub(crate) item_id: String,
    pub(crate) patron_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAvailabilityCommandResponse {
    pub availability: AvailabilityDto,
}

impl GetAvailabilityCommandResponse {
    pub fn new(availability: AvailabilityDto) -> Self {
        Self {
            availability,
        }
    }
}

#[async_trait]
impl Command<GetAvailabilityCommandRequest, GetAvailabilityCommandResponse> for GetAvailabilityCommand {
    async fn execute(&self, req: GetAvailabilityCommandRequest) -> Result<GetAvailabilityCommandResponse, CommandError> {
        self.availability_service.availability(req.item_id.as_str(), req.patron_id.as_deref())
            .await.map_err(CommandError::from).map(GetAvailabilityCommandResponse::new)
    }
}
