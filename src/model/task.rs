use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Quarterly report",
        "description": "Prepare the Q1 financial report"
    })
)]
pub struct Task {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Quarterly report")]
    pub name: String,

    #[schema(example = "Prepare the Q1 financial report", nullable = true)]
    pub description: Option<String>,
}
