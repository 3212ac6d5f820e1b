use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 2,
        "first_name": "John",
        "last_name": "Doe",
        "phone_number": "+8801712345678",
        "email": "john.doe@company.com"
    })
)]
pub struct Employee {
    #[schema(example = 2)]
    pub id: u64,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "+8801712345678", nullable = true)]
    pub phone_number: Option<String>,

    #[schema(example = "john.doe@company.com")]
    pub email: String,
}
