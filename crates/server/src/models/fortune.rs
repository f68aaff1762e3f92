use fortune_shared::api::PickResponse;

/// A stored message row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Fortune {
    pub content: String,
    pub author: String,
    pub creator: String,
}

impl From<Fortune> for PickResponse {
    fn from(fortune: Fortune) -> Self {
        Self {
            content: fortune.content,
            author: fortune.author,
            creator: fortune.creator,
        }
    }
}
