pub mod caller;
pub mod path_ids;
pub mod validated_json;
pub mod validated_query;

pub use path_ids::{GameId, PlayerId};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
