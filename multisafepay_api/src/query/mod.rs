mod common;
pub use self::common::Query;

mod gateway;
pub use self::gateway::GatewayQuery;
