pub mod get_identity_ids;

pub use get_identity_ids::{GetIdentityIdsArgs, get_identity_ids};

use crate::mcp::registry::ToolRegistry;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "get_identity_ids",
        "Search for identity IDs by display name (user or group)",
        get_identity_ids,
    );
}
