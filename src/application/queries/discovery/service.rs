use std::sync::Arc;

use crate::domain::profile::ProfileSearchGateway;

pub struct DiscoveryQueryService {
    pub(super) gateway: Arc<dyn ProfileSearchGateway>,
}

impl DiscoveryQueryService {
    pub fn new(gateway: Arc<dyn ProfileSearchGateway>) -> Self {
        Self { gateway }
    }
}
