use ferrous_resolv_domain::{HostEntry, HostEntrySlot};
use std::sync::Arc;
use tracing::{debug, warn};

use super::errors::HostLookupError;
use crate::services::HostLookupService;

/// Use case: legacy host-entry lookup
///
/// The record is written into a caller-owned slot and stays valid until the
/// slot is reused for the next lookup.
pub struct GetHostByNameUseCase {
    lookup: Arc<HostLookupService>,
}

impl GetHostByNameUseCase {
    pub fn new(lookup: Arc<HostLookupService>) -> Self {
        Self { lookup }
    }

    pub fn execute<'a>(
        &self,
        name: &str,
        slot: &'a mut HostEntrySlot,
    ) -> Result<&'a HostEntry, HostLookupError> {
        debug!(name = name, "gethostbyname called");
        slot.clear();

        if name.is_empty() {
            return Err(HostLookupError::HostNotFound);
        }

        match self.lookup.lookup(name) {
            Ok(addr) => Ok(slot.store(name, addr)),
            Err(e) => {
                let error = HostLookupError::from(&e);
                warn!(name = name, error = %e, h_errno = error.h_errno(), "gethostbyname failed");
                Err(error)
            }
        }
    }
}
