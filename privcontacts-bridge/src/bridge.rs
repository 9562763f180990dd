use crate::BridgeConfig;
use privcontacts_mapping::{CompanyLabelCodec, DirectoryMapping, InterchangeMapping};

/// Converts whole contacts between the internal data set and the external
/// representations.
///
/// Holds no state besides its configuration; one bridge can serve any
/// number of contacts concurrently.
#[derive(Debug, Clone, Default)]
pub struct ContactBridge {
    pub(crate) config: BridgeConfig,
    pub(crate) directory: DirectoryMapping,
    pub(crate) interchange: InterchangeMapping,
    pub(crate) codec: CompanyLabelCodec,
}

impl ContactBridge {
    #[must_use]
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}
