//! Commands sent from the host to the session.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::AssetKind;

/// All host-originated notifications the session understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// The loader finished loading an asset requested during scene setup.
    AssetReady { asset: AssetKind },
}
