//! Backend commands queued from UI to backend worker.

use shared::domain::Face;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadFace { face: Face },
    ConnectWallet,
    Purchase { wallet_address: String },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadFace { .. } => "load_face",
            BackendCommand::ConnectWallet => "connect_wallet",
            BackendCommand::Purchase { .. } => "purchase",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
