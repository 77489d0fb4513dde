//! GameServer entity <-> model mapper

use panel_core::entities::GameServer;
use panel_core::error::DomainError;

use crate::models::ServerModel;

/// Convert ServerModel to GameServer entity
impl TryFrom<ServerModel> for GameServer {
    type Error = DomainError;

    fn try_from(model: ServerModel) -> Result<Self, Self::Error> {
        let port = u16::try_from(model.port).map_err(|_| {
            DomainError::InvalidData(format!("server {} port {}", model.id, model.port))
        })?;

        Ok(GameServer {
            id: model.id,
            name: model.name,
            address: model.address,
            port,
            game: model.game,
            created_at: model.created_at,
        })
    }
}
