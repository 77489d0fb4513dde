//! Sanction entity <-> model mapper

use panel_core::entities::{Sanction, SanctionKind, SanctionStatus};

use crate::models::SanctionModel;

/// Convert a bans/mutes row into a Sanction of the given kind
///
/// Unrecognised stored statuses are read as expired so they never count as
/// in force.
pub fn sanction_from_model(kind: SanctionKind, model: SanctionModel) -> Sanction {
    let status = SanctionStatus::from_db(&model.status).unwrap_or_else(|| {
        tracing::warn!(
            table = kind.table(),
            id = model.id,
            status = %model.status,
            "Unknown sanction status, treating as expired"
        );
        SanctionStatus::Expired
    });

    Sanction {
        id: model.id,
        kind,
        player_steam_id: model.player_steam_id,
        player_name: model.player_name,
        admin_steam_id: model.admin_steam_id,
        reason: model.reason,
        sanction_type: model.sanction_type,
        duration: model.duration,
        created: model.created,
        ends: model.ends,
        status,
    }
}

/// Sanction values prepared for insertion
pub struct SanctionInsert<'a> {
    pub player_steam_id: &'a str,
    pub player_name: &'a str,
    pub admin_steam_id: Option<&'a str>,
    pub reason: &'a str,
    pub sanction_type: &'a str,
    pub duration: i32,
    pub created: chrono::DateTime<chrono::Utc>,
    pub ends: chrono::DateTime<chrono::Utc>,
    pub status: &'static str,
}

impl<'a> SanctionInsert<'a> {
    pub fn new(sanction: &'a Sanction) -> Self {
        Self {
            player_steam_id: &sanction.player_steam_id,
            player_name: &sanction.player_name,
            admin_steam_id: sanction.admin_steam_id.as_deref(),
            reason: &sanction.reason,
            sanction_type: &sanction.sanction_type,
            duration: sanction.duration,
            created: sanction.created,
            ends: sanction.ends,
            status: sanction.status.as_str(),
        }
    }
}
