//! Admin entity <-> model mapper

use panel_core::entities::Admin;
use panel_core::error::DomainError;
use panel_core::value_objects::{Flags, SteamId};

use crate::models::AdminModel;

/// Convert AdminModel to Admin entity
///
/// Unknown flag tokens are dropped; a malformed Steam64 id is a data error.
impl TryFrom<AdminModel> for Admin {
    type Error = DomainError;

    fn try_from(model: AdminModel) -> Result<Self, Self::Error> {
        let steam_id = SteamId::parse(&model.steam_id).map_err(|e| {
            DomainError::InvalidData(format!("admin steam_id {:?}: {e}", model.steam_id))
        })?;

        Ok(Admin {
            steam_id,
            name: model.name,
            flags: Flags::parse_lossy(&model.flags),
            created_at: model.created_at,
        })
    }
}

/// Admin values prepared for insertion
pub struct AdminInsert<'a> {
    pub steam_id: String,
    pub name: &'a str,
    pub flags: String,
}

impl<'a> AdminInsert<'a> {
    pub fn new(admin: &'a Admin) -> Self {
        Self {
            steam_id: admin.steam_id.to_string(),
            name: &admin.name,
            flags: admin.flags.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(steam_id: &str, flags: &str) -> AdminModel {
        AdminModel {
            steam_id: steam_id.to_string(),
            name: "Admin".to_string(),
            flags: flags.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let admin = Admin::try_from(model("76561197960265729", "mod helper root")).unwrap();
        assert_eq!(admin.steam_id, SteamId::from_account_id(1));
        assert_eq!(admin.flags, Flags::MOD | Flags::HELPER);
    }

    #[test]
    fn test_bad_steam_id_is_data_error() {
        let err = Admin::try_from(model("not-a-steam-id", "owner")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidData(_)));
    }

    #[test]
    fn test_insert_values() {
        let admin = Admin::new(
            SteamId::from_account_id(2),
            "Owner".to_string(),
            Flags::OWNER | Flags::ADMIN,
        );
        let insert = AdminInsert::new(&admin);
        assert_eq!(insert.steam_id, "76561197960265730");
        assert_eq!(insert.flags, "owner admin");
    }
}
