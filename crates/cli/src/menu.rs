use ovenstock_auth::Capability;
use ovenstock_core::{InventoryError, InventoryResult};

/// One of the six menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIngredient,
    ViewStock,
    UpdateIngredient,
    SearchIngredient,
    CheckExpiry,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> InventoryResult<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::AddIngredient),
            "2" => Ok(MenuChoice::ViewStock),
            "3" => Ok(MenuChoice::UpdateIngredient),
            "4" => Ok(MenuChoice::SearchIngredient),
            "5" => Ok(MenuChoice::CheckExpiry),
            "6" => Ok(MenuChoice::Exit),
            other => Err(InventoryError::InvalidMenuChoice(other.to_string())),
        }
    }

    /// The capability gating this action. `Exit` is always allowed.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            MenuChoice::AddIngredient => Some(Capability::Add),
            MenuChoice::ViewStock => Some(Capability::View),
            MenuChoice::UpdateIngredient => Some(Capability::Update),
            MenuChoice::SearchIngredient => Some(Capability::Search),
            MenuChoice::CheckExpiry => Some(Capability::CheckExpiry),
            MenuChoice::Exit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_the_six_actions() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::AddIngredient);
        assert_eq!(MenuChoice::parse(" 6 ").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn anything_else_is_an_invalid_choice() {
        assert_eq!(
            MenuChoice::parse("7").unwrap_err(),
            InventoryError::InvalidMenuChoice("7".to_string())
        );
        assert!(MenuChoice::parse("add").is_err());
        assert!(MenuChoice::parse("").is_err());
    }

    #[test]
    fn every_action_except_exit_is_capability_gated() {
        assert_eq!(
            MenuChoice::AddIngredient.capability(),
            Some(Capability::Add)
        );
        assert_eq!(MenuChoice::Exit.capability(), None);
    }
}
