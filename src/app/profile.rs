//! Profile summary helpers and the dropdown open/close state machine.
//!
//! Everything here is plain data so it can be exercised without a DOM; the
//! `ProfileDropdown` component only wires these into signals and events.

/// Label shown in place of initials when the user has no name
pub const PLACEHOLDER_LABEL: &str = "Admin";

/// Where the account-settings link points when no path is given
pub const DEFAULT_SETTINGS_PATH: &str = "/admin/settings";

fn first_upper(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Initials for a display name.
///
/// "Madonna" becomes "M.", "Jane Mary Doe" becomes "J.D.". Middle names are
/// ignored. Empty or whitespace-only names give an empty string.
pub fn initials(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    match tokens.last() {
        Some(last) => format!("{}.{}.", first_upper(first), first_upper(last)),
        None => format!("{}.", first_upper(first)),
    }
}

/// Shortens the local part of an email to three characters.
///
/// "johndoe@example.com" becomes "joh..@example.com". Addresses with a local
/// part of three characters or fewer, and malformed addresses (no "@", or an
/// empty side), come back unchanged.
pub fn truncate_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }
    if local.chars().count() > 3 {
        let head: String = local.chars().take(3).collect();
        format!("{head}..@{domain}")
    } else {
        email.to_string()
    }
}

/// Uppercased first letter for the avatar, `None` when there is no name.
pub fn avatar_letter(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(first_upper(trimmed))
    }
}

/// Visibility of the dropdown panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input to the dropdown state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClicked,
    /// Pointer-down landed outside the widget's region
    OutsidePointerDown,
    SettingsSelected,
    SignOutSelected,
}

/// Side effect to run after the state has been updated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    None,
    Navigate,
    SignOut,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state and the effect to perform.
    ///
    /// Both menu actions close the panel before their effect runs.
    pub fn apply(self, event: MenuEvent) -> (MenuState, MenuEffect) {
        match event {
            MenuEvent::TriggerClicked => match self {
                MenuState::Closed => (MenuState::Open, MenuEffect::None),
                MenuState::Open => (MenuState::Closed, MenuEffect::None),
            },
            MenuEvent::OutsidePointerDown => (MenuState::Closed, MenuEffect::None),
            MenuEvent::SettingsSelected => (MenuState::Closed, MenuEffect::Navigate),
            MenuEvent::SignOutSelected => (MenuState::Closed, MenuEffect::SignOut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_single_token() {
        assert_eq!(initials("Madonna"), "M.");
        assert_eq!(initials("  cher  "), "C.");
    }

    #[test]
    fn test_initials_multi_token() {
        assert_eq!(initials("Jane Doe"), "J.D.");
        assert_eq!(initials("Jane Mary Doe"), "J.D.");
        assert_eq!(initials("jane\t\tmary   doe"), "J.D.");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   \n"), "");
    }

    #[test]
    fn test_initials_unicode() {
        assert_eq!(initials("élodie ångström"), "É.Å.");
    }

    #[test]
    fn test_truncate_long_local_part() {
        assert_eq!(truncate_email("johndoe@example.com"), "joh..@example.com");
        assert_eq!(truncate_email("abcd@x.com"), "abc..@x.com");
    }

    #[test]
    fn test_truncate_short_local_part_unchanged() {
        assert_eq!(truncate_email("ab@x.com"), "ab@x.com");
        assert_eq!(truncate_email("abc@x.com"), "abc@x.com");
    }

    #[test]
    fn test_truncate_malformed_unchanged() {
        assert_eq!(truncate_email("invalid"), "invalid");
        assert_eq!(truncate_email("@example.com"), "@example.com");
        assert_eq!(truncate_email("johndoe@"), "johndoe@");
        assert_eq!(truncate_email(""), "");
    }

    #[test]
    fn test_truncate_splits_on_first_at() {
        assert_eq!(truncate_email("johndoe@a@b"), "joh..@a@b");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_email("éèêë@x.fr"), "éèê..@x.fr");
        assert_eq!(truncate_email("éèê@x.fr"), "éèê@x.fr");
    }

    #[test]
    fn test_avatar_letter() {
        assert_eq!(avatar_letter("jane doe"), Some("J".to_string()));
        assert_eq!(avatar_letter("  "), None);
    }

    #[test]
    fn test_trigger_toggles() {
        let (state, effect) = MenuState::Closed.apply(MenuEvent::TriggerClicked);
        assert_eq!(state, MenuState::Open);
        assert_eq!(effect, MenuEffect::None);

        let (state, _) = state.apply(MenuEvent::TriggerClicked);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_outside_pointer_down_closes() {
        assert_eq!(
            MenuState::Open.apply(MenuEvent::OutsidePointerDown),
            (MenuState::Closed, MenuEffect::None)
        );
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::OutsidePointerDown),
            (MenuState::Closed, MenuEffect::None)
        );
    }

    #[test]
    fn test_actions_close_before_effect() {
        assert_eq!(
            MenuState::Open.apply(MenuEvent::SettingsSelected),
            (MenuState::Closed, MenuEffect::Navigate)
        );
        assert_eq!(
            MenuState::Open.apply(MenuEvent::SignOutSelected),
            (MenuState::Closed, MenuEffect::SignOut)
        );
    }

    #[test]
    fn test_default_is_closed() {
        assert!(!MenuState::default().is_open());
    }
}
