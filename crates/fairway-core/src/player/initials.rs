use super::Player;

/// Short label shown on a player's button.
///
/// With a last name: first letter of each name, upper-cased ("JD").
/// Without one: the first two characters of the first name as typed ("Ja").
/// Shorter first names yield whatever characters exist, so this never panics.
pub fn display_initials(player: &Player) -> String {
    initials_from_names(&player.first_name, player.last_name.as_deref())
}

pub fn initials_from_names(first_name: &str, last_name: Option<&str>) -> String {
    match last_name.filter(|name| !name.is_empty()) {
        Some(last) => first_name
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
        None => first_name.chars().take(2).collect(),
    }
}
