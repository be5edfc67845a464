//! Human-readable names for Star Citizen actions.
//!
//! Raw action names look like `v_attack1_group1` or
//! `v_ifcs_toggle_vector_decoupling`. They are rewritten through a fixed
//! override table, then a list of substring rules, and finally humanized by
//! dropping the leading category token (`v`, `pc`, ...).

/// Whole-name replacements applied before any other rule.
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("v_increase_mining_throttle", "v_mining_power_+"),
    ("v_decrease_mining_throttle", "v_mining_power_"),
    ("v_mining_throttle", "v_mining_power"),
    ("v_dec_ping_focus_angle", "v_ping_angle_-"),
    ("v_inc_ping_focus_angle", "v_ping_angle_+"),
    ("v_weapon_launch_missile", "v_launch_missile"),
    (
        "v_weapon_countermeasure_decoy_launch_panic",
        "v_weapon_countermeasure_decoy_launch_x5",
    ),
    ("v_scanning_trigger_scan", "v_scan"),
    ("v_toggle_qdrive_engagement", "v_toggle_engage_quantum"),
    ("v_attack1_group1", "v_fire_1"),
    ("v_attack1_group2", "v_fire_2"),
    ("v_target_lock_selected", "v_target_lock"),
    ("v_weapon_cycle_missile_back", "v_cycle_missile_-"),
    ("v_weapon_cycle_missile_fwd", "v_cycle_missile_+"),
    ("v_target_cycle_friendly_back", "v_cycle_friendly_-"),
    ("v_target_cycle_friendly_fwd", "v_cycle_friendly_+"),
    ("v_target_cycle_friendly_reset", "v_reset_friendly"),
    ("v_target_cycle_hostile_back", "v_cycle_hostile_-"),
    ("v_target_cycle_hostile_fwd", "v_cycle_hostile_+"),
    ("v_target_cycle_hostile_reset", "v_reset_hostile"),
    ("v_shield_raise_level_left", "v_left_shield_+"),
    ("v_shield_raise_level_right", "v_right_shield_+"),
    ("v_shield_raise_level_forward", "v_forward_shield_+"),
    ("v_shield_raise_level_back", "v_back_shield_+"),
];

/// Substring rewrites, applied in order; each replaces every occurrence.
const SUBSTRING_RULES: &[(&str, &str)] = &[
    ("_ifcs", ""),
    ("_toggle", ""),
    ("_use_consumable", "_use_"),
    ("_weapon_countermeasure", ""),
    ("_scanning_trigger_scan", "_scan"),
    ("_qdrive", "_quantum"),
    ("_attack", "_fire"),
    ("_weapon", ""),
];

/// Turns a raw action name into its display form, e.g.
/// `v_attack1_group1` -> `Fire 1`.
#[must_use]
pub fn canonical_action_name(raw: &str) -> String {
    let mut name = NAME_OVERRIDES
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to)
        .to_string();

    for (from, to) in SUBSTRING_RULES {
        if name.contains(from) {
            name = name.replace(from, to);
        }
    }

    let tokens: Vec<&str> = name.split('_').collect();
    match tokens.as_slice() {
        [single] => capitalize(single),
        [_, rest @ ..] => capitalize(&rest.join(" ")),
        [] => String::new(),
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_then_humanize() {
        assert_eq!(canonical_action_name("v_attack1_group1"), "Fire 1");
        assert_eq!(canonical_action_name("v_attack1_group2"), "Fire 2");
        assert_eq!(canonical_action_name("v_increase_mining_throttle"), "Mining power +");
        assert_eq!(canonical_action_name("v_target_cycle_hostile_reset"), "Reset hostile");
    }

    #[test]
    fn test_substring_rules() {
        assert_eq!(
            canonical_action_name("v_ifcs_toggle_vector_decoupling"),
            "Vector decoupling"
        );
        assert_eq!(canonical_action_name("v_toggle_qdrive_spool"), "Quantum spool");
        assert_eq!(canonical_action_name("v_weapon_pitch"), "Pitch");
        assert_eq!(canonical_action_name("v_attack2"), "Fire2");
    }

    #[test]
    fn test_rules_apply_independently() {
        // `_weapon_countermeasure` and then `_weapon` both fire
        assert_eq!(
            canonical_action_name("v_weapon_countermeasure_decoy_launch_panic"),
            "Decoy launch x5"
        );
    }

    #[test]
    fn test_single_token_is_capitalized() {
        assert_eq!(canonical_action_name("pitch"), "Pitch");
        assert_eq!(canonical_action_name("ROLL"), "Roll");
    }

    #[test]
    fn test_capitalize_lowercases_tail() {
        assert_eq!(canonical_action_name("v_Strafe_UP"), "Strafe up");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(canonical_action_name(""), "");
    }

    #[test]
    fn test_is_pure() {
        let raw = "v_target_lock_selected";
        assert_eq!(canonical_action_name(raw), canonical_action_name(raw));
        assert_eq!(canonical_action_name(raw), "Target lock");
    }
}
