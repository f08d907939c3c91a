//! Display labels and icons for enumerated document field values.
//!
//! Topics, resource types, branches, difficulties and urgencies are stored
//! as short machine keys.  Every renderer maps them through these tables and
//! falls back to the raw key when no entry exists, so unknown values coming
//! out of the store never break a view.

/// Human-readable name for a discussion / assignment / doubt topic.
pub fn topic_label(topic: &str) -> &str {
    match topic {
        "general" => "General Physics",
        "mechanics" => "Classical Mechanics",
        "electro" => "Electromagnetism",
        "thermo" => "Thermodynamics",
        "optics" => "Optics",
        "quantum" => "Quantum Physics",
        "modern" => "Modern Physics",
        other => other,
    }
}

/// Human-readable name for a physics branch.
pub fn branch_label(branch: &str) -> &str {
    match branch {
        "general" => "General Physics",
        "classical" => "Classical Mechanics",
        "mechanics" => "Mechanics",
        "modern" => "Modern Physics",
        "electro" => "Electromagnetism",
        "quantum" => "Quantum Physics",
        "thermo" => "Thermodynamics",
        "optics" => "Optics",
        "astro" => "Astrophysics",
        other => other,
    }
}

/// Human-readable name for a resource type.
pub fn resource_type_label(kind: &str) -> &str {
    match kind {
        "lecture" => "Lecture Notes",
        "video" => "Video Lecture",
        "book" => "E-Book",
        "solved" => "Solved Papers",
        "presentation" => "Presentation",
        "formula" => "Formula Sheet",
        other => other,
    }
}

/// Icon class for a resource type.
pub fn resource_type_icon(kind: &str) -> &str {
    match kind {
        "lecture" => "fas fa-chalkboard-teacher",
        "video" => "fas fa-video",
        "book" => "fas fa-book",
        "solved" => "fas fa-file-alt",
        "presentation" => "fas fa-chart-bar",
        "formula" => "fas fa-square-root-alt",
        _ => "fas fa-file",
    }
}

/// Human-readable name for a difficulty level.
pub fn difficulty_label(difficulty: &str) -> String {
    // Difficulties are free-form; display them capitalized.
    let mut chars = difficulty.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Human-readable name for a doubt urgency.
pub fn urgency_label(urgency: &str) -> &str {
    match urgency {
        "low" => "Can wait",
        "normal" => "Normal",
        "high" => "Urgent",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_labels() {
        assert_eq!(topic_label("mechanics"), "Classical Mechanics");
        assert_eq!(resource_type_label("solved"), "Solved Papers");
        assert_eq!(branch_label("astro"), "Astrophysics");
        assert_eq!(urgency_label("high"), "Urgent");
    }

    #[test]
    fn unknown_keys_fall_back_to_raw_value() {
        assert_eq!(topic_label("biology"), "biology");
        assert_eq!(resource_type_label("podcast"), "podcast");
        assert_eq!(resource_type_icon("podcast"), "fas fa-file");
        assert_eq!(branch_label(""), "");
    }

    #[test]
    fn difficulty_is_capitalized() {
        assert_eq!(difficulty_label("beginner"), "Beginner");
        assert_eq!(difficulty_label("advanced"), "Advanced");
        assert_eq!(difficulty_label(""), "");
    }
}
