use super::action::Action;
use crate::domain::content::PROFILE;
use crate::domain::models::Section;

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub action: Action,
}

/// The fixed command registry. Built fresh per call; never mutated at
/// runtime.
#[must_use]
pub fn commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            id: "nav-about",
            label: "Navigate: About",
            category: "Navigation",
            action: Action::SelectSection(Section::About),
        },
        CommandDefinition {
            id: "nav-skills",
            label: "Navigate: Skills",
            category: "Navigation",
            action: Action::SelectSection(Section::Skills),
        },
        CommandDefinition {
            id: "nav-experience",
            label: "Navigate: Experience",
            category: "Navigation",
            action: Action::SelectSection(Section::Experience),
        },
        CommandDefinition {
            id: "nav-projects",
            label: "Navigate: Projects",
            category: "Navigation",
            action: Action::SelectSection(Section::Projects),
        },
        CommandDefinition {
            id: "ext-github",
            label: "Open GitHub Profile",
            category: "External",
            action: Action::OpenExternal(PROFILE.github),
        },
        CommandDefinition {
            id: "ext-linkedin",
            label: "Open LinkedIn Profile",
            category: "External",
            action: Action::OpenExternal(PROFILE.linkedin),
        },
        CommandDefinition {
            id: "act-email",
            label: "Send Email",
            category: "Action",
            action: Action::ComposeMail,
        },
        CommandDefinition {
            id: "act-resume",
            label: "Download Resume",
            category: "Action",
            action: Action::RequestResume,
        },
    ]
}

/// Case-insensitive substring match against label OR category. Registry
/// order is preserved; there is no relevance re-sort.
#[must_use]
pub fn search_commands(query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..commands().len()).collect();
    }

    let query_lower = query.to_lowercase();
    commands()
        .iter()
        .enumerate()
        .filter(|(_, cmd)| {
            cmd.label.to_lowercase().contains(&query_lower)
                || cmd.category.to_lowercase().contains(&query_lower)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_full_registry_in_order() {
        let matches = search_commands("");
        assert_eq!(matches, (0..commands().len()).collect::<Vec<_>>());
        assert_eq!(matches.len(), 8);
    }

    #[test]
    fn test_label_match_only() {
        // "git" hits "Open GitHub Profile" via its label; the "External"
        // category does not contain it.
        let matches = search_commands("git");
        let cmds = commands();
        assert_eq!(matches.len(), 1);
        assert_eq!(cmds[matches[0]].label, "Open GitHub Profile");
    }

    #[test]
    fn test_category_match_includes_all_navigation_commands() {
        let matches = search_commands("navigate");
        let cmds = commands();
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|&i| cmds[i].category == "Navigation"));
        // Registry order preserved
        let mut sorted = matches.clone();
        sorted.sort_unstable();
        assert_eq!(matches, sorted);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(search_commands("GITHUB"), search_commands("github"));
        assert_eq!(search_commands("ExTeRnAl").len(), 2);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(search_commands("zzz_no_match").is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let cmds = commands();
        let mut ids: Vec<_> = cmds.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cmds.len());
    }
}
