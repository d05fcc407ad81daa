// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Specification assembly — maps raw form parameters into the normalized
// document record.
//
// Two invariants hold for every built record: scalar fields never end up
// empty (missing input falls back to a readable placeholder), and sections
// whose content trims to nothing are dropped so the document never shows an
// empty heading. Whitespace-only input counts as missing.

use cahier_core::types::{Section, Specification};

// Placeholder text for scalar fields with no input.
const UNTITLED_PROJECT: &str = "Untitled project";
const UNSPECIFIED_TYPE: &str = "Unspecified type";
const UNNAMED_COMPANY: &str = "Unnamed company";
const NO_DESCRIPTION: &str = "No company description provided";
const NO_OBJECTIVE: &str = "No primary objective provided";
const UNSPECIFIED_BUDGET: &str = "Budget to be defined";
const UNSPECIFIED_TIMELINE: &str = "Timeline to be defined";
const NO_REQUIREMENTS: &str = "No technical requirements provided";

/// Raw form parameters for one specification.
///
/// Arrives as named string navigation parameters from the composer form;
/// every field is optional.
#[derive(Debug, Clone, Default)]
pub struct DraftParams {
    pub project_name: Option<String>,
    pub project_type: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub primary_objective: Option<String>,
    pub secondary_objectives: Option<String>,
    pub technical_requirements: Option<String>,
    pub technical_constraints: Option<String>,
    pub core_features: Option<String>,
    pub user_profiles: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub milestones: Option<String>,
}

impl DraftParams {
    /// Build the normalized `Specification` from these parameters.
    pub fn build(&self) -> Specification {
        let budget = self.budget_line();
        let timeline = self.timeline_line();

        let mut sections = Vec::new();
        push_section(
            &mut sections,
            "Présentation du projet",
            trimmed(&self.company_description).unwrap_or_default(),
        );
        push_section(&mut sections, "Objectifs", self.objectives_block());
        push_section(
            &mut sections,
            "Spécifications techniques",
            trimmed(&self.technical_requirements).unwrap_or_default(),
        );
        push_section(
            &mut sections,
            "Contraintes techniques",
            trimmed(&self.technical_constraints).unwrap_or_default(),
        );
        push_section(
            &mut sections,
            "Fonctionnalités principales",
            trimmed(&self.core_features).unwrap_or_default(),
        );
        push_section(
            &mut sections,
            "Profils utilisateurs",
            trimmed(&self.user_profiles).unwrap_or_default(),
        );
        push_section(&mut sections, "Budget et délais", self.schedule_block());

        Specification {
            id: None,
            project_name: or_placeholder(&self.project_name, UNTITLED_PROJECT),
            project_type: or_placeholder(&self.project_type, UNSPECIFIED_TYPE),
            company_name: or_placeholder(&self.company_name, UNNAMED_COMPANY),
            company_description: or_placeholder(&self.company_description, NO_DESCRIPTION),
            primary_objective: or_placeholder(&self.primary_objective, NO_OBJECTIVE),
            budget: budget.unwrap_or_else(|| UNSPECIFIED_BUDGET.into()),
            timeline: timeline.unwrap_or_else(|| UNSPECIFIED_TIMELINE.into()),
            technical_requirements: or_placeholder(&self.technical_requirements, NO_REQUIREMENTS),
            sections,
        }
    }

    /// Budget range from the two bound parameters, e.g. "5000€ - 10000€".
    fn budget_line(&self) -> Option<String> {
        match (trimmed(&self.budget_min), trimmed(&self.budget_max)) {
            (Some(min), Some(max)) => Some(format!("{min}€ - {max}€")),
            (Some(one), None) | (None, Some(one)) => Some(format!("{one}€")),
            (None, None) => None,
        }
    }

    /// Timeline range from the two date parameters, e.g. "15/07/2025 - 15/10/2025".
    fn timeline_line(&self) -> Option<String> {
        match (trimmed(&self.start_date), trimmed(&self.end_date)) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(one), None) | (None, Some(one)) => Some(one),
            (None, None) => None,
        }
    }

    /// Primary and secondary objectives as one block, one per line.
    fn objectives_block(&self) -> String {
        let mut lines = Vec::new();
        if let Some(primary) = trimmed(&self.primary_objective) {
            lines.push(primary);
        }
        if let Some(secondary) = trimmed(&self.secondary_objectives) {
            lines.push(secondary);
        }
        lines.join("\n")
    }

    /// The "Budget et délais" body, composed from the four bound parameters
    /// plus the milestones. Empty when none of them were supplied, so the
    /// whole section is dropped.
    fn schedule_block(&self) -> String {
        let mut lines = Vec::new();
        if let Some(budget) = self.budget_line() {
            lines.push(format!("- Budget : {budget}"));
        }
        if let Some(timeline) = self.timeline_line() {
            lines.push(format!("- Délai : {timeline}"));
        }
        if let Some(milestones) = trimmed(&self.milestones) {
            lines.push(format!("- Jalons : {milestones}"));
        }
        lines.join("\n")
    }
}

/// The trimmed parameter, or None when absent or whitespace-only.
fn trimmed(param: &Option<String>) -> Option<String> {
    param
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn or_placeholder(param: &Option<String>, placeholder: &str) -> String {
    trimmed(param).unwrap_or_else(|| placeholder.to_string())
}

fn push_section(sections: &mut Vec<Section>, title: &str, content: String) {
    if !content.trim().is_empty() {
        sections.push(Section::new(title, content));
    }
}

/// The built-in sample record shown when the preview screen is opened
/// without parameters. Also serves as a test fixture.
pub fn sample() -> Specification {
    Specification {
        id: None,
        project_name: "Application de gestion de tâches".into(),
        project_type: "Application mobile".into(),
        company_name: "TechSolutions SAS".into(),
        company_description:
            "Entreprise spécialisée dans le développement de solutions technologiques innovantes."
                .into(),
        primary_objective: "Créer une application mobile permettant aux utilisateurs de gérer \
                            leurs tâches quotidiennes, professionnelles et personnelles."
            .into(),
        budget: "5000€ - 10000€".into(),
        timeline: "15/07/2025 - 15/10/2025".into(),
        technical_requirements: "React Native, Spring Boot, PostgreSQL".into(),
        sections: vec![
            Section::new(
                "Présentation du projet",
                "L'application de gestion de tâches vise à offrir une solution intuitive et \
                 performante pour aider les utilisateurs à organiser leurs tâches quotidiennes. \
                 L'application permettra de créer, modifier, supprimer des tâches, de les \
                 organiser par catégories, et de suivre leur progression.",
            ),
            Section::new(
                "Objectifs",
                "- Permettre aux utilisateurs de créer et gérer des tâches\n\
                 - Offrir un système de catégorisation des tâches\n\
                 - Implémenter des rappels et notifications\n\
                 - Fournir des statistiques sur la productivité\n\
                 - Permettre la synchronisation entre différents appareils",
            ),
            Section::new(
                "Spécifications techniques",
                "- Frontend: React Native\n\
                 - Backend: Spring Boot\n\
                 - Base de données: PostgreSQL\n\
                 - Authentication: JWT\n\
                 - API REST pour la communication entre le frontend et le backend",
            ),
            Section::new(
                "Fonctionnalités principales",
                "1. Gestion des tâches (CRUD)\n\
                 2. Catégorisation des tâches\n\
                 3. Système de rappels et notifications\n\
                 4. Système de priorités pour les tâches\n\
                 5. Statistiques de productivité\n\
                 6. Synchronisation multi-appareils\n\
                 7. Mode hors-ligne avec synchronisation ultérieure",
            ),
            Section::new(
                "Contraintes",
                "- L'application doit être compatible avec iOS 13+ et Android 8+\n\
                 - L'interface utilisateur doit être intuitive et accessible\n\
                 - Les données des utilisateurs doivent être sécurisées\n\
                 - L'application doit fonctionner en mode hors-ligne",
            ),
            Section::new(
                "Livrables",
                "- Code source complet\n\
                 - Documentation technique\n\
                 - Guide d'utilisation\n\
                 - Application déployée sur les stores (App Store et Google Play)",
            ),
            Section::new(
                "Budget et délais",
                "- Budget: 5000€ - 10000€\n\
                 - Délai: 3 mois (15/07/2025 - 15/10/2025)\n\
                 - Possibilité d'extension pour des fonctionnalités additionnelles",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a full parameter set touching every section.
    fn full_params() -> DraftParams {
        DraftParams {
            project_name: Some("Portail client".into()),
            project_type: Some("Application web".into()),
            company_name: Some("Atelier Numérique".into()),
            company_description: Some("Agence de développement web.".into()),
            primary_objective: Some("Offrir un espace client unifié.".into()),
            secondary_objectives: Some("- Réduire les appels au support".into()),
            technical_requirements: Some("Vue.js, Spring Boot".into()),
            technical_constraints: Some("RGPD, hébergement en France".into()),
            core_features: Some("1. Tableau de bord\n2. Facturation".into()),
            user_profiles: Some("Clients, administrateurs".into()),
            budget_min: Some("8000".into()),
            budget_max: Some("12000".into()),
            start_date: Some("01/09/2025".into()),
            end_date: Some("01/12/2025".into()),
            milestones: Some("Maquettes, MVP, recette".into()),
        }
    }

    #[test]
    fn empty_and_whitespace_sections_are_dropped() {
        let params = DraftParams {
            project_name: Some("P".into()),
            company_description: Some("   ".into()),
            technical_requirements: Some("Rust".into()),
            ..DraftParams::default()
        };
        let spec = params.build();

        let titles: Vec<&str> = spec.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Spécifications techniques"]);
        assert!(spec.sections.iter().all(|s| !s.content.trim().is_empty()));
    }

    #[test]
    fn missing_scalars_fall_back_to_placeholders() {
        let spec = DraftParams::default().build();

        assert_eq!(spec.project_name, "Untitled project");
        assert_eq!(spec.project_type, "Unspecified type");
        assert_eq!(spec.company_name, "Unnamed company");
        assert!(!spec.company_description.is_empty());
        assert!(!spec.primary_objective.is_empty());
        assert!(!spec.budget.is_empty());
        assert!(!spec.timeline.is_empty());
        assert!(!spec.technical_requirements.is_empty());
        assert!(spec.id.is_none());
    }

    #[test]
    fn sections_keep_reading_order() {
        let spec = full_params().build();
        let titles: Vec<&str> = spec.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Présentation du projet",
                "Objectifs",
                "Spécifications techniques",
                "Contraintes techniques",
                "Fonctionnalités principales",
                "Profils utilisateurs",
                "Budget et délais",
            ]
        );
    }

    #[test]
    fn budget_and_timeline_interpolate_bounds() {
        let spec = full_params().build();
        assert_eq!(spec.budget, "8000€ - 12000€");
        assert_eq!(spec.timeline, "01/09/2025 - 01/12/2025");

        let schedule = spec
            .sections
            .iter()
            .find(|s| s.title == "Budget et délais")
            .expect("schedule section");
        assert!(schedule.content.contains("- Budget : 8000€ - 12000€"));
        assert!(schedule.content.contains("- Délai : 01/09/2025 - 01/12/2025"));
        assert!(schedule.content.contains("- Jalons : Maquettes, MVP, recette"));
    }

    #[test]
    fn single_budget_bound_is_kept() {
        let params = DraftParams {
            budget_min: Some("5000".into()),
            ..DraftParams::default()
        };
        assert_eq!(params.build().budget, "5000€");
    }

    #[test]
    fn schedule_section_absent_without_any_bound() {
        let params = DraftParams {
            project_name: Some("P".into()),
            ..DraftParams::default()
        };
        let spec = params.build();
        assert!(spec.sections.iter().all(|s| s.title != "Budget et délais"));
        // The scalar still shows a placeholder.
        assert_eq!(spec.budget, "Budget to be defined");
    }

    #[test]
    fn objectives_combine_primary_and_secondary() {
        let spec = full_params().build();
        let objectives = spec
            .sections
            .iter()
            .find(|s| s.title == "Objectifs")
            .expect("objectives section");
        assert_eq!(
            objectives.content,
            "Offrir un espace client unifié.\n- Réduire les appels au support"
        );
    }

    #[test]
    fn sample_is_complete() {
        let spec = sample();
        assert_eq!(spec.sections.len(), 7);
        assert!(spec.id.is_none());
        assert!(spec.sections.iter().all(|s| !s.content.trim().is_empty()));
    }
}
