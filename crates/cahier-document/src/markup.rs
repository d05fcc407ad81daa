// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTML rendering of a specification for preview and export.
//
// Produces one self-contained document: inline print stylesheet, centred
// header, metadata block, sections in reading order, generation-date footer.
// Embedded `\n` in section content becomes explicit `<br>` markup and all
// interpolated text is HTML-escaped.

use cahier_core::types::Specification;
use chrono::NaiveDate;

const STYLESHEET: &str = "\
    body { font-family: Helvetica, Arial, sans-serif; color: #1F2937; \
           max-width: 720px; margin: 0 auto; padding: 24px; }\n\
    header { text-align: center; border-bottom: 1px solid #E5E7EB; \
             padding-bottom: 16px; }\n\
    header h1 { font-size: 24px; margin-bottom: 8px; }\n\
    header p { font-size: 16px; color: #4B5563; }\n\
    table.metadata { width: 100%; border-collapse: collapse; margin: 16px 0; \
                     border-bottom: 1px solid #E5E7EB; }\n\
    table.metadata th { text-align: left; font-weight: 500; color: #6B7280; \
                        padding: 8px 0; }\n\
    table.metadata td { text-align: right; padding: 8px 0; }\n\
    section { margin-bottom: 24px; }\n\
    section h2 { font-size: 18px; margin-bottom: 12px; }\n\
    section p { font-size: 14px; line-height: 22px; color: #4B5563; }\n\
    footer { border-top: 1px solid #E5E7EB; padding-top: 16px; \
             text-align: center; font-size: 12px; color: #6B7280; }\n\
    @media print { body { padding: 0; } }";

/// Render a specification as a self-contained HTML document.
///
/// `generated_on` is stamped into the footer; callers pass the current date
/// so rendering stays deterministic in tests.
pub fn render_markup(spec: &Specification, generated_on: NaiveDate) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&spec.project_name)));
    html.push_str(&format!("<style>\n{STYLESHEET}\n</style>\n</head>\n<body>\n"));

    html.push_str("<header>\n<h1>CAHIER DES CHARGES</h1>\n");
    html.push_str(&format!("<p>{}</p>\n</header>\n", escape(&spec.project_name)));

    html.push_str("<table class=\"metadata\">\n");
    metadata_row(&mut html, "Type de projet", &spec.project_type);
    metadata_row(&mut html, "Entreprise", &spec.company_name);
    metadata_row(&mut html, "Budget", &spec.budget);
    metadata_row(&mut html, "Délai", &spec.timeline);
    html.push_str("</table>\n");

    html.push_str("<main>\n");
    for section in &spec.sections {
        // The builder already prunes empty sections; skip defensively so a
        // hand-assembled record can never render an empty heading.
        if section.content.trim().is_empty() {
            continue;
        }
        html.push_str("<section>\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape(&section.title)));
        html.push_str(&format!("<p>{}</p>\n", multiline(&section.content)));
        html.push_str("</section>\n");
    }
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<footer>Document généré le {} par Cahier</footer>\n",
        generated_on.format("%d/%m/%Y")
    ));
    html.push_str("</body>\n</html>\n");

    html
}

/// Escape text for interpolation into HTML element content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text and convert embedded line breaks to `<br>` markup.
fn multiline(text: &str) -> String {
    text.split('\n')
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn metadata_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<tr><th>{}</th><td>{}</td></tr>\n",
        escape(label),
        escape(value)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DraftParams, sample};
    use cahier_core::types::Section;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
    }

    #[test]
    fn full_build_renders_every_section_exactly_once() {
        let params = DraftParams {
            project_name: Some("Portail client".into()),
            project_type: Some("Application web".into()),
            company_name: Some("Atelier Numérique".into()),
            company_description: Some("Agence de développement web.".into()),
            primary_objective: Some("Offrir un espace client unifié.".into()),
            secondary_objectives: Some("Réduire les appels au support".into()),
            technical_requirements: Some("Vue.js, Spring Boot".into()),
            technical_constraints: Some("RGPD".into()),
            core_features: Some("Tableau de bord\nFacturation".into()),
            user_profiles: Some("Clients, administrateurs".into()),
            budget_min: Some("8000".into()),
            budget_max: Some("12000".into()),
            start_date: Some("01/09/2025".into()),
            end_date: Some("01/12/2025".into()),
            milestones: Some("MVP".into()),
        };
        let spec = params.build();
        let html = render_markup(&spec, generated_on());

        for section in &spec.sections {
            assert_eq!(
                html.matches(&format!("<h2>{}</h2>", section.title)).count(),
                1,
                "title {} must appear exactly once",
                section.title
            );
        }
        // Line breaks in content arrive as <br> markup.
        assert!(html.contains("Tableau de bord<br>Facturation"));
    }

    #[test]
    fn line_breaks_become_br_markup() {
        let spec = sample();
        let html = render_markup(&spec, generated_on());
        assert!(html.contains("- Frontend: React Native<br>- Backend: Spring Boot"));
        assert!(!html.contains("React Native\n- Backend"));
    }

    #[test]
    fn metadata_and_footer_are_present() {
        let html = render_markup(&sample(), generated_on());
        assert!(html.contains("<th>Type de projet</th><td>Application mobile</td>"));
        assert!(html.contains("<th>Entreprise</th><td>TechSolutions SAS</td>"));
        assert!(html.contains("<th>Budget</th><td>5000€ - 10000€</td>"));
        assert!(html.contains("<th>Délai</th><td>15/07/2025 - 15/10/2025</td>"));
        assert!(html.contains("Document généré le 15/07/2025 par Cahier"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut spec = sample();
        spec.project_name = "R&D <beta>".into();
        spec.sections = vec![Section::new("A & B", "x < y")];

        let html = render_markup(&spec, generated_on());
        assert!(html.contains("R&amp;D &lt;beta&gt;"));
        assert!(html.contains("<h2>A &amp; B</h2>"));
        assert!(html.contains("x &lt; y"));
        assert!(!html.contains("<beta>"));
    }

    #[test]
    fn empty_section_never_renders_a_heading() {
        let mut spec = sample();
        spec.sections = vec![Section::new("Vide", "   ")];
        let html = render_markup(&spec, generated_on());
        assert!(!html.contains("<h2>Vide</h2>"));
    }
}
