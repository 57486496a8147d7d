//! Plain-text rendering of recipes

use recipebox_model::{scaled_ingredient_lines, Recipe};

fn check_mark(recipe: &Recipe) -> &'static str {
    if recipe.is_prepared() {
        "[x]"
    } else {
        "[ ]"
    }
}

/// One list row: check mark, course caption, name
pub(crate) fn row(recipe: &Recipe) -> String {
    format!(
        "{} {:<10} {}",
        check_mark(recipe),
        recipe.meal_course.label(),
        recipe.name
    )
}

/// Full recipe sheet at the given scale
pub(crate) fn detail(recipe: &Recipe, scale: f64) -> String {
    let mut lines = vec![
        recipe.name.clone(),
        format!("{} Previously Prepared", check_mark(recipe)),
        recipe.cuisine.label(),
    ];
    if let Some(url) = &recipe.thumbnail_url {
        lines.push(format!("Image: {url}"));
    }
    lines.extend(recipe.details.iter().cloned());
    if let Some(credit) = &recipe.credit {
        lines.push(format!("Credit: {credit}"));
    }

    lines.push(String::new());
    lines.push(format!("Ingredients (x{scale})"));
    for (label, section) in scaled_ingredient_lines(recipe, scale) {
        if let Some(label) = label {
            lines.push(String::new());
            lines.push(label.to_string());
        }
        lines.extend(section.into_iter().map(|line| format!("  {line}")));
    }

    if !recipe.instructions().is_empty() {
        lines.push(String::new());
        lines.push("Instructions".to_string());
        lines.extend(
            recipe
                .instructions()
                .iter()
                .map(|step| format!("  {}", step.instruction_text)),
        );
    }

    lines.push(String::new());
    lines.push("Notes".to_string());
    lines.push(recipe.notes.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
