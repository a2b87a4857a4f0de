use anyhow::Result;
use colored::Colorize;
use frontdesk_forms::presets;

use super::lookup;

pub fn execute(form: Option<&str>) -> Result<bool> {
    let Some(form) = form else {
        println!("{}", "Available forms:".green().bold());
        for name in presets::ALL {
            println!("  {}", name.cyan());
        }
        return Ok(true);
    };

    let schema = lookup(form)?;
    println!("{} {}", "Form:".green().bold(), schema.name.cyan());
    println!();

    for field in &schema.fields {
        let mut flags = Vec::new();
        if field.required {
            flags.push("required".yellow().to_string());
        }
        if field.locked {
            flags.push("locked".dimmed().to_string());
        }
        if let Some(param) = &field.query_param {
            flags.push(format!("query: {}", param));
        }
        if let Some(alias) = &field.wire_alias {
            flags.push(format!("alias: {}", alias));
        }
        println!(
            "  {:<18} {:<10} {:<22} {}",
            field.name.bold(),
            field.kind.input_type(),
            field.label,
            flags.join(", ")
        );
    }

    if let Some(guard) = &schema.guard_field {
        println!();
        println!("Duplicate guard on: {}", guard.cyan());
    }

    Ok(true)
}
