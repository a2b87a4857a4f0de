use anyhow::Result;
use colored::Colorize;
use frontdesk_forms::{initial_values, FormState, QueryParams};

use super::lookup;
use crate::input::FormInput;
use crate::presenter::print_errors;

pub fn execute(form: &str, input: &FormInput) -> Result<bool> {
    let schema = lookup(form)?;
    let mut state = FormState::with_system_clock(schema);

    if let Some(query) = &input.query {
        let values = initial_values(state.schema(), &QueryParams::parse(query));
        state.prefill(values);
    }
    for (name, value) in &input.values {
        state.set_field(name, value.as_str())?;
    }
    for (name, attachment) in input.attachments()? {
        state.set_field(&name, attachment)?;
    }

    if state.validate_all() {
        println!("{} {}", "✓".green(), format!("{} is valid", form).green().bold());
        Ok(true)
    } else {
        println!(
            "{} {}",
            "✗".red(),
            format!("{} has {} error(s)", form, state.errors().len()).red().bold()
        );
        print_errors(state.errors());
        Ok(false)
    }
}
