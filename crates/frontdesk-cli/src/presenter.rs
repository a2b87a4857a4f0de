use colored::Colorize;
use frontdesk_forms::{ErrorMap, FormView, Presenter, SubmissionResult};

/// Prints submission progress and outcome to stdout
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&self, view: &FormView) {
        if view.submitting {
            println!("{} {}", "→".cyan(), format!("Submitting {}...", view.form).dimmed());
            return;
        }
        match &view.result {
            Some(SubmissionResult::Success(message)) => {
                println!("  {} {}", "✓".green(), message.green().bold());
            }
            Some(SubmissionResult::Failure(message)) => {
                println!("  {} {}", "✗".red(), message.red().bold());
                print_errors(&view.errors);
            }
            None => {}
        }
    }
}

/// One line per field error
pub fn print_errors(errors: &ErrorMap) {
    for (field, message) in errors {
        println!("    {} {}", format!("{}:", field).yellow(), message);
    }
}
